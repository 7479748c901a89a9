//! Request validation
//!
//! Turns raw request bodies and query strings into typed values before they
//! reach the store. Every function here is pure and never panics.

mod params;
mod payload;

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::DATE_FORMAT;

pub use params::{parse_range_params, RangeParams};
pub use payload::{parse_delete_payload, parse_event_payload};

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Input rejected before reaching the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input could not be decoded into the expected shape
    #[error("malformed request: {0}")]
    Malformed(String),
    /// Input decoded but a field broke a constraint
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Malformed(_) => None,
            Self::Invalid { field, .. } => Some(*field),
        }
    }
}

/// Check the literal `YYYY-MM-DD` shape; chrono alone accepts `2024-3-4` or `+2024-03-04`
fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a `YYYY-MM-DD` calendar date
pub(crate) fn parse_date(field: &'static str, value: &str) -> ValidationResult<NaiveDate> {
    let invalid = || {
        ValidationError::invalid(field, format!("'{value}' is not a YYYY-MM-DD date"))
    };

    if !is_iso_date_shape(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}
