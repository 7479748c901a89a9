//! Body validation for create/update/delete requests

use serde::Deserialize;

use super::{parse_date, ValidationError, ValidationResult};
use crate::types::Event;

/// Raw create/update body; missing fields are reported per field
#[derive(Debug, Deserialize)]
struct EventPayload {
    id: Option<i64>,
    user_id: Option<i64>,
    name: Option<String>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeletePayload {
    id: Option<i64>,
}

fn decode<'a, T: Deserialize<'a>>(body: &'a [u8]) -> ValidationResult<T> {
    serde_json::from_slice(body).map_err(|e| ValidationError::Malformed(e.to_string()))
}

fn non_negative(field: &'static str, value: Option<i64>) -> ValidationResult<i64> {
    match value {
        Some(v) if v >= 0 => Ok(v),
        Some(v) => Err(ValidationError::invalid(
            field,
            format!("must be non-negative, got {v}"),
        )),
        None => Err(ValidationError::invalid(field, "is required")),
    }
}

/// Decode and validate a create/update body into an [`Event`]
pub fn parse_event_payload(body: &[u8]) -> ValidationResult<Event> {
    let payload: EventPayload = decode(body)?;

    let id = non_negative("id", payload.id)?;
    let user_id = non_negative("user_id", payload.user_id)?;

    let name = match payload.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ValidationError::invalid("name", "is required")),
    };

    let date = match payload.date {
        Some(date) => parse_date("date", &date)?,
        None => return Err(ValidationError::invalid("date", "is required")),
    };

    Ok(Event {
        id,
        user_id,
        name,
        date,
    })
}

/// Decode a delete body into the target id
pub fn parse_delete_payload(body: &[u8]) -> ValidationResult<i64> {
    let payload: DeletePayload = decode(body)?;
    payload
        .id
        .ok_or_else(|| ValidationError::invalid("id", "is required"))
}
