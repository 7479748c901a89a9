//! Calendar event record
//!
//! An event is stored whole and replaced whole; the store never patches
//! individual fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format for event dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single calendar entry owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    /// Calendar day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Event {
    /// Create a new event
    pub fn new(id: i64, user_id: i64, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            user_id,
            name: name.into(),
            date,
        }
    }

    /// Check whether the event belongs to `user_id` and falls in `[start, end)`.
    ///
    /// A missing `end` means the window has no upper bound.
    pub fn is_within(&self, user_id: i64, start: NaiveDate, end: Option<NaiveDate>) -> bool {
        self.user_id == user_id
            && self.date >= start
            && end.map_or(true, |end| self.date < end)
    }
}
