//! Event Store - authoritative in-memory event collection
//!
//! All mutations take the write guard for a single map operation; range
//! queries take the read guard for the whole scan. No I/O happens while a
//! guard is held.

use std::collections::HashMap;

use chrono::NaiveDate;
use parking_lot::RwLock;
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::types::{Event, Span};

/// Store size above which range scans run on the rayon pool
const PARALLEL_SCAN_THRESHOLD: usize = 1000;

/// Result type for EventStore operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Business-rule failures raised by the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("event {0} already exists")]
    Duplicate(i64),
    #[error("event {0} does not exist")]
    NotFound(i64),
}

/// Thread-safe map of event id to event
#[derive(Debug, Default)]
pub struct EventStore {
    events: RwLock<HashMap<i64, Event>>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new event, failing if its id is taken
    pub fn create(&self, event: Event) -> StoreResult<()> {
        let mut events = self.events.write();
        if events.contains_key(&event.id) {
            return Err(StoreError::Duplicate(event.id));
        }

        debug!(id = event.id, user_id = event.user_id, "event created");
        events.insert(event.id, event);
        Ok(())
    }

    /// Replace an existing event wholesale
    pub fn update(&self, event: Event) -> StoreResult<()> {
        let mut events = self.events.write();
        match events.get_mut(&event.id) {
            Some(stored) => {
                debug!(id = event.id, user_id = event.user_id, "event updated");
                *stored = event;
                Ok(())
            }
            None => Err(StoreError::NotFound(event.id)),
        }
    }

    /// Remove an event, returning the removed record
    pub fn delete(&self, id: i64) -> StoreResult<Event> {
        let removed = self.events.write().remove(&id);
        match removed {
            Some(event) => {
                debug!(id, "event deleted");
                Ok(event)
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Get a copy of a single event
    pub fn get(&self, id: i64) -> Option<Event> {
        self.events.read().get(&id).cloned()
    }

    /// Number of stored events
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Events of `user_id` dated in `[anchor, anchor + span)`, in no particular order
    pub fn query_range(&self, user_id: i64, anchor: NaiveDate, span: Span) -> Vec<Event> {
        let end = span.end(anchor);
        let guard = self.events.read();
        let events: &HashMap<i64, Event> = &guard;

        if events.len() > PARALLEL_SCAN_THRESHOLD {
            events
                .par_iter()
                .map(|(_, event)| event)
                .filter(|event| event.is_within(user_id, anchor, end))
                .cloned()
                .collect()
        } else {
            events
                .values()
                .filter(|event| event.is_within(user_id, anchor, end))
                .cloned()
                .collect()
        }
    }
}
