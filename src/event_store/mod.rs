//! Event Store Module
//!
//! Holds the calendar events in memory behind a single reader/writer lock.
//!
//! ```text
//! Write Path:                         Read Path:
//! ┌──────────────┐   ┌────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │ create/update│──►│ write guard│   │ query_range  │──►│ read guard, scan │
//! │ delete       │   │ map op     │   │ day/week/mon │   │ [anchor, end)    │
//! └──────────────┘   └────────────┘   └──────────────┘   └──────────────────┘
//! ```

mod store;

pub use store::{EventStore, StoreError, StoreResult};
