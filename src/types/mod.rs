//! Data types for the calendar server
//!
//! This module contains the core data structures shared by the store,
//! the validators and the HTTP layer.

mod event;
mod span;

pub use event::{Event, DATE_FORMAT};
pub use span::Span;
