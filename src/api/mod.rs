//! API module for the HTTP endpoints
//!
//! This module wires the event store to a JSON HTTP API.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
