//! Calendar Events Server
//!
//! An in-memory calendar event store exposed over a small JSON HTTP API.
//!
//! # Features
//!
//! - **CRUD**: create, update (full replace) and delete events by id
//! - **Range queries**: events of a user for a day, week or calendar month
//! - **Thread-Safe**: one reader/writer lock over the whole collection
//! - **Uniform errors**: `{"error": ...}` with 400 / 503 / 500 status codes
//!
//! # Modules
//!
//! - `types`: Core data structures (Event, Span)
//! - `event_store`: The concurrent in-memory store
//! - `validation`: Payload and query-parameter validation
//! - `api`: Axum router, handlers and response mapping
//! - `config`: Command line and environment configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use calendar_events::{create_router, AppState, EventStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(EventStore::new());
//!     let app = create_router(AppState::new(store));
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod event_store;
pub mod types;
pub mod validation;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use config::ServerConfig;
pub use event_store::{EventStore, StoreError, StoreResult};
pub use types::{Event, Span};
pub use validation::ValidationError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
