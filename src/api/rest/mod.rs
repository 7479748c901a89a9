//! REST API module for HTTP endpoints
//!
//! Provides the calendar endpoints:
//! - `POST /create_event` - Create an event
//! - `POST /update_event` - Replace an existing event
//! - `POST /delete_event` - Delete an event by id
//! - `GET /events_for_day` - Events of a user on one day
//! - `GET /events_for_week` - Events of a user over seven days
//! - `GET /events_for_month` - Events of a user over one calendar month
//!
//! Every response is JSON: `{"result": [...]}` on success, `{"error": "..."}`
//! on failure.

pub mod events;
pub mod queries;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::event_store::StoreError;
use crate::types::Event;
use crate::validation::ValidationError;

/// Status for business-rule failures (duplicate or missing id)
pub const BUSINESS_ERROR_STATUS: StatusCode = StatusCode::SERVICE_UNAVAILABLE;

/// Message sent for unclassified failures; details stay in the logs
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Success envelope; always a list, never null
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub result: Vec<Event>,
}

impl ApiResponse {
    pub fn new(result: Vec<Event>) -> Self {
        Self { result }
    }

    pub fn single(event: Event) -> Self {
        Self::new(vec![event])
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Error envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Every way a request can fail
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("route not found")]
    NotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Request reached a route with the wrong HTTP verb
    pub fn wrong_method(method: &axum::http::Method) -> Self {
        ApiError::Validation(ValidationError::invalid(
            "method",
            format!("{method} is not allowed here"),
        ))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => BUSINESS_ERROR_STATUS,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    fn message(&self) -> String {
        match self {
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            ApiError::NotFound => "not found".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(detail) => error!(%detail, "request failed"),
            ApiError::Store(err) => warn!(%err, "business rule rejected request"),
            _ => {}
        }

        (status, Json(ErrorBody { error: self.message() })).into_response()
    }
}
