//! Event mutation endpoints

use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::validation::{parse_delete_payload, parse_event_payload, ValidationError};

/// Body read failures with a 4xx status (e.g. over the length limit) are malformed input
fn body_bytes(body: Result<Bytes, BytesRejection>) -> Result<Bytes, ApiError> {
    body.map_err(|rejection| {
        if rejection.status().is_client_error() {
            ApiError::from(ValidationError::Malformed(rejection.body_text()))
        } else {
            ApiError::internal(format!("failed to read body: {rejection}"))
        }
    })
}

/// POST /create_event - Create a new event
pub async fn create_event(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ApiResponse, ApiError> {
    let event = parse_event_payload(&body_bytes(body)?)?;
    state.store.create(event.clone())?;
    Ok(ApiResponse::single(event))
}

/// POST /update_event - Replace an existing event
pub async fn update_event(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ApiResponse, ApiError> {
    let event = parse_event_payload(&body_bytes(body)?)?;
    state.store.update(event.clone())?;
    Ok(ApiResponse::single(event))
}

/// POST /delete_event - Delete an event, returning it
pub async fn delete_event(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ApiResponse, ApiError> {
    let id = parse_delete_payload(&body_bytes(body)?)?;
    let removed = state.store.delete(id)?;
    Ok(ApiResponse::single(removed))
}
