//! Range query endpoints

use axum::extract::{rejection::QueryRejection, Query, State};
use tracing::debug;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::Span;
use crate::validation::{parse_range_params, ValidationError};

/// Raw pairs in request order, so repeated keys stay visible to validation
type RawParams = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn events_in_span(
    state: &AppState,
    params: RawParams,
    span: Span,
) -> Result<ApiResponse, ApiError> {
    let Query(params) = params.map_err(|e| ValidationError::Malformed(e.body_text()))?;
    let params = parse_range_params(&params)?;

    let events = state.store.query_range(params.user_id, params.date, span);
    debug!(
        user_id = params.user_id,
        date = %params.date,
        %span,
        count = events.len(),
        "range query"
    );
    Ok(ApiResponse::new(events))
}

/// GET /events_for_day - Events on the anchor date
pub async fn events_for_day(
    State(state): State<AppState>,
    params: RawParams,
) -> Result<ApiResponse, ApiError> {
    events_in_span(&state, params, Span::Day)
}

/// GET /events_for_week - Events in the seven days from the anchor date
pub async fn events_for_week(
    State(state): State<AppState>,
    params: RawParams,
) -> Result<ApiResponse, ApiError> {
    events_in_span(&state, params, Span::Week)
}

/// GET /events_for_month - Events in the calendar month from the anchor date
pub async fn events_for_month(
    State(state): State<AppState>,
    params: RawParams,
) -> Result<ApiResponse, ApiError> {
    events_in_span(&state, params, Span::Month)
}
