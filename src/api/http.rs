//! HTTP server setup with Axum

use std::any::Any;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tracing::info;

use super::rest::{events, queries, ApiError};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/health", get(health_check))
        .route("/create_event", post(events::create_event).fallback(wrong_method))
        .route("/update_event", post(events::update_event).fallback(wrong_method))
        .route("/delete_event", post(events::delete_event).fallback(wrong_method))
        .route("/events_for_day", get(queries::events_for_day).fallback(wrong_method))
        .route("/events_for_week", get(queries::events_for_week).fallback(wrong_method))
        .route("/events_for_month", get(queries::events_for_month).fallback(wrong_method))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
        "events": state.store.len(),
    }))
}

async fn wrong_method(method: Method) -> ApiError {
    ApiError::wrong_method(&method)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Log every handled request with its status and latency
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %uri,
        status = response.status().as_u16(),
        elapsed = ?started.elapsed(),
        "request"
    );
    response
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::internal(format!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let health: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["events"], 0);
    }

    #[tokio::test]
    async fn test_wrong_method_is_bad_request() {
        let app = create_router(AppState::default());

        let (status, body) = send(
            app,
            Request::builder()
                .method("GET")
                .uri("/create_event")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains(r#""error""#));
        assert!(body.contains("method"));
    }

    #[tokio::test]
    async fn test_post_to_query_route_is_bad_request() {
        let app = create_router(AppState::default());

        let (status, _) = send(
            app,
            Request::builder()
                .method("POST")
                .uri("/events_for_day?user_id=1&date=2024-03-04")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_router(AppState::default());

        let (status, body) = send(
            app,
            Request::builder().uri("/nope").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"not found"}"#);
    }

    #[test]
    fn test_panic_response_is_generic_500() {
        let response = panic_response(Box::new("secret detail"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
