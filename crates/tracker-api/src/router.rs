//! Route definitions for the time tracker HTTP API.
//!
//! All routes are mounted under `/api/v1`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::panic::catch_panic_layer;
use crate::middleware::request_id::{self, MakeRequestUuid};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Outermost first: request id assignment and propagation, tracing span,
/// access log, CORS, timeout, panic recovery. Unknown paths and methods
/// answer with the JSON error body.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;
    let timeout = Duration::from_secs(server.request_timeout_seconds);
    let cors = build_cors_layer(&server.cors);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(session_routes())
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed);

    Router::new()
        .nest("/api/v1", api_routes)
        .fallback(handlers::fallback::not_found)
        .layer(catch_panic_layer())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(request_id::trace_layer())
        .layer(PropagateRequestIdLayer::new(request_id::header()))
        .layer(SetRequestIdLayer::new(request_id::header(), MakeRequestUuid))
        .with_state(state)
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/status", get(handlers::health::status))
}

/// User registry and statistics
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route(
            "/users/{user_id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
        .route("/users/{user_id}/stats", get(handlers::stats::user_stats))
}

/// Session start/stop and listing
fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions/{user_id}",
            get(handlers::session::list_sessions),
        )
        .route(
            "/sessions/{user_id}/{task_id}",
            post(handlers::session::start_session).delete(handlers::session::stop_session),
        )
}
