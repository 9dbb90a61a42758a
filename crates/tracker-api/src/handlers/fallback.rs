//! Responses for requests that match no route.

use axum::Json;
use axum::extract::OriginalUri;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

use tracker_core::error::AppError;

use crate::error::{ApiError, ApiErrorResponse};

/// Unknown path.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    AppError::not_found(format!("No route for {}", uri.path())).into()
}

/// Known path, unsupported method.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    let body = ApiErrorResponse {
        error: "METHOD_NOT_ALLOWED".to_string(),
        message: format!("Method {method} is not allowed on {}", uri.path()),
        details: None,
    };
    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}
