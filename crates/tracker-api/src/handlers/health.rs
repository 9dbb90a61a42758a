//! Health check handlers.

use axum::Json;

use crate::dto::response::{ApiResponse, StatusResponse};

/// GET /api/v1/status
pub async fn status() -> Json<ApiResponse<StatusResponse>> {
    Json(ApiResponse::ok(StatusResponse {
        status: "OK".to_string(),
    }))
}
