//! Work session handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use tracker_entity::Id;
use tracker_entity::session::Session;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiPath, RequestCtx};
use crate::state::AppState;

/// GET /api/v1/sessions/{userId}
pub async fn list_sessions(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ApiPath(user_id): ApiPath<Id>,
) -> ApiResult<Json<ApiResponse<Vec<Session>>>> {
    let sessions = state.session_service.list(&ctx, user_id).await?;
    Ok(Json(ApiResponse::ok(sessions)))
}

/// POST /api/v1/sessions/{userId}/{taskId}
pub async fn start_session(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ApiPath((user_id, task_id)): ApiPath<(Id, Id)>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Session>>)> {
    let session = state.session_service.start(&ctx, user_id, task_id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(session))))
}

/// DELETE /api/v1/sessions/{userId}/{taskId}
pub async fn stop_session(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ApiPath((user_id, task_id)): ApiPath<(Id, Id)>,
) -> ApiResult<Json<ApiResponse<Session>>> {
    let session = state.session_service.stop(&ctx, user_id, task_id).await?;
    Ok(Json(ApiResponse::ok(session)))
}
