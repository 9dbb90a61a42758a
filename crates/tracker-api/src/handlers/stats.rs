//! Per-task duration statistics handler.

use axum::Json;
use axum::extract::State;

use tracker_entity::Id;

use crate::dto::request::StatsQuery;
use crate::dto::response::{ApiResponse, TaskStatResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiPath, ApiQuery, RequestCtx};
use crate::state::AppState;

/// GET /api/v1/users/{userId}/stats
pub async fn user_stats(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ApiPath(user_id): ApiPath<Id>,
    ApiQuery(query): ApiQuery<StatsQuery>,
) -> ApiResult<Json<ApiResponse<Vec<TaskStatResponse>>>> {
    let window = query.into_window()?;
    let stats = state.session_service.stats(&ctx, user_id, window).await?;
    Ok(Json(ApiResponse::ok(
        stats.iter().map(TaskStatResponse::from).collect(),
    )))
}
