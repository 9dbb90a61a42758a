//! User registry handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use tracker_entity::Id;
use tracker_entity::user::User;

use crate::dto::request::{CreateUserRequest, ListUsersQuery, UpdateUserRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiJson, ApiPath, ApiQuery, RequestCtx, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ApiQuery(query): ApiQuery<ListUsersQuery>,
) -> ApiResult<Json<ApiResponse<Vec<User>>>> {
    let (filter, page) = query.into_parts();
    let users = state.user_service.find(&ctx, &filter, &page).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = state
        .user_service
        .create(&ctx, &req.passport_number)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// GET /api/v1/users/{userId}
pub async fn get_user(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ApiPath(user_id): ApiPath<Id>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user = state.user_service.get(&ctx, user_id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/v1/users/{userId}
pub async fn update_user(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ApiPath(user_id): ApiPath<Id>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user = state
        .user_service
        .update(&ctx, user_id, &req.into())
        .await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/v1/users/{userId}
pub async fn delete_user(
    State(state): State<AppState>,
    ctx: RequestCtx,
    ApiPath(user_id): ApiPath<Id>,
) -> ApiResult<StatusCode> {
    state.user_service.delete(&ctx, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
