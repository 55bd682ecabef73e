//! User handlers

use axum::{
    extract::{Path, State},
    Json,
};
use cookbook_service::{CreateUserRequest, UserResponse, UserService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Fetch a single user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.fetch(user_id).await?;
    Ok(Json(response))
}

/// Remove a user along with the recipes it submitted
///
/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.remove(user_id).await?;
    Ok(NoContent)
}
