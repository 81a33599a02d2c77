use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use uuid::Uuid;

use super::bad_request;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::user::User;

/// List all users from the directory
///
/// GET /v1/users
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users_service.get_users().await?))
}

/// Get a user by ID
///
/// GET /v1/users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    user_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(user_id) = user_id.map_err(bad_request)?;
    Ok(Json(state.users_service.get_user(user_id).await?))
}
