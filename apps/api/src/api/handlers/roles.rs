use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bad_request;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::role::{Role, RoleName};

/// Request body for creating a role
///
/// Any client supplied `id` is ignored; the service assigns one.
#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    pub name: Option<String>,
}

/// Role representation returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&Role> for RoleResponse {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id(),
            name: role.name().to_string(),
        }
    }
}

/// Query parameters for looking up the role of a team member
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSearchParams {
    pub team_member_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

/// Create a new role
///
/// POST /v1/roles
pub async fn create_role(
    State(state): State<AppState>,
    body: Result<Json<CreateRoleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RoleResponse>), ApiError> {
    let Json(req) = body.map_err(bad_request)?;
    let name = req
        .name
        .ok_or_else(|| bad_request("missing role name"))
        .and_then(|name| RoleName::new(name).map_err(bad_request))?;

    let role = state.roles_service.create_role(name).await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(&role))))
}

/// List all roles
///
/// GET /v1/roles
pub async fn get_roles(State(state): State<AppState>) -> Result<Json<Vec<RoleResponse>>, ApiError> {
    let roles = state.roles_service.get_roles().await?;
    Ok(Json(roles.iter().map(RoleResponse::from).collect()))
}

/// Get a role by ID
///
/// GET /v1/roles/:role_id
pub async fn get_role(
    State(state): State<AppState>,
    role_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<RoleResponse>, ApiError> {
    let Path(role_id) = role_id.map_err(bad_request)?;
    let role = state.roles_service.get_role(role_id).await?;
    Ok(Json(RoleResponse::from(&role)))
}

/// Get the role a user holds in a team
///
/// GET /v1/roles/search?teamMemberId=..&teamId=..
pub async fn search_role(
    State(state): State<AppState>,
    params: Result<Query<RoleSearchParams>, QueryRejection>,
) -> Result<Json<RoleResponse>, ApiError> {
    let Query(params) = params.map_err(bad_request)?;
    let (Some(user_id), Some(team_id)) = (params.team_member_id, params.team_id) else {
        return Err(bad_request("teamMemberId and teamId are required"));
    };

    let role = state
        .roles_service
        .get_role_for_member(user_id, team_id)
        .await?;

    Ok(Json(RoleResponse::from(&role)))
}
