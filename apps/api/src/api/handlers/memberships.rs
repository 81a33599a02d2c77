use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bad_request;
use super::roles::RoleResponse;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::membership::{Membership, MembershipRequest};

/// Role reference inside a membership request
#[derive(Debug, Deserialize)]
pub struct RoleReference {
    pub id: Option<Uuid>,
}

/// Request body for assigning a role to a team member
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipRequest {
    pub user_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub role: Option<RoleReference>,
}

impl CreateMembershipRequest {
    /// Checks the fields every membership request must carry, including the
    /// role id
    fn into_domain(self) -> Result<MembershipRequest, ApiError> {
        match (self.user_id, self.team_id, self.role) {
            (Some(user_id), Some(team_id), Some(RoleReference { id: Some(role_id) })) => {
                Ok(MembershipRequest {
                    user_id,
                    team_id,
                    role_id: Some(role_id),
                })
            }
            _ => Err(bad_request("userId, teamId and role.id are required")),
        }
    }
}

/// Membership representation returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub role: RoleResponse,
}

impl From<&Membership> for MembershipResponse {
    fn from(membership: &Membership) -> Self {
        Self {
            id: membership.id(),
            user_id: membership.user_id(),
            team_id: membership.team_id(),
            role: RoleResponse::from(membership.role()),
        }
    }
}

/// Query parameters for listing memberships
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipSearchParams {
    pub role_id: Option<Uuid>,
}

/// Assign a role to a team member
///
/// POST /v1/roles/memberships
pub async fn assign_role_to_membership(
    State(state): State<AppState>,
    body: Result<Json<CreateMembershipRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MembershipResponse>), ApiError> {
    let Json(req) = body.map_err(bad_request)?;
    let request = req.into_domain()?;

    let membership = state
        .memberships_service
        .assign_role_to_membership(request)
        .await?;

    Ok((StatusCode::CREATED, Json(MembershipResponse::from(&membership))))
}

/// List the memberships holding a role
///
/// GET /v1/roles/memberships/search?roleId=..
pub async fn get_memberships(
    State(state): State<AppState>,
    params: Result<Query<MembershipSearchParams>, QueryRejection>,
) -> Result<Json<Vec<MembershipResponse>>, ApiError> {
    let Query(params) = params.map_err(bad_request)?;
    let role_id = params
        .role_id
        .ok_or_else(|| bad_request("roleId is required"))?;

    let memberships = state.memberships_service.get_memberships(role_id).await?;

    Ok(Json(
        memberships.iter().map(MembershipResponse::from).collect(),
    ))
}
