use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bad_request;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team::Team;

/// Team representation returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub team_lead_id: Option<Uuid>,
    pub team_member_ids: Vec<Uuid>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            team_lead_id: team.team_lead_id,
            team_member_ids: team.team_member_ids,
        }
    }
}

/// List all teams from the directory
///
/// GET /v1/teams
pub async fn get_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams_service.get_teams().await?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /v1/teams/:team_id
pub async fn get_team(
    State(state): State<AppState>,
    team_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TeamResponse>, ApiError> {
    let Path(team_id) = team_id.map_err(bad_request)?;
    let team = state.teams_service.get_team(team_id).await?;
    Ok(Json(TeamResponse::from(team)))
}
