use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of a team fetched from the external directory
///
/// Never persisted by this service. A fresh snapshot is fetched for every
/// request that needs one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub team_lead_id: Option<Uuid>,
    #[serde(default)]
    pub team_member_ids: Vec<Uuid>,
}

/// Returns true when the user leads the team or is one of its members
///
/// # Example
/// ```
/// use ecore_roles_api::domain::team::{has_member, Team};
/// use uuid::Uuid;
///
/// let lead = Uuid::new_v4();
/// let team = Team {
///     id: Uuid::new_v4(),
///     name: Some("Ordinary Coral Lynx".to_string()),
///     team_lead_id: Some(lead),
///     team_member_ids: vec![],
/// };
///
/// assert!(has_member(&team, lead));
/// assert!(!has_member(&team, Uuid::new_v4()));
/// ```
pub fn has_member(team: &Team, user_id: Uuid) -> bool {
    team.team_lead_id == Some(user_id) || team.team_member_ids.contains(&user_id)
}
