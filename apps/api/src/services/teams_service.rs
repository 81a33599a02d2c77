use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::directory::TeamDirectory;
use crate::domain::team::Team;
use crate::domain::{DomainError, DomainResult, ResourceKind};

/// Read access to teams held by the external directory
pub struct TeamsService {
    directory: Arc<dyn TeamDirectory>,
}

impl TeamsService {
    pub fn new(directory: Arc<dyn TeamDirectory>) -> Self {
        Self { directory }
    }

    /// Fetch a team, `None` when the directory does not know it
    pub async fn find_team(&self, team_id: Uuid) -> DomainResult<Option<Team>> {
        debug!(%team_id, "Looking up team");
        Ok(self.directory.get_by_id(team_id).await?)
    }

    /// Fetch a team, failing with `ResourceNotFound` when it does not exist
    pub async fn get_team(&self, team_id: Uuid) -> DomainResult<Team> {
        self.find_team(team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ResourceKind::Team, team_id))
    }

    /// Fetch all teams
    pub async fn get_teams(&self) -> DomainResult<Vec<Team>> {
        Ok(self.directory.get_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{team, StaticDirectory};

    #[tokio::test]
    async fn get_existing_team() {
        let team_id = Uuid::new_v4();
        let service = TeamsService::new(Arc::new(StaticDirectory::new(
            vec![],
            vec![team(team_id, Uuid::new_v4(), vec![])],
        )));

        let found = service.get_team(team_id).await.unwrap();

        assert_eq!(found.id, team_id);
    }

    #[tokio::test]
    async fn get_missing_team_fails_with_not_found() {
        let service = TeamsService::new(Arc::new(StaticDirectory::default()));
        let team_id = Uuid::new_v4();

        let err = service.get_team(team_id).await.unwrap_err();

        assert_eq!(err.to_string(), format!("Team {} not found", team_id));
    }

    #[tokio::test]
    async fn get_teams_may_be_empty() {
        let service = TeamsService::new(Arc::new(StaticDirectory::default()));
        assert!(service.get_teams().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn directory_failure_propagates() {
        let service = TeamsService::new(Arc::new(StaticDirectory::failing()));

        let err = service.get_teams().await.unwrap_err();

        assert!(matches!(err, DomainError::Directory(_)));
    }
}
