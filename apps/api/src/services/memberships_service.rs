use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::membership::{Membership, MembershipRequest};
use crate::domain::repositories::{MembershipRepository, RepositoryError, RoleRepository};
use crate::domain::team::has_member;
use crate::domain::{DomainError, DomainResult, ResourceKind};
use crate::services::{TeamsService, UsersService};

/// Assigns roles to team members and looks memberships up
pub struct MembershipsService {
    membership_repository: Arc<dyn MembershipRepository>,
    role_repository: Arc<dyn RoleRepository>,
    users_service: Arc<UsersService>,
    teams_service: Arc<TeamsService>,
}

impl MembershipsService {
    pub fn new(
        membership_repository: Arc<dyn MembershipRepository>,
        role_repository: Arc<dyn RoleRepository>,
        users_service: Arc<UsersService>,
        teams_service: Arc<TeamsService>,
    ) -> Self {
        Self {
            membership_repository,
            role_repository,
            users_service,
            teams_service,
        }
    }

    /// Validate a membership request and persist it
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. a role id is present
    /// 2. no membership exists yet for the user and team
    /// 3. the user exists
    /// 4. the team exists
    /// 5. the team has the user as lead or member
    /// 6. the role exists
    ///
    /// Nothing is written unless every check passes.
    pub async fn assign_role_to_membership(
        &self,
        request: MembershipRequest,
    ) -> DomainResult<Membership> {
        let MembershipRequest {
            user_id,
            team_id,
            role_id,
        } = request;
        info!(%user_id, %team_id, ?role_id, "Assigning role to membership");

        let role_id = role_id.ok_or(DomainError::InvalidArgument(ResourceKind::Role))?;

        if self
            .membership_repository
            .find_by_user_id_and_team_id(user_id, team_id)
            .await?
            .is_some()
        {
            return Err(DomainError::ResourceExists(ResourceKind::Membership));
        }

        self.users_service.get_user(user_id).await?;
        let team = self.teams_service.get_team(team_id).await?;

        if !has_member(&team, user_id) {
            debug!(%user_id, %team_id, "User is neither lead nor member of the team");
            return Err(DomainError::UserIsNotAssignedToMembership);
        }

        let role = self
            .role_repository
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ResourceKind::Role, role_id))?;

        let membership = Membership::new(user_id, team_id, role);
        self.membership_repository
            .save(&membership)
            .await
            .map_err(|e| match e {
                RepositoryError::UniqueViolation(_) => {
                    DomainError::ResourceExists(ResourceKind::Membership)
                }
                other => DomainError::Repository(other),
            })?;

        info!(membership_id = %membership.id(), "Membership created");
        Ok(membership)
    }

    /// All memberships holding a role, in storage order
    pub async fn get_memberships(&self, role_id: Uuid) -> DomainResult<Vec<Membership>> {
        Ok(self.membership_repository.find_by_role_id(role_id).await?)
    }

    /// The membership of a user in a team
    ///
    /// Fails with `ResourceNotFound` when the team or the user does not exist
    /// (checked in that order) or when no membership is stored for the pair.
    pub async fn find_by_user_id_and_team_id(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> DomainResult<Membership> {
        self.teams_service.get_team(team_id).await?;
        self.users_service.get_user(user_id).await?;

        self.membership_repository
            .find_by_user_id_and_team_id(user_id, team_id)
            .await?
            .ok_or_else(|| DomainError::not_found_without_id(ResourceKind::Membership))
    }
}
