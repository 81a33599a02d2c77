use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::repositories::{RepositoryError, RoleRepository};
use crate::domain::role::{Role, RoleName};
use crate::domain::{DomainError, DomainResult, ResourceKind};
use crate::services::MembershipsService;

/// Creates and looks up roles
pub struct RolesService {
    role_repository: Arc<dyn RoleRepository>,
    memberships_service: Arc<MembershipsService>,
}

impl RolesService {
    pub fn new(
        role_repository: Arc<dyn RoleRepository>,
        memberships_service: Arc<MembershipsService>,
    ) -> Self {
        Self {
            role_repository,
            memberships_service,
        }
    }

    /// Create a role, failing with `ResourceExists` when the name is taken
    pub async fn create_role(&self, name: RoleName) -> DomainResult<Role> {
        info!(name = %name, "Creating role");

        if self
            .role_repository
            .find_by_name(name.as_str())
            .await?
            .is_some()
        {
            return Err(DomainError::ResourceExists(ResourceKind::Role));
        }

        let role = Role::new(name);
        self.role_repository.save(&role).await.map_err(|e| match e {
            RepositoryError::UniqueViolation(_) => DomainError::ResourceExists(ResourceKind::Role),
            other => DomainError::Repository(other),
        })?;

        Ok(role)
    }

    /// Fetch a role by id
    pub async fn get_role(&self, role_id: Uuid) -> DomainResult<Role> {
        self.role_repository
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ResourceKind::Role, role_id))
    }

    /// All roles, ordered by name
    pub async fn get_roles(&self) -> DomainResult<Vec<Role>> {
        Ok(self.role_repository.find_all().await?)
    }

    /// The role a user holds in a team
    ///
    /// Every failure of the membership lookup propagates, including a missing
    /// membership.
    pub async fn get_role_for_member(&self, user_id: Uuid, team_id: Uuid) -> DomainResult<Role> {
        let membership = self
            .memberships_service
            .find_by_user_id_and_team_id(user_id, team_id)
            .await?;
        Ok(membership.into_role())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::MembershipRequest;
    use crate::domain::role::{DEVELOPER_ROLE_ID, TESTER_ROLE_ID};
    use crate::infrastructure::repositories::{
        InMemoryMembershipRepository, InMemoryRoleRepository,
    };
    use crate::services::test_support::{team, user, StaticDirectory};
    use crate::services::{TeamsService, UsersService};

    struct Fixture {
        roles: RolesService,
        memberships: Arc<MembershipsService>,
        team_id: Uuid,
        member_id: Uuid,
    }

    fn fixture() -> Fixture {
        let team_id = Uuid::new_v4();
        let member_id = Uuid::new_v4();
        let directory = Arc::new(StaticDirectory::new(
            vec![user(member_id)],
            vec![team(team_id, Uuid::new_v4(), vec![member_id])],
        ));
        let role_repository = Arc::new(InMemoryRoleRepository::with_default_roles());

        let memberships = Arc::new(MembershipsService::new(
            Arc::new(InMemoryMembershipRepository::new()),
            role_repository.clone(),
            Arc::new(UsersService::new(directory.clone())),
            Arc::new(TeamsService::new(directory)),
        ));

        Fixture {
            roles: RolesService::new(role_repository, memberships.clone()),
            memberships,
            team_id,
            member_id,
        }
    }

    #[tokio::test]
    async fn create_role_assigns_id() {
        let f = fixture();

        let role = f
            .roles
            .create_role(RoleName::new("DevOps").unwrap())
            .await
            .unwrap();

        assert_eq!(role.name().as_str(), "DevOps");
        assert_eq!(f.roles.get_role(role.id()).await.unwrap(), role);
    }

    #[tokio::test]
    async fn create_role_with_existing_name_fails() {
        let f = fixture();
        f.roles
            .create_role(RoleName::new("DevOps").unwrap())
            .await
            .unwrap();

        let err = f
            .roles
            .create_role(RoleName::new("DevOps").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::ResourceExists(ResourceKind::Role)));
        assert_eq!(err.to_string(), "Role already exists");
    }

    #[tokio::test]
    async fn create_role_colliding_with_seeded_role_fails() {
        let f = fixture();

        let err = f
            .roles
            .create_role(RoleName::new("Developer").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Role already exists");
    }

    #[tokio::test]
    async fn get_missing_role_fails_with_not_found() {
        let f = fixture();
        let role_id = Uuid::new_v4();

        let err = f.roles.get_role(role_id).await.unwrap_err();

        assert_eq!(err.to_string(), format!("Role {} not found", role_id));
    }

    #[tokio::test]
    async fn get_roles_lists_seeded_roles() {
        let f = fixture();

        let roles = f.roles.get_roles().await.unwrap();

        assert_eq!(roles.len(), 3);
        assert!(roles.iter().any(|r| r.id() == TESTER_ROLE_ID));
    }

    #[tokio::test]
    async fn get_role_for_member_returns_assigned_role() {
        let f = fixture();
        f.memberships
            .assign_role_to_membership(MembershipRequest {
                user_id: f.member_id,
                team_id: f.team_id,
                role_id: Some(DEVELOPER_ROLE_ID),
            })
            .await
            .unwrap();

        let role = f
            .roles
            .get_role_for_member(f.member_id, f.team_id)
            .await
            .unwrap();

        assert_eq!(role.id(), DEVELOPER_ROLE_ID);
    }

    #[tokio::test]
    async fn get_role_for_member_without_membership_fails() {
        let f = fixture();

        let err = f
            .roles
            .get_role_for_member(f.member_id, f.team_id)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Membership not found");
    }
}
