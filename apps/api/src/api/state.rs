use std::sync::Arc;

use crate::domain::directory::{TeamDirectory, UserDirectory};
use crate::domain::repositories::{MembershipRepository, RoleRepository};
use crate::services::{MembershipsService, RolesService, TeamsService, UsersService};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub roles_service: Arc<RolesService>,
    pub memberships_service: Arc<MembershipsService>,
    pub teams_service: Arc<TeamsService>,
    pub users_service: Arc<UsersService>,
}

impl AppState {
    /// Wires the services on top of the given stores and directories
    pub fn new(
        role_repository: Arc<dyn RoleRepository>,
        membership_repository: Arc<dyn MembershipRepository>,
        user_directory: Arc<dyn UserDirectory>,
        team_directory: Arc<dyn TeamDirectory>,
    ) -> Self {
        let users_service = Arc::new(UsersService::new(user_directory));
        let teams_service = Arc::new(TeamsService::new(team_directory));
        let memberships_service = Arc::new(MembershipsService::new(
            membership_repository,
            role_repository.clone(),
            users_service.clone(),
            teams_service.clone(),
        ));
        let roles_service = Arc::new(RolesService::new(
            role_repository,
            memberships_service.clone(),
        ));

        Self {
            roles_service,
            memberships_service,
            teams_service,
            users_service,
        }
    }
}
