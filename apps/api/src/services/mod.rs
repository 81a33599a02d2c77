// Application services
// Orchestrate repositories and the external directory for the API layer

pub mod memberships_service;
pub mod roles_service;
pub mod teams_service;
pub mod users_service;

pub use memberships_service::MembershipsService;
pub use roles_service::RolesService;
pub use teams_service::TeamsService;
pub use users_service::UsersService;
