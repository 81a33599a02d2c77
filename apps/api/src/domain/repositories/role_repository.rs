use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::role::Role;

/// Repository trait for Role entities
///
/// Implementations must enforce name uniqueness and report a collision as
/// `RepositoryError::UniqueViolation`.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Insert a new role
    async fn save(&self, role: &Role) -> Result<(), RepositoryError>;

    /// Find a role by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError>;

    /// Find a role by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError>;

    /// List all roles ordered by name
    async fn find_all(&self) -> Result<Vec<Role>, RepositoryError>;
}
