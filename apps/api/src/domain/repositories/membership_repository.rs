use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::membership::Membership;

/// Repository trait for Membership entities
///
/// Implementations must enforce uniqueness of `(user_id, team_id)` and
/// report a collision as `RepositoryError::UniqueViolation`.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Insert a new membership
    async fn save(&self, membership: &Membership) -> Result<(), RepositoryError>;

    /// Find the membership of a user in a team
    async fn find_by_user_id_and_team_id(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<Membership>, RepositoryError>;

    /// Find all memberships holding a role, in insertion order
    async fn find_by_role_id(&self, role_id: Uuid) -> Result<Vec<Membership>, RepositoryError>;
}
