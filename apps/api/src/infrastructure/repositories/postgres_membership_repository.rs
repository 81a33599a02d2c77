use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_error;
use crate::domain::membership::Membership;
use crate::domain::repositories::{MembershipRepository, RepositoryError};
use crate::domain::role::{Role, RoleName};

/// PostgreSQL implementation of MembershipRepository
///
/// Memberships are read joined with their role so callers always get the
/// resolved `Role`. The `memberships_user_id_team_id_key` constraint
/// guarantees one membership per user and team.
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    /// Creates a new PostgresMembershipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MembershipRow {
    id: Uuid,
    user_id: Uuid,
    team_id: Uuid,
    role_id: Uuid,
    role_name: String,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = RepositoryError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        let name = RoleName::new(row.role_name)
            .map_err(|e| RepositoryError::CorruptRecord(format!("role {}: {}", row.role_id, e)))?;

        Ok(Membership::from_persistence(
            row.id,
            row.user_id,
            row.team_id,
            Role::from_persistence(row.role_id, name),
        ))
    }
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn save(&self, membership: &Membership) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO memberships (id, user_id, team_id, role_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(membership.id())
        .bind(membership.user_id())
        .bind(membership.team_id())
        .bind(membership.role().id())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to save membership", e))?;

        Ok(())
    }

    async fn find_by_user_id_and_team_id(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<Membership>, RepositoryError> {
        let row = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT m.id, m.user_id, m.team_id, r.id AS role_id, r.name AS role_name
            FROM memberships m
            JOIN roles r ON r.id = m.role_id
            WHERE m.user_id = $1 AND m.team_id = $2
            "#,
        )
        .bind(user_id)
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to find membership by user and team", e))?;

        row.map(Membership::try_from).transpose()
    }

    async fn find_by_role_id(&self, role_id: Uuid) -> Result<Vec<Membership>, RepositoryError> {
        let rows = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT m.id, m.user_id, m.team_id, r.id AS role_id, r.name AS role_name
            FROM memberships m
            JOIN roles r ON r.id = m.role_id
            WHERE m.role_id = $1
            ORDER BY m.created_at, m.id
            "#,
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to find memberships by role", e))?;

        rows.into_iter().map(Membership::try_from).collect()
    }
}
