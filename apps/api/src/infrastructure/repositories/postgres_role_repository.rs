use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_error;
use crate::domain::repositories::{RepositoryError, RoleRepository};
use crate::domain::role::{Role, RoleName};

/// PostgreSQL implementation of RoleRepository
///
/// Relies on the `roles_name_key` unique constraint for name uniqueness.
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    /// Creates a new PostgresRoleRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RoleRow {
    id: Uuid,
    name: String,
}

impl TryFrom<RoleRow> for Role {
    type Error = RepositoryError;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        let name = RoleName::new(row.name)
            .map_err(|e| RepositoryError::CorruptRecord(format!("role {}: {}", row.id, e)))?;
        Ok(Role::from_persistence(row.id, name))
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn save(&self, role: &Role) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO roles (id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(role.id())
        .bind(role.name().as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to save role", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to find role by id", e))?;

        row.map(Role::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name
            FROM roles
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to find role by name", e))?;

        row.map(Role::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Role>, RepositoryError> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name
            FROM roles
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list roles", e))?;

        rows.into_iter().map(Role::try_from).collect()
    }
}
