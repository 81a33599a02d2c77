// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_membership_repository;
pub mod postgres_role_repository;

pub use in_memory::{InMemoryMembershipRepository, InMemoryRoleRepository};
pub use postgres_membership_repository::PostgresMembershipRepository;
pub use postgres_role_repository::PostgresRoleRepository;

use crate::domain::repositories::RepositoryError;

/// Maps a SQLx error into a repository error, keeping unique violations apart
fn map_sqlx_error(context: &str, err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::UniqueViolation(format!("{}: {}", context, db_err.message()))
        }
        _ => RepositoryError::Database(format!("{}: {}", context, err)),
    }
}
