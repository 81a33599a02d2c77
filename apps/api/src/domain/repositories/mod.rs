// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod membership_repository;
pub mod role_repository;

use thiserror::Error;

pub use membership_repository::MembershipRepository;
pub use role_repository::RoleRepository;

/// Errors reported by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Stored data could not be mapped back into the domain
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    #[error("Database error: {0}")]
    Database(String),
}
