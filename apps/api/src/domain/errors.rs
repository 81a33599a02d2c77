use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::directory::DirectoryError;
use crate::domain::repositories::RepositoryError;

/// Kind of resource an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Role,
    Membership,
    Team,
    User,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Role => write!(f, "Role"),
            ResourceKind::Membership => write!(f, "Membership"),
            ResourceKind::Team => write!(f, "Team"),
            ResourceKind::User => write!(f, "User"),
        }
    }
}

/// Errors raised by the service layer
///
/// The message of each variant is what callers see in the HTTP error body.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid '{0}' object")]
    InvalidArgument(ResourceKind),

    #[error("{0} already exists")]
    ResourceExists(ResourceKind),

    #[error("{kind}{} not found", id_suffix(.id))]
    ResourceNotFound { kind: ResourceKind, id: Option<Uuid> },

    #[error("Invalid 'Membership' object. The provided user doesn't belong to the provided team.")]
    UserIsNotAssignedToMembership,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl DomainError {
    /// Not found error for a specific resource id
    pub fn not_found(kind: ResourceKind, id: Uuid) -> Self {
        Self::ResourceNotFound { kind, id: Some(id) }
    }

    /// Not found error without an id, e.g. for lookups by composite key
    pub fn not_found_without_id(kind: ResourceKind) -> Self {
        Self::ResourceNotFound { kind, id: None }
    }
}

fn id_suffix(id: &Option<Uuid>) -> String {
    id.map(|id| format!(" {}", id)).unwrap_or_default()
}

pub type DomainResult<T> = Result<T, DomainError>;
