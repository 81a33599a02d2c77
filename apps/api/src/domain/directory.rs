// Ports for the external user and team directory
// Any transport can satisfy them; the HTTP adapter lives in infrastructure

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::team::Team;
use crate::domain::user::User;

/// Errors raised while talking to the external directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Directory request failed: {0}")]
    Request(String),

    #[error("Directory responded with HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid directory response: {0}")]
    InvalidResponse(String),
}

/// Read-only access to users owned by the external directory
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a user, `None` when the directory does not know it
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError>;

    /// Fetch every user known to the directory
    async fn get_all(&self) -> Result<Vec<User>, DirectoryError>;
}

/// Read-only access to teams owned by the external directory
#[async_trait]
pub trait TeamDirectory: Send + Sync {
    /// Fetch a team, `None` when the directory does not know it
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Team>, DirectoryError>;

    /// Fetch every team known to the directory
    async fn get_all(&self) -> Result<Vec<Team>, DirectoryError>;
}
