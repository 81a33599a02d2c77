use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::directory::UserDirectory;
use crate::domain::user::User;
use crate::domain::{DomainError, DomainResult, ResourceKind};

/// Read access to users held by the external directory
pub struct UsersService {
    directory: Arc<dyn UserDirectory>,
}

impl UsersService {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Fetch a user, `None` when the directory does not know it
    pub async fn find_user(&self, user_id: Uuid) -> DomainResult<Option<User>> {
        debug!(%user_id, "Looking up user");
        Ok(self.directory.get_by_id(user_id).await?)
    }

    /// Fetch a user, failing with `ResourceNotFound` when it does not exist
    pub async fn get_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.find_user(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ResourceKind::User, user_id))
    }

    /// Fetch all users
    pub async fn get_users(&self) -> DomainResult<Vec<User>> {
        Ok(self.directory.get_all().await?)
    }
}
