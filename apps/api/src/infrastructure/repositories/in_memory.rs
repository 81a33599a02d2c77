use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::membership::Membership;
use crate::domain::repositories::{MembershipRepository, RepositoryError, RoleRepository};
use crate::domain::role::{default_roles, Role};

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, RepositoryError> {
    lock.read()
        .map_err(|_| RepositoryError::Database("in-memory store lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, RepositoryError> {
    lock.write()
        .map_err(|_| RepositoryError::Database("in-memory store lock poisoned".to_string()))
}

/// In-memory implementation of RoleRepository
///
/// Used when no database is configured and by tests.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<Vec<Role>>,
}

impl InMemoryRoleRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the default roles
    pub fn with_default_roles() -> Self {
        Self {
            roles: RwLock::new(default_roles()),
        }
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn save(&self, role: &Role) -> Result<(), RepositoryError> {
        let mut roles = write(&self.roles)?;

        if roles.iter().any(|r| r.id() == role.id()) {
            return Err(RepositoryError::UniqueViolation(format!(
                "role id {} already stored",
                role.id()
            )));
        }
        if roles.iter().any(|r| r.name() == role.name()) {
            return Err(RepositoryError::UniqueViolation(format!(
                "role name '{}' already stored",
                role.name()
            )));
        }

        roles.push(role.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, RepositoryError> {
        let roles = read(&self.roles)?;
        Ok(roles.iter().find(|r| r.id() == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RepositoryError> {
        let roles = read(&self.roles)?;
        Ok(roles.iter().find(|r| r.name().as_str() == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Role>, RepositoryError> {
        let roles = read(&self.roles)?;
        let mut result = roles.clone();
        result.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(result)
    }
}

/// In-memory implementation of MembershipRepository
///
/// Keeps memberships in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryMembershipRepository {
    memberships: RwLock<Vec<Membership>>,
}

impl InMemoryMembershipRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn save(&self, membership: &Membership) -> Result<(), RepositoryError> {
        let mut memberships = write(&self.memberships)?;

        if memberships.iter().any(|m| {
            m.user_id() == membership.user_id() && m.team_id() == membership.team_id()
        }) {
            return Err(RepositoryError::UniqueViolation(format!(
                "membership of user {} in team {} already stored",
                membership.user_id(),
                membership.team_id()
            )));
        }

        memberships.push(membership.clone());
        Ok(())
    }

    async fn find_by_user_id_and_team_id(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<Membership>, RepositoryError> {
        let memberships = read(&self.memberships)?;
        Ok(memberships
            .iter()
            .find(|m| m.user_id() == user_id && m.team_id() == team_id)
            .cloned())
    }

    async fn find_by_role_id(&self, role_id: Uuid) -> Result<Vec<Membership>, RepositoryError> {
        let memberships = read(&self.memberships)?;
        Ok(memberships
            .iter()
            .filter(|m| m.role().id() == role_id)
            .cloned()
            .collect())
    }
}
