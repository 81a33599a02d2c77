use crate::domain::role::Role;
use uuid::Uuid;

/// Request to assign a role to a user within a team
///
/// `role_id` stays optional so the service can reject a missing role as an
/// invalid argument instead of failing at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipRequest {
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub role_id: Option<Uuid>,
}

/// Role assignment of a user in a team
///
/// # Invariants
/// - At most one membership exists per `(user_id, team_id)` pair
/// - The team contained the user (as member or lead) when it was created
/// - Never updated after creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    id: Uuid,
    user_id: Uuid,
    team_id: Uuid,
    role: Role,
}

impl Membership {
    /// Creates a new membership with a freshly assigned id
    ///
    /// Callers are expected to have validated the request beforehand.
    pub fn new(user_id: Uuid, team_id: Uuid, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            team_id,
            role,
        }
    }

    // ===== Getters =====

    /// Returns the membership's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the ID of the user holding the role
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Returns the ID of the team the membership belongs to
    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    /// Returns the assigned role
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Consumes the membership and returns its role
    pub fn into_role(self) -> Role {
        self.role
    }

    /// Reconstructs a Membership from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(id: Uuid, user_id: Uuid, team_id: Uuid, role: Role) -> Self {
        Self {
            id,
            user_id,
            team_id,
            role,
        }
    }
}
