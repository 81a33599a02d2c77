use super::value_objects::RoleName;
use uuid::Uuid;

/// Id of the seeded "Developer" role
pub const DEVELOPER_ROLE_ID: Uuid = Uuid::from_u128(0x1b3c333b_36e7_4b64_aa15_c22ed5908ce4);
/// Id of the seeded "Product Owner" role
pub const PRODUCT_OWNER_ROLE_ID: Uuid = Uuid::from_u128(0x25bbb7d2_26f3_11ec_9621_0242ac130002);
/// Id of the seeded "Tester" role
pub const TESTER_ROLE_ID: Uuid = Uuid::from_u128(0x37778d1c_26f3_11ec_9621_0242ac130002);

/// Role that can be assigned to a team member
///
/// Roles have a unique, non-blank name and never change after creation.
///
/// # Example
/// ```
/// use ecore_roles_api::domain::role::{Role, RoleName};
///
/// let role = Role::new(RoleName::new("Architect").unwrap());
/// assert_eq!(role.name().as_str(), "Architect");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: Uuid,
    name: RoleName,
}

impl Role {
    /// Creates a new Role with a freshly assigned id
    pub fn new(name: RoleName) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }

    /// Returns the role's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the role's name
    pub fn name(&self) -> &RoleName {
        &self.name
    }

    /// Reconstructs a Role from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(id: Uuid, name: RoleName) -> Self {
        Self { id, name }
    }
}

/// Roles that exist in every fresh store
pub fn default_roles() -> Vec<Role> {
    [
        (DEVELOPER_ROLE_ID, "Developer"),
        (PRODUCT_OWNER_ROLE_ID, "Product Owner"),
        (TESTER_ROLE_ID, "Tester"),
    ]
    .into_iter()
    .filter_map(|(id, name)| RoleName::new(name).ok().map(|name| Role::from_persistence(id, name)))
    .collect()
}
