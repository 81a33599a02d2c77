// Role domain module
// Roles are owned by this service and immutable once created

#![allow(clippy::module_inception)]

pub mod role;
pub mod value_objects;

pub use role::{default_roles, Role, DEVELOPER_ROLE_ID, PRODUCT_OWNER_ROLE_ID, TESTER_ROLE_ID};
pub use value_objects::RoleName;
