// Membership domain module
// A membership binds a role to a user within a team

#![allow(clippy::module_inception)]

pub mod membership;

pub use membership::{Membership, MembershipRequest};
