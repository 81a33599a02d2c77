// Team domain module
// Teams are owned by the external directory; only read-only snapshots live here

#![allow(clippy::module_inception)]

pub mod team;

// Re-export main types for convenience
pub use team::{has_member, Team};
