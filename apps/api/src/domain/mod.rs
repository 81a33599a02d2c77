// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod directory;
pub mod errors;
pub mod membership;
pub mod repositories;
pub mod role;
pub mod team;
pub mod user;

pub use errors::{DomainError, DomainResult, ResourceKind};
