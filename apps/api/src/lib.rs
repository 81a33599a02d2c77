//! Ecore Roles API Library
//!
//! Manages roles and team memberships on top of an external user and team
//! directory, including domain logic, repositories, services and the HTTP
//! API.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
