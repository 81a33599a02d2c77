// User domain module
// Users are owned by the external directory; only existence matters here

#![allow(clippy::module_inception)]

pub mod user;

pub use user::User;
