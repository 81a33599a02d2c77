// HTTP handlers, one module per resource

pub mod health;
pub mod memberships;
pub mod roles;
pub mod teams;
pub mod users;

use std::fmt::Display;

use crate::api::errors::{ApiError, BAD_REQUEST};

/// Turns an extractor rejection into a plain 400 response
pub(crate) fn bad_request(rejection: impl Display) -> ApiError {
    tracing::debug!(%rejection, "Rejected request");
    ApiError::bad_request(BAD_REQUEST)
}
