use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::DomainError;

/// Message used for every request rejected before reaching a service
pub const BAD_REQUEST: &str = "Bad Request";

/// Message returned when a store or the directory fails; details are logged
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidArgument(_)
            | DomainError::ResourceExists(_)
            | DomainError::UserIsNotAssignedToMembership => Self::bad_request(err.to_string()),
            DomainError::ResourceNotFound { .. } => Self::not_found(err.to_string()),
            DomainError::Repository(_) | DomainError::Directory(_) => {
                tracing::error!(error = %err, "Request failed");
                Self::internal_server_error(INTERNAL_SERVER_ERROR)
            }
        }
    }
}
