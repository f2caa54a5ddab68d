use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Field cannot be empty: {0}")]
    EmptyField(&'static str),
    #[error("Field {field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for ValidationError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
