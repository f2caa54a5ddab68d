//! Error types for the Holocron server.
//!
//! Domain errors (configuration, request validation, missing resources and favorites) each
//! live in their own module and are aggregated into [`Error`]. Every error implements
//! `IntoResponse` so handlers can return them directly with `?`.

pub mod config;
pub mod favorite;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, favorite::FavoriteError, resource::ResourceError,
        validation::ValidationError,
    },
};

/// Main error type for the Holocron server.
///
/// Uses `thiserror`'s `#[from]` so domain errors and library errors convert with `?`.
/// The `IntoResponse` implementation delegates to the domain error where one exists and
/// falls back to a logged 500 response for everything else.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request body missing required fields or otherwise malformed.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Referenced user, character, planet or ship does not exist, or conflicts with an existing one.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Favorite not found or already present.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Internal error indicating a bug, such as a favorite pointing at a row that no longer exists.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures
/// - 404 Not Found - Missing users, resources or favorites
/// - 409 Conflict - Duplicate favorites or email addresses
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
