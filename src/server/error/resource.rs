use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResourceError {
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("Character ID {0} not found")]
    CharacterNotFound(i32),
    #[error("Planet ID {0} not found")]
    PlanetNotFound(i32),
    #[error("Ship ID {0} not found")]
    ShipNotFound(i32),
    #[error("Email {0} is already registered")]
    EmailAlreadyRegistered(String),
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::CharacterNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Character not found")
            }
            Self::PlanetNotFound(_) => error_response(StatusCode::NOT_FOUND, "Planet not found"),
            Self::ShipNotFound(_) => error_response(StatusCode::NOT_FOUND, "Ship not found"),
            Self::EmailAlreadyRegistered(_) => {
                error_response(StatusCode::CONFLICT, "Email already registered")
            }
        }
    }
}
