use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::error_response, model::favorite::FavoriteKind};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FavoriteError {
    #[error("User ID {user_id} already has {kind} ID {target_id} as a favorite")]
    AlreadyExists {
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    },
    #[error("Favorite {kind} ID {id} not found")]
    NotFound { kind: FavoriteKind, id: i32 },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AlreadyExists { .. } => {
                error_response(StatusCode::CONFLICT, "Favorite already exists")
            }
            Self::NotFound { .. } => error_response(StatusCode::NOT_FOUND, "Favorite not found"),
        }
    }
}
