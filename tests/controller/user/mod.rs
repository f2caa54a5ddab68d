//! Tests for user controller endpoints.

mod create_user;
mod get_user;
mod get_user_favorites;

use super::*;
