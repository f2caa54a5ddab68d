//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an `AppState` built over an in-memory database,
//! verifying status codes and response bodies for success and error paths.

mod character;
mod favorite;
mod ship;
mod user;

use holocron_test_utils::prelude::*;

use crate::util::body_json;
