//! Tests for favorite controller endpoints.

mod add_favorite;
mod remove_favorite;

use super::*;
