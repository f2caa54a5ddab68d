//! Repositories for the favorite join tables.
//!
//! The three tables share a shape: a row links one user to one character, planet or ship,
//! and the pair is unique.

pub mod character;
pub mod planet;
pub mod ship;
