//! Local exercise cache for offline access.
//!
//! This module provides the `ExerciseStore`, a single SQLite table of
//! exercises that answers whenever the remote API cannot. A new database is
//! seeded with two default exercises per body part.
//!
//! Schema changes go through the versioned steps in `migrations`. The
//! `Recreate` policy keeps the older drop-and-rebuild behavior available;
//! it throws away any exercises added through `upsert`.

pub mod error;
pub mod manager;
pub mod migrations;
pub mod seed;

pub use error::StoreError;
pub use manager::ExerciseStore;
pub use migrations::{MigrationPolicy, LATEST_VERSION};
pub use seed::default_exercises;
