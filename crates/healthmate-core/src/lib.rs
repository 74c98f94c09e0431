//! Core library for healthmate.
//!
//! Exercise suggestions come from the ExerciseDB API when it is reachable
//! and from a local SQLite cache when it is not:
//!
//! - `api`: the `RemoteClient` boundary and its HTTP implementation
//! - `store`: the local `ExerciseStore`, its seed data and schema migrations
//! - `resolver`: `FallbackResolver`, which picks between the two per request
//! - `config` / `auth`: configuration file, environment and API key handling

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod resolver;
pub mod store;
pub mod utils;

pub use api::{ApiError, ClientSettings, ExerciseDbClient, RemoteClient};
pub use auth::{CredentialStore, Credentials};
pub use config::Config;
pub use models::{Category, Difficulty, ExerciseRecord, ExerciseView, RemoteExerciseRecord};
pub use resolver::{FallbackResolver, Lookup, ResolveError, Resolved, Source};
pub use store::{ExerciseStore, MigrationPolicy, StoreError};
