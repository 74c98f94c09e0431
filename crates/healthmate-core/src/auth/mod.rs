//! API credentials.
//!
//! This module provides:
//! - `Credentials`: the ExerciseDB API key and host header value
//! - `CredentialStore`: OS-level storage of the API key via keyring

pub mod credentials;

pub use credentials::{CredentialStore, Credentials};
