//! REST API client module for the ExerciseDB service.
//!
//! This module provides the `RemoteClient` trait and its HTTP implementation,
//! `ExerciseDbClient`, for fetching exercises by id or by body part.
//!
//! Requests authenticate with a RapidAPI key plus host header, both passed
//! in per call as `Credentials`.

pub mod client;
pub mod error;

pub use client::{ClientSettings, ExerciseDbClient, RemoteClient};
pub use error::ApiError;
