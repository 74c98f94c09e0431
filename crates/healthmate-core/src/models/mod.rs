//! Data models for exercise data.
//!
//! - `Category`: body-part classification with the remote/local name mapping
//! - `ExerciseRecord`, `Difficulty`: rows of the local cache
//! - `RemoteExerciseRecord`: ExerciseDB API responses
//! - `ExerciseView`: the display model both sources are normalized to

pub mod category;
pub mod exercise;
pub mod remote;
pub mod view;

pub use category::{Category, CategoryError};
pub use exercise::{Difficulty, ExerciseRecord};
pub use remote::RemoteExerciseRecord;
pub use view::ExerciseView;
