//! Display model shared by remote and locally cached exercises.
//!
//! Whichever source answered, the front end renders an `ExerciseView`.
//! Remote records convert without loss; local records fill the fields the
//! cache does not track (target muscle, equipment) with defaults.

use serde::{Deserialize, Serialize};

use super::{Difficulty, ExerciseRecord, RemoteExerciseRecord};

/// Equipment shown for locally cached exercises, which carry none.
pub const LOCAL_DEFAULT_EQUIPMENT: &str = "body weight";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseView {
    pub id: String,
    pub name: String,
    pub body_part: String,
    pub target: String,
    pub equipment: String,
    pub instructions: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub media_url: Option<String>,

    // Only known for locally cached exercises
    pub description: Option<String>,
    pub duration_minutes: Option<u32>,
    pub calories_burned: Option<u32>,
    pub difficulty: Option<Difficulty>,
}

impl From<RemoteExerciseRecord> for ExerciseView {
    fn from(record: RemoteExerciseRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            body_part: record.body_part,
            target: record.target,
            equipment: record.equipment,
            instructions: record.instructions,
            secondary_muscles: record.secondary_muscles,
            media_url: record.gif_url,
            description: None,
            duration_minutes: None,
            calories_burned: None,
            difficulty: None,
        }
    }
}

impl From<ExerciseRecord> for ExerciseView {
    fn from(record: ExerciseRecord) -> Self {
        let instructions = record.instruction_steps();
        let body_part = record.category.remote_name().to_string();
        Self {
            id: record.id,
            name: record.name,
            target: body_part.clone(),
            body_part,
            equipment: LOCAL_DEFAULT_EQUIPMENT.to_string(),
            instructions,
            secondary_muscles: Vec::new(),
            media_url: None,
            description: Some(record.description),
            duration_minutes: Some(record.duration_minutes),
            calories_burned: Some(record.calories_burned),
            difficulty: Some(record.difficulty),
        }
    }
}
