use serde::{Deserialize, Serialize};

/// An exercise as returned by the ExerciseDB API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteExerciseRecord {
    pub id: String,
    pub name: String,
    /// Body part in the remote vocabulary. Not restricted to the local
    /// categories; the API also knows e.g. "waist" or "cardio".
    #[serde(rename = "bodyPart")]
    pub body_part: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(rename = "secondaryMuscles", default)]
    pub secondary_muscles: Vec<String>,
    #[serde(rename = "gifUrl", default, skip_serializing_if = "Option::is_none")]
    pub gif_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exercise_response() {
        let json = r#"{"bodyPart":"back","equipment":"cable","gifUrl":"https://v2.exercisedb.io/image/abc","id":"0007","name":"alternate lateral pulldown","target":"lats","secondaryMuscles":["biceps","rhomboids"],"instructions":["Sit on the cable machine with your back straight.","Pull the handle down."]}"#;

        let record: RemoteExerciseRecord =
            serde_json::from_str(json).expect("Failed to parse exercise test JSON");
        assert_eq!(record.id, "0007");
        assert_eq!(record.body_part, "back");
        assert_eq!(record.target, "lats");
        assert_eq!(record.secondary_muscles, vec!["biceps", "rhomboids"]);
        assert_eq!(record.instructions.len(), 2);
        assert_eq!(record.gif_url.as_deref(), Some("https://v2.exercisedb.io/image/abc"));
    }

    #[test]
    fn test_parse_exercise_missing_optional_fields() {
        let json = r#"{"id":"0001","name":"3/4 sit-up","bodyPart":"waist"}"#;
        let record: RemoteExerciseRecord =
            serde_json::from_str(json).expect("Failed to parse minimal exercise JSON");
        assert!(record.instructions.is_empty());
        assert!(record.secondary_muscles.is_empty());
        assert_eq!(record.gif_url, None);
    }
}
