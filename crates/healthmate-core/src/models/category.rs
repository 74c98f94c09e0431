//! Body-part categories and the remote/local vocabulary mapping.
//!
//! The ExerciseDB API and the local cache name body parts differently
//! ("full body" remotely, "full_body" locally). Both directions are total
//! over `Category`; parsing an unknown name is an error so that vocabulary
//! drift shows up instead of silently landing in some default bucket.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Abs,
    Arms,
    Back,
    Chest,
    Legs,
    FullBody,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Unknown remote body part: {0:?}")]
    UnknownRemote(String),

    #[error("Unknown local body part: {0:?}")]
    UnknownLocal(String),
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Abs,
        Category::Arms,
        Category::Back,
        Category::Chest,
        Category::Legs,
        Category::FullBody,
    ];

    /// Name used by the remote API in `/exercises/bodyPart/{name}`.
    pub const fn remote_name(&self) -> &'static str {
        match self {
            Category::Abs => "abs",
            Category::Arms => "arms",
            Category::Back => "back",
            Category::Chest => "chest",
            Category::Legs => "legs",
            Category::FullBody => "full body",
        }
    }

    /// Value stored in the `body_part` column of the local cache.
    pub const fn local_name(&self) -> &'static str {
        match self {
            Category::Abs => "abs",
            Category::Arms => "arms",
            Category::Back => "back",
            Category::Chest => "chest",
            Category::Legs => "legs",
            Category::FullBody => "full_body",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Category::Abs => "Abs",
            Category::Arms => "Arms",
            Category::Back => "Back",
            Category::Chest => "Chest",
            Category::Legs => "Legs",
            Category::FullBody => "Full Body",
        }
    }

    /// Parse a remote body-part name. Case and surrounding whitespace are ignored.
    pub fn from_remote(name: &str) -> Result<Self, CategoryError> {
        let normalized = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.remote_name() == normalized)
            .ok_or_else(|| CategoryError::UnknownRemote(name.to_string()))
    }

    /// Parse a value read back from the local cache. Exact match only.
    pub fn from_local(name: &str) -> Result<Self, CategoryError> {
        Self::ALL
            .into_iter()
            .find(|c| c.local_name() == name)
            .ok_or_else(|| CategoryError::UnknownLocal(name.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Accepts either vocabulary, e.g. "full body" or "full_body".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_remote(s).or_else(|_| Self::from_local(s.trim()))
    }
}
