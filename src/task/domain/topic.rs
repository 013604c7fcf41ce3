//! Subject area a task belongs to.

use super::ParseTopicError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of task topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topic {
    /// Mathematics.
    Mathematics,
    /// English.
    English,
    /// French.
    French,
    /// German.
    German,
}

impl Topic {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mathematics => "MATHEMATICS",
            Self::English => "ENGLISH",
            Self::French => "FRENCH",
            Self::German => "GERMAN",
        }
    }
}

impl TryFrom<&str> for Topic {
    type Error = ParseTopicError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "MATHEMATICS" => Ok(Self::Mathematics),
            "ENGLISH" => Ok(Self::English),
            "FRENCH" => Ok(Self::French),
            "GERMAN" => Ok(Self::German),
            _ => Err(ParseTopicError(value.to_owned())),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
