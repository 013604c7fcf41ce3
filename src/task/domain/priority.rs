//! Task priority levels.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of task priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Must be handled first.
    Critical,
    /// Important but not blocking.
    Major,
    /// Can wait.
    Minor,
}

impl Priority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "CRITICAL" => Ok(Self::Critical),
            "MAJOR" => Ok(Self::Major),
            "MINOR" => Ok(Self::Minor),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
