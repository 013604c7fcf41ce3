//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be blank")]
    BlankTitle,
}

/// Error returned while parsing a topic from its wire name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown topic: {0}")]
pub struct ParseTopicError(pub String);

/// Error returned while parsing a priority from its wire name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
