//! Positional identifier for stored tasks.

use std::fmt;

/// Identifier of a task, equal to its current index in the store.
///
/// This is not a stable identity. Deleting a task shifts every later task
/// down by one position, so an id held by a client before a deletion may
/// afterwards name a different task.
///
/// The wrapped value is signed so that requests for negative positions can
/// be represented and rejected as out of range by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates an identifier from a raw requested value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Creates the identifier for the given store index.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(i64::try_from(index).unwrap_or(i64::MAX))
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the store index named by this identifier.
    ///
    /// Returns `None` for negative identifiers.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
