//! Repository port for the ordered task store.
//!
//! Implementations keep tasks in a dense sequence where every task's id is
//! its index. Appending assigns the next index, replacing keeps the index, and
//! deleting renumbers every later task.

use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Ordered task store contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task in position order.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the task stored at position `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::OutOfRange`] when `id` is negative or
    /// not below the number of stored tasks.
    async fn get_by_position(&self, id: TaskId) -> TaskRepositoryResult<Task>;

    /// Appends the task, or overwrites the task at its requested id.
    ///
    /// A task without a requested id, or whose requested id names no stored
    /// task, is appended and receives the next free position. Otherwise the
    /// task currently at that position is replaced and the position is kept.
    async fn create(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Returns, in position order, every task whose title contains `title`.
    ///
    /// Matching is case-sensitive substring containment.
    async fn find_by_title(&self, title: &str) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes the task at position `id` and renumbers every later task.
    ///
    /// Returns the removed task, still carrying its former id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::OutOfRange`] when `id` is negative or
    /// not below the number of stored tasks.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No task occupies the requested position.
    #[error("task id {id} is out of range for {len} stored tasks")]
    OutOfRange {
        /// Requested position.
        id: TaskId,
        /// Number of tasks stored when the request was made.
        len: usize,
    },

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
