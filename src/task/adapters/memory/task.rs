//! Vector-backed task store.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks live in a single vector and every task's id equals its index. One
/// lock guards the vector, so appends, overwrites, and the renumbering pass
/// after a deletion are never interleaved. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(err: PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Resolves `id` to an occupied index.
fn position_of(tasks: &[Task], id: TaskId) -> TaskRepositoryResult<usize> {
    id.index()
        .filter(|index| *index < tasks.len())
        .ok_or(TaskRepositoryError::OutOfRange {
            id,
            len: tasks.len(),
        })
}

/// Rewrites every id from `start` onwards to match its index.
fn renumber_from(tasks: &mut [Task], start: usize) {
    for (index, task) in tasks.iter_mut().enumerate().skip(start) {
        task.renumber(TaskId::from_index(index));
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.clone())
    }

    async fn get_by_position(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        id.index()
            .and_then(|index| tasks.get(index))
            .cloned()
            .ok_or(TaskRepositoryError::OutOfRange {
                id,
                len: tasks.len(),
            })
    }

    async fn create(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;

        let occupied = task
            .requested_id()
            .and_then(TaskId::index)
            .and_then(|index| tasks.get_mut(index));
        if let Some(slot) = occupied {
            let stored = task.into_replacement(slot);
            *slot = stored.clone();
            tracing::debug!(id = %stored.id(), "task replaced in place");
            return Ok(stored);
        }

        let stored = task.into_task(TaskId::from_index(tasks.len()));
        tasks.push(stored.clone());
        tracing::debug!(id = %stored.id(), "task appended");
        Ok(stored)
    }

    async fn find_by_title(&self, title: &str) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks
            .iter()
            .filter(|task| task.title().contains(title))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let index = position_of(&tasks, id)?;
        let removed = tasks.remove(index);
        renumber_from(&mut tasks, index);
        tracing::debug!(
            %id,
            renumbered = tasks.len().saturating_sub(index),
            "task deleted"
        );
        Ok(removed)
    }
}
