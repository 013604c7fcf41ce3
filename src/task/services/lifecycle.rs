//! Service layer for creating, replacing, looking up, and deleting tasks.

use crate::task::{
    domain::{NewTask, Priority, Task, TaskDetails, TaskDomainError, TaskId, Topic},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload carrying the full content of a task.
///
/// Used both for creation and for full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    topic: Topic,
    title: String,
    description: Option<String>,
    due_at: Option<DateTime<Utc>>,
    done: bool,
    priority: Priority,
}

impl TaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(topic: Topic, title: impl Into<String>, priority: Priority) -> Self {
        Self {
            topic,
            title: title.into(),
            description: None,
            due_at: None,
            done: false,
            priority,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    fn into_details(self) -> Result<TaskDetails, TaskDomainError> {
        let mut details =
            TaskDetails::new(self.topic, self.title, self.priority)?.with_done(self.done);
        if let Some(description) = self.description {
            details = details.with_description(description);
        }
        if let Some(due_at) = self.due_at {
            details = details.with_due_at(due_at);
        }
        Ok(details)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Stamps timestamps from the injected clock and funnels every mutation
/// through the repository.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task in position order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Returns the task at position `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] wrapping
    /// [`TaskRepositoryError::OutOfRange`] when no task occupies `id`.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        Ok(self.repository.get_by_position(id).await?)
    }

    /// Returns every task whose title contains `title`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn find_by_title(&self, title: &str) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_by_title(title).await?)
    }

    /// Creates a task at the end of the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is blank.
    pub async fn create_task(&self, request: TaskRequest) -> TaskServiceResult<Task> {
        let details = request.into_details()?;
        let task = self
            .repository
            .create(NewTask::new(details, &*self.clock))
            .await?;
        tracing::info!(id = %task.id(), title = task.title(), "task created");
        Ok(task)
    }

    /// Replaces the task at position `id` with the request content.
    ///
    /// The replaced task's creation time is kept and the modification time
    /// is set to now. When no task occupies `id` the request is appended
    /// instead and the returned task carries the id it was given.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is blank, or
    /// [`TaskServiceError::Repository`] when the store fails.
    pub async fn replace_task(&self, id: TaskId, request: TaskRequest) -> TaskServiceResult<Task> {
        let details = request.into_details()?;
        let task = self
            .repository
            .create(NewTask::replacing(id, details, &*self.clock))
            .await?;
        if task.id() == id {
            tracing::info!(%id, "task replaced");
        } else {
            tracing::warn!(
                requested = %id,
                assigned = %task.id(),
                "replacement target missing, task appended"
            );
        }
        Ok(task)
    }

    /// Deletes the task at position `id`, renumbering every later task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] wrapping
    /// [`TaskRepositoryError::OutOfRange`] when no task occupies `id`.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let removed = self.repository.delete(id).await?;
        tracing::info!(%id, title = removed.title(), "task deleted");
        Ok(removed)
    }
}
