//! Task record and its content.

use super::{Priority, TaskDomainError, TaskId, Topic};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Caller-supplied content of a task.
///
/// Everything a client may set lives here; identifiers and timestamps are
/// assigned by the service and the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    topic: Topic,
    title: String,
    description: Option<String>,
    due_at: Option<DateTime<Utc>>,
    done: bool,
    priority: Priority,
}

impl TaskDetails {
    /// Creates task content with the required fields. The task starts not
    /// done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        topic: Topic,
        title: impl Into<String>,
        priority: Priority,
    ) -> Result<Self, TaskDomainError> {
        let title_value = title.into();
        if title_value.trim().is_empty() {
            return Err(TaskDomainError::BlankTitle);
        }

        Ok(Self {
            topic,
            title: title_value,
            description: None,
            due_at: None,
            done: false,
            priority,
        })
    }

    /// Sets the free-text description.
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

    /// Returns the topic.
    #[must_use]
    pub const fn topic(&self) -> Topic {
        self.topic
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due timestamp, if any.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Returns whether the task is done.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.done
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// A task that has not been placed in the store yet.
///
/// Without a requested id the store appends it. With a requested id that
/// names an occupied position, the store overwrites that position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    requested_id: Option<TaskId>,
    details: TaskDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewTask {
    /// Prepares a fresh task, stamped with the current clock time.
    #[must_use]
    pub fn new(details: TaskDetails, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            requested_id: None,
            details,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Prepares a full replacement for the task at `id`.
    ///
    /// Both timestamps are the current clock time. When the store overwrites
    /// an occupied position it keeps that task's creation time instead, see
    /// [`NewTask::into_replacement`].
    #[must_use]
    pub fn replacing(id: TaskId, details: TaskDetails, clock: &impl Clock) -> Self {
        Self {
            requested_id: Some(id),
            ..Self::new(details, clock)
        }
    }

    /// Returns the id the caller asked for, if any.
    #[must_use]
    pub const fn requested_id(&self) -> Option<TaskId> {
        self.requested_id
    }

    /// Returns the task content.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Fixes the task at its store position.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            details: self.details,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Turns the task into the successor of `existing`.
    ///
    /// The result takes the position and creation time of `existing`; the
    /// content and modification time come from `self`.
    #[must_use]
    pub fn into_replacement(self, existing: &Task) -> Task {
        Task {
            id: existing.id,
            details: self.details,
            created_at: existing.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    details: TaskDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Returns the positional identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task content.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the topic.
    #[must_use]
    pub const fn topic(&self) -> Topic {
        self.details.topic
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.details.title()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.details.priority
    }

    /// Returns whether the task is done.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.details.done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest replacement, or the creation
    /// timestamp when the task was never replaced.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to a new position after an earlier task was removed.
    pub const fn renumber(&mut self, id: TaskId) {
        self.id = id;
    }
}
