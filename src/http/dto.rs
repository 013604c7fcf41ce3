//! Wire representations of tasks.
//!
//! Field names are camelCase and enum values upper case. Timestamps are
//! written as RFC 3339 strings. Incoming due dates may also omit the offset,
//! in which case they are read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::FieldError;
use crate::task::{
    domain::{Priority, Task, Topic},
    services::TaskRequest,
};

/// Body of a create or replace request.
///
/// Every field is optional at the serde level so that missing fields can be
/// reported one by one. `id` and `createdAt` are not part of the payload;
/// clients that send them have them ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Topic name, e.g. `MATHEMATICS`.
    pub topic: Option<String>,
    /// Task title.
    pub title: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Due timestamp, e.g. `2024-12-31T23:59:59` or
    /// `2024-12-31T23:59:59+01:00`.
    pub due_at: Option<String>,
    /// Completion flag.
    pub done: Option<bool>,
    /// Priority name, e.g. `MAJOR`.
    pub priority: Option<String>,
}

impl TaskPayload {
    /// Checks required fields and converts the payload into a service
    /// request.
    ///
    /// # Errors
    ///
    /// Returns every field that is missing, blank, or names an unknown enum
    /// value.
    pub fn validate(self) -> Result<TaskRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let topic = match self.topic.as_deref().map(Topic::try_from) {
            Some(Ok(topic)) => Some(topic),
            Some(Err(err)) => {
                errors.push(FieldError::new("topic", err.to_string()));
                None
            }
            None => {
                errors.push(FieldError::new("topic", "must not be null"));
                None
            }
        };

        let title = match self.title {
            Some(title) if !title.trim().is_empty() => Some(title),
            _ => {
                errors.push(FieldError::new("title", "must not be blank"));
                None
            }
        };

        let due_at = match self.due_at.as_deref().map(parse_due_at) {
            Some(Ok(due_at)) => Some(due_at),
            Some(Err(err)) => {
                errors.push(FieldError::new("dueAt", err.to_string()));
                None
            }
            None => None,
        };

        if self.done.is_none() {
            errors.push(FieldError::new("done", "must not be null"));
        }

        let priority = match self.priority.as_deref().map(Priority::try_from) {
            Some(Ok(priority)) => Some(priority),
            Some(Err(err)) => {
                errors.push(FieldError::new("priority", err.to_string()));
                None
            }
            None => {
                errors.push(FieldError::new("priority", "must not be null"));
                None
            }
        };

        let (Some(topic_value), Some(title_value), Some(done), Some(priority_value)) =
            (topic, title, self.done, priority)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut request = TaskRequest::new(topic_value, title_value, priority_value).with_done(done);
        if let Some(description) = self.description {
            request = request.with_description(description);
        }
        if let Some(due_value) = due_at {
            request = request.with_due_at(due_value);
        }
        Ok(request)
    }
}

/// Reads an RFC 3339 timestamp, or an ISO 8601 date-time without offset as
/// UTC.
fn parse_due_at(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|due_at| due_at.with_timezone(&Utc))
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|due_at| due_at.and_utc()))
}

/// Task as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Current position of the task.
    pub id: i64,
    /// Topic.
    pub topic: Topic,
    /// Title.
    pub title: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Due timestamp, if any.
    pub due_at: Option<DateTime<Utc>>,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest replacement timestamp.
    pub updated_at: DateTime<Utc>,
    /// Priority.
    pub priority: Priority,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        let details = task.details();
        Self {
            id: task.id().value(),
            topic: details.topic(),
            title: details.title().to_owned(),
            description: details.description().map(ToOwned::to_owned),
            due_at: details.due_at(),
            done: details.done(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
            priority: details.priority(),
        }
    }
}

/// Query string of the title search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TitleQuery {
    /// Substring to look for.
    pub title: String,
}

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the server is serving.
    pub status: String,
}
