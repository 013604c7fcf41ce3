//! HTTP handlers for the task API.
//!
//! Handlers translate requests into [`TaskService`] calls and map outcomes to
//! status codes: creation answers 201, deletion 204, and a position with no
//! task 404.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;

use super::dto::{HealthResponse, TaskPayload, TaskResponse, TitleQuery};
use super::error::ApiErrorResponse;
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{TaskRequest, TaskService},
};

fn to_responses(tasks: &[Task]) -> Vec<TaskResponse> {
    tasks.iter().map(TaskResponse::from).collect()
}

fn read_payload(
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<TaskRequest, ApiErrorResponse> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable task payload");
        ApiErrorResponse::bad_request(rejection.body_text())
    })?;
    body.validate().map_err(|details| {
        tracing::debug!(failures = details.len(), "task payload rejected");
        ApiErrorResponse::validation_error(details)
    })
}

/// `GET /tasks`
///
/// # Errors
///
/// Returns 500 when the store fails.
pub async fn list_tasks<R, C>(
    State(service): State<TaskService<R, C>>,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = service.list_tasks().await?;
    Ok(Json(to_responses(&tasks)))
}

/// `GET /tasks/{id}`
///
/// # Errors
///
/// Returns 404 when no task occupies `id`.
pub async fn get_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = service.get_task(TaskId::new(id)).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `GET /tasks/title?title=...`
///
/// # Errors
///
/// Returns 500 when the store fails.
pub async fn find_by_title<R, C>(
    State(service): State<TaskService<R, C>>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = service.find_by_title(&query.title).await?;
    Ok(Json(to_responses(&tasks)))
}

/// `POST /tasks`
///
/// # Errors
///
/// Returns 400 when the payload is unreadable or fails validation.
pub async fn create_task<R, C>(
    State(service): State<TaskService<R, C>>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let request = read_payload(payload)?;
    let task = service.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// `PUT /tasks/{id}`
///
/// # Errors
///
/// Returns 400 when the payload is unreadable or fails validation.
pub async fn replace_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(id): Path<i64>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let request = read_payload(payload)?;
    let task = service.replace_task(TaskId::new(id), request).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `DELETE /tasks/{id}`
///
/// # Errors
///
/// Returns 404 when no task occupies `id`.
pub async fn delete_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service.delete_task(TaskId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health`
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
