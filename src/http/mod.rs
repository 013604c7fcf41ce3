//! HTTP gateway for the task service.
//!
//! Routes live under `/api/v1`:
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/tasks` | 200, every task |
//! | GET | `/tasks/{id}` | 200, or 404 |
//! | GET | `/tasks/title?title=` | 200, matching tasks |
//! | POST | `/tasks` | 201, created task |
//! | PUT | `/tasks/{id}` | 200, stored task |
//! | DELETE | `/tasks/{id}` | 204, or 404 |
//!
//! `GET /health` sits outside the versioned prefix.

pub mod dto;
pub mod error;
pub mod handlers;

use axum::{Router, routing::get};
use mockable::Clock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::task::{ports::TaskRepository, services::TaskService};

pub use dto::{HealthResponse, TaskPayload, TaskResponse, TitleQuery};
pub use error::{ApiError, ApiErrorResponse, FieldError};

/// Builds the application router around a single shared service.
pub fn router<R, C>(service: TaskService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route("/tasks/title", get(handlers::find_by_title::<R, C>))
        .route(
            "/tasks/{id}",
            get(handlers::get_task::<R, C>)
                .put(handlers::replace_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", tasks)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
