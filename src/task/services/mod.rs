//! Application services for task orchestration.

mod lifecycle;

pub use lifecycle::{TaskRequest, TaskService, TaskServiceError, TaskServiceResult};
