//! Domain model for task tracking.
//!
//! Tasks are plain records (topic, title, description, due date, completion
//! flag, priority) identified by their position in the store. Validation of
//! task content lives here; placement and renumbering belong to the store.

mod error;
mod ids;
mod priority;
mod task;
mod topic;

pub use error::{ParsePriorityError, ParseTopicError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use task::{NewTask, Task, TaskDetails};
pub use topic::Topic;
