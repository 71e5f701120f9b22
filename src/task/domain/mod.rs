//! Domain model for student task tracking.
//!
//! The task domain models task creation, the permissive status lifecycle and
//! the read-only list and board projections, keeping storage concerns
//! outside of the domain boundary.

mod board;
mod error;
mod filter;
mod ids;
mod status;
mod task;

pub use board::{StatusBoard, TaskSummary, group_by_status};
pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use filter::{StatusFilter, filter_by_status};
pub use ids::{Subject, TaskId, TaskTitle};
pub use status::{Priority, TaskStatus};
pub use task::{Task, TaskDetails};
