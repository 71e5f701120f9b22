//! Repository port for task storage and lookup.

use crate::task::domain::{Task, TaskId, TaskStatus};
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Implementations keep tasks in insertion order. Every mutating operation is
/// atomic: on error the repository is unchanged.
pub trait TaskRepository {
    /// Appends a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    fn store(&mut self, task: Task) -> TaskRepositoryResult<()>;

    /// Overwrites the status of an existing task and returns the updated
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    fn update_status(&mut self, id: TaskId, status: TaskStatus) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    fn find_by_id(&self, id: TaskId) -> Option<&Task>;

    /// Returns every task in insertion order.
    fn all(&self) -> &[Task];

    /// Returns the number of stored tasks.
    fn len(&self) -> usize {
        self.all().len()
    }

    /// Returns whether no task has been stored.
    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
