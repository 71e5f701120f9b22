//! Service layer for task creation, status changes and board views.

use crate::task::{
    domain::{
        ParseTaskStatusError, Priority, StatusBoard, StatusFilter, Subject, Task, TaskDetails,
        TaskDomainError, TaskId, TaskStatus, TaskSummary, TaskTitle, filter_by_status,
        group_by_status,
    },
    ports::{TaskRepository, TaskRepositoryError},
    services::TaskStoreConfig,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

/// Request payload for creating a task from the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    title: String,
    subject: String,
    due_date: DateTime<Utc>,
    priority: Option<Priority>,
    description: Option<String>,
}

impl NewTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            due_date,
            priority: None,
            description: None,
        }
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for moving a task to a status named by a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    target_status: String,
}

impl TransitionTaskRequest {
    /// Creates a transition request.
    #[must_use]
    pub fn new(task_id: TaskId, target_status: impl Into<String>) -> Self {
        Self {
            task_id,
            target_status: target_status.into(),
        }
    }
}

/// Service-level errors for task store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// Creation input failed validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The requested status string is unknown.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

impl TaskStoreError {
    /// Returns whether the error rejects creation input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns whether the error names an unknown task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::NotFound(_)))
    }
}

/// Result type for task store service operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store orchestration service.
///
/// Exclusively owns the repository; mutating operations take `&mut self`, so
/// a multi-threaded host wraps the whole service in a single mutex.
#[derive(Debug, Clone)]
pub struct TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    repository: R,
    clock: C,
    config: TaskStoreConfig,
}

impl<R, C> TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(repository: R, clock: C) -> Self {
        Self::with_config(repository, clock, TaskStoreConfig::default())
    }

    /// Creates a service with a custom configuration.
    #[must_use]
    pub const fn with_config(repository: R, clock: C, config: TaskStoreConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskStoreConfig {
        &self.config
    }

    /// Creates a new task in [`TaskStatus::Todo`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the title or subject is
    /// empty or a configured length limit is exceeded, and
    /// [`TaskStoreError::Repository`] when the repository rejects the record.
    /// The store is unchanged on error.
    pub fn add(&mut self, request: NewTaskRequest) -> TaskStoreResult<Task> {
        let details = self.validate(request).inspect_err(|err| {
            warn!(error = %err, "rejected task creation");
        })?;
        let task = Task::new(details, &self.clock);
        self.repository.store(task.clone())?;
        debug!(
            task_id = %task.id(),
            subject = %task.subject(),
            priority = %task.priority(),
            "task created"
        );
        Ok(task)
    }

    /// Overwrites the status of an existing task.
    ///
    /// Any status may follow any other; requesting the current status leaves
    /// the task unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> TaskStoreResult<Task> {
        let task = self
            .repository
            .update_status(id, status)
            .inspect_err(|err| warn!(task_id = %id, error = %err, "rejected status change"))?;
        debug!(task_id = %id, status = %status, "task status changed");
        Ok(task)
    }

    /// Moves a task to a status given as a string.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::InvalidStatus`] when the status string is
    /// unknown, or the errors of [`Self::set_status`].
    pub fn transition(&mut self, request: TransitionTaskRequest) -> TaskStoreResult<Task> {
        let status = TaskStatus::try_from(request.target_status.as_str())?;
        self.set_status(request.task_id, status)
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Task] {
        self.repository.all()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.repository.find_by_id(id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    /// Returns whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Returns the tasks passing `filter`, in insertion order.
    #[must_use]
    pub fn filtered(&self, filter: StatusFilter) -> Vec<&Task> {
        filter_by_status(self.all(), filter)
    }

    /// Returns the tasks grouped into status columns.
    #[must_use]
    pub fn board(&self) -> StatusBoard<'_> {
        group_by_status(self.all())
    }

    /// Returns headline counts as of the service clock's current time.
    #[must_use]
    pub fn summary(&self) -> TaskSummary {
        TaskSummary::from_tasks(self.all(), self.clock.utc())
    }

    fn validate(&self, request: NewTaskRequest) -> Result<TaskDetails, TaskDomainError> {
        let title = TaskTitle::new(request.title)?;
        let subject = Subject::new(request.subject)?;
        self.config
            .check_limits(&title, &subject, request.description.as_deref())?;

        Ok(TaskDetails {
            title,
            subject,
            due_date: request.due_date,
            priority: request.priority.unwrap_or(self.config.default_priority),
            description: request.description,
        })
    }
}
