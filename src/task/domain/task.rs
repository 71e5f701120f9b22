//! Task aggregate root.

use super::{Priority, Subject, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated creation fields for a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    /// Task title.
    pub title: TaskTitle,
    /// Subject category.
    pub subject: Subject,
    /// Due date and time.
    pub due_date: DateTime<Utc>,
    /// Priority level.
    pub priority: Priority,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// One unit of student work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    subject: Subject,
    due_date: DateTime<Utc>,
    priority: Priority,
    status: TaskStatus,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in [`TaskStatus::Todo`] with a fresh identifier.
    ///
    /// An empty description is stored as `None`; any other text is kept
    /// verbatim.
    #[must_use]
    pub fn new(details: TaskDetails, clock: &impl Clock) -> Self {
        let description = details.description.filter(|text| !text.is_empty());

        Self {
            id: TaskId::new(),
            title: details.title,
            subject: details.subject,
            due_date: details.due_date,
            priority: details.priority,
            status: TaskStatus::Todo,
            description,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the subject category.
    #[must_use]
    pub const fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the task is unfinished and past its due date.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Done && self.due_date < now
    }

    /// Moves the task to `target`, returning the previous status.
    ///
    /// Last write wins; no transition history is kept.
    pub const fn transition_to(&mut self, target: TaskStatus) -> TaskStatus {
        let previous = self.status;
        self.status = target;
        previous
    }
}
