//! Status filtering for list views.

use super::{ParseTaskStatusError, Task, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status selection applied to a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    /// Every task regardless of status.
    #[default]
    All,
    /// Only tasks in the given status.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    /// Returns whether `task` passes this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => task.status() == status,
        }
    }
}

impl From<TaskStatus> for StatusFilter {
    fn from(status: TaskStatus) -> Self {
        Self::Only(status)
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TaskStatus::try_from(value).map(Self::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ParseTaskStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the tasks passing `filter`, preserving source order.
#[must_use]
pub fn filter_by_status(tasks: &[Task], filter: StatusFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}
