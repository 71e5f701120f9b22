//! Kanban grouping and summary counts derived from a task list.

use super::{Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tasks partitioned into one column per status.
///
/// All three columns are always present; a status with no tasks has an empty
/// column. Each column keeps source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBoard<'a> {
    todo: Vec<&'a Task>,
    in_progress: Vec<&'a Task>,
    done: Vec<&'a Task>,
}

impl<'a> StatusBoard<'a> {
    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Returns every column with its status, in display order.
    #[must_use]
    pub fn columns(&self) -> [(TaskStatus, &[&'a Task]); 3] {
        TaskStatus::ALL.map(|status| (status, self.column(status)))
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns whether every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<&'a Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }
}

/// Partitions `tasks` by status.
#[must_use]
pub fn group_by_status(tasks: &[Task]) -> StatusBoard<'_> {
    let mut board = StatusBoard::default();
    for task in tasks {
        board.column_mut(task.status()).push(task);
    }
    board
}

/// Headline counts for a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    /// Number of tasks.
    pub total: usize,
    /// Tasks not yet started.
    pub todo: usize,
    /// Tasks underway.
    pub in_progress: usize,
    /// Finished tasks.
    pub done: usize,
    /// Unfinished tasks whose due date has passed.
    pub overdue: usize,
}

impl TaskSummary {
    /// Counts `tasks` as of `now`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task], now: DateTime<Utc>) -> Self {
        tasks.iter().fold(Self::default(), |mut summary, task| {
            summary.total += 1;
            match task.status() {
                TaskStatus::Todo => summary.todo += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Done => summary.done += 1,
            }
            if task.is_overdue(now) {
                summary.overdue += 1;
            }
            summary
        })
    }

    /// Returns the share of finished tasks as a whole percentage, rounded
    /// down. An empty list reports zero.
    #[must_use]
    pub const fn completion_percent(&self) -> usize {
        match self.total {
            0 => 0,
            total => (self.done * 100).div_euclid(total),
        }
    }
}
