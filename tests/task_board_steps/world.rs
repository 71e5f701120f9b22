//! Shared world state for task board BDD scenarios.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use studyboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::{TaskStoreError, TaskStoreService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskStoreService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub service: TestTaskService,
    pub task_ids: HashMap<String, TaskId>,
    pub last_result: Option<Result<Task, TaskStoreError>>,
}

impl TaskBoardWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TaskStoreService::new(InMemoryTaskRepository::new(), DefaultClock),
            task_ids: HashMap::new(),
            last_result: None,
        }
    }

    /// Looks up a task created earlier in the scenario by title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Due date used for tasks created by scenario steps.
pub fn scenario_due_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 15, 0, 0, 0)
        .single()
        .unwrap_or_default()
}
