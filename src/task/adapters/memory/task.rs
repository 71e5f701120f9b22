//! In-memory implementation of the task repository port.

use std::collections::HashMap;

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Insertion-ordered in-memory task repository.
///
/// Tasks live in a `Vec` so iteration follows creation order; a position
/// index keyed by [`TaskId`] serves lookups.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
    positions: HashMap<TaskId, usize>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> TaskRepositoryResult<usize> {
        self.positions
            .get(&id)
            .copied()
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn store(&mut self, task: Task) -> TaskRepositoryResult<()> {
        if self.positions.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        self.positions.insert(task.id(), self.tasks.len());
        self.tasks.push(task);
        Ok(())
    }

    fn update_status(&mut self, id: TaskId, status: TaskStatus) -> TaskRepositoryResult<Task> {
        let position = self.position(id)?;
        let task = self
            .tasks
            .get_mut(position)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.transition_to(status);
        Ok(task.clone())
    }

    fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        self.positions
            .get(&id)
            .and_then(|position| self.tasks.get(*position))
    }

    fn all(&self) -> &[Task] {
        &self.tasks
    }
}
