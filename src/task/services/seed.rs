//! Sample board shown to a new student.

use super::{NewTaskRequest, TaskStoreResult, TaskStoreService};
use crate::task::{
    domain::{Priority, Task, TaskStatus},
    ports::TaskRepository,
};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

/// Days from the Unix epoch to 2024-12-01.
const DECEMBER_2024_EPOCH_DAYS: i64 = 20_058;

fn december_2024(day: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(DECEMBER_2024_EPOCH_DAYS + day - 1)
}

/// Returns the sample creation requests with the status each task is moved
/// to after creation.
#[must_use]
pub fn sample_requests() -> Vec<(NewTaskRequest, TaskStatus)> {
    vec![
        (
            NewTaskRequest::new("Linear Algebra Assignment", "Mathematics", december_2024(15))
                .with_priority(Priority::High)
                .with_description("Complete chapters 3-4 exercises"),
            TaskStatus::Todo,
        ),
        (
            NewTaskRequest::new("Chemistry Lab Report", "Chemistry", december_2024(18))
                .with_priority(Priority::Medium)
                .with_description("Organic synthesis experiment analysis"),
            TaskStatus::InProgress,
        ),
        (
            NewTaskRequest::new("Physics Quiz Preparation", "Physics", december_2024(12))
                .with_priority(Priority::High)
                .with_description("Review thermodynamics concepts"),
            TaskStatus::Todo,
        ),
        (
            NewTaskRequest::new("History Essay", "History", december_2024(20))
                .with_priority(Priority::Low)
                .with_description("World War II impact analysis"),
            TaskStatus::Done,
        ),
    ]
}

impl<R, C> TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Loads the sample board through [`Self::add`] and
    /// [`Self::set_status`], returning the created tasks in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`super::TaskStoreError`] raised while loading.
    /// Tasks created before the failure remain in the store.
    pub fn seed_sample_tasks(&mut self) -> TaskStoreResult<Vec<Task>> {
        sample_requests()
            .into_iter()
            .map(|(request, status)| {
                let created = self.add(request)?;
                if created.status() == status {
                    return Ok(created);
                }
                self.set_status(created.id(), status)
            })
            .collect()
    }
}
