//! In-memory integration tests for task creation and status changes.

use super::helpers::{TestService, date, service};
use rstest::rstest;
use studyboard::task::{
    domain::{Priority, TaskId, TaskStatus},
    services::{NewTaskRequest, TaskStoreError, TransitionTaskRequest},
};

#[rstest]
fn created_tasks_are_listed_in_insertion_order(mut service: TestService) -> eyre::Result<()> {
    let first = service.add(NewTaskRequest::new("Essay", "History", date(2024, 12, 20)))?;
    let second = service.add(
        NewTaskRequest::new("Problem set", "Mathematics", date(2024, 12, 9))
            .with_priority(Priority::High),
    )?;

    let ids: Vec<TaskId> = service.all().iter().map(|task| task.id()).collect();

    assert_eq!(ids, [first.id(), second.id()]);
    Ok(())
}

#[rstest]
fn rejected_creation_leaves_store_unchanged(mut service: TestService) -> eyre::Result<()> {
    service.add(NewTaskRequest::new("Essay", "History", date(2024, 12, 20)))?;
    let before = service.all().to_vec();

    let result = service.add(
        NewTaskRequest::new("", "Math", date(2024, 12, 20)).with_priority(Priority::Medium),
    );

    eyre::ensure!(
        result.as_ref().is_err_and(|err| err.is_validation()),
        "expected validation error, got {result:?}"
    );
    assert_eq!(service.all(), before.as_slice());
    Ok(())
}

#[rstest]
fn unknown_task_transition_leaves_store_unchanged(mut service: TestService) -> eyre::Result<()> {
    service.add(NewTaskRequest::new("Essay", "History", date(2024, 12, 20)))?;
    let before = service.all().to_vec();

    let result = service.transition(TransitionTaskRequest::new(TaskId::new(), "done"));

    eyre::ensure!(
        result.as_ref().is_err_and(|err| err.is_not_found()),
        "expected not-found error, got {result:?}"
    );
    assert_eq!(service.all(), before.as_slice());
    Ok(())
}

#[rstest]
fn invalid_status_string_is_reported_before_lookup(mut service: TestService) {
    let result = service.transition(TransitionTaskRequest::new(TaskId::new(), "someday"));

    assert!(matches!(result, Err(TaskStoreError::InvalidStatus(_))));
}

#[rstest]
fn task_can_cycle_through_every_status(mut service: TestService) -> eyre::Result<()> {
    let task = service.add(NewTaskRequest::new("Lab report", "Chemistry", date(2024, 12, 18)))?;

    for status in [
        TaskStatus::Done,
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Done,
        TaskStatus::InProgress,
    ] {
        let updated = service.set_status(task.id(), status)?;
        eyre::ensure!(updated.status() == status, "expected {status}");
    }

    assert_eq!(
        service.find(task.id()).map(|found| found.status()),
        Some(TaskStatus::InProgress)
    );
    Ok(())
}
