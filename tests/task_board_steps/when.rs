//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, scenario_due_date};
use rstest_bdd_macros::when;
use studyboard::task::{
    domain::TaskId,
    services::{NewTaskRequest, TransitionTaskRequest},
};

#[when(r#"a task titled "{title}" is added for subject "{subject}""#)]
fn add_task(world: &mut TaskBoardWorld, title: String, subject: String) {
    let result = world
        .service
        .add(NewTaskRequest::new(title.clone(), subject, scenario_due_date()));
    if let Ok(ref created) = result {
        world.task_ids.insert(title, created.id());
    }
    world.last_result = Some(result);
}

#[when(r#"a task with an empty title is added for subject "{subject}""#)]
fn add_task_with_empty_title(world: &mut TaskBoardWorld, subject: String) {
    let result = world
        .service
        .add(NewTaskRequest::new("", subject, scenario_due_date()));
    world.last_result = Some(result);
}

#[when(r#"task "{title}" is moved to "{status}""#)]
fn move_task(world: &mut TaskBoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let result = world
        .service
        .transition(TransitionTaskRequest::new(id, status));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"an unknown task is moved to "{status}""#)]
fn move_unknown_task(world: &mut TaskBoardWorld, status: String) {
    let result = world
        .service
        .transition(TransitionTaskRequest::new(TaskId::new(), status));
    world.last_result = Some(result);
}
