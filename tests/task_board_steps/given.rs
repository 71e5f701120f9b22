//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, scenario_due_date};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use studyboard::task::{domain::TaskStatus, services::NewTaskRequest};

#[given("an empty task board")]
fn empty_task_board(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.service.is_empty(), "scenario board should start empty");
    Ok(())
}

#[given(r#"a task "{title}" for "{subject}" is on the board"#)]
fn task_on_board(
    world: &mut TaskBoardWorld,
    title: String,
    subject: String,
) -> Result<(), eyre::Report> {
    let created = world
        .service
        .add(NewTaskRequest::new(title.clone(), subject, scenario_due_date()))
        .wrap_err("add task in scenario setup")?;
    world.task_ids.insert(title, created.id());
    Ok(())
}

#[given(r#"task "{title}" has been moved to "{status}""#)]
fn task_has_been_moved(
    world: &mut TaskBoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario setup: {err}"))?;
    world
        .service
        .set_status(id, target)
        .wrap_err("move task in scenario setup")?;
    Ok(())
}
