//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, parse_status, run_async};
use rstest_bdd_macros::when;

#[when("the board starts")]
fn board_starts(world: &mut TaskBoardWorld) {
    world.last_notification = run_async(world.controller.start());
}

#[when(r#"the user submits a task titled "{title}" with tags "{tags}""#)]
fn submit_task(world: &mut TaskBoardWorld, title: String, tags: String) {
    world.controller.open_form();
    let form = world.controller.form_mut();
    form.title = title;
    form.tags = tags;
    world.last_notification = Some(run_async(world.controller.submit_form()));
}

#[when("the user submits the form without a title")]
fn submit_without_title(world: &mut TaskBoardWorld) {
    world.controller.open_form();
    world.last_notification = Some(run_async(world.controller.submit_form()));
}

#[when(r#"the user drags "{title}" to "{status}""#)]
fn drag_task(world: &mut TaskBoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let target = parse_status(&status)?;
    world.controller.begin_drag(id);
    world.last_notification = run_async(world.controller.drop_on(target));
    Ok(())
}

#[when(r#"the user deletes "{title}""#)]
fn delete_task(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    world.last_notification = Some(run_async(world.controller.delete(id)));
    Ok(())
}
