//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskflow::task::ports::TaskRecord;

#[given(r#"the store holds a task "{title}" in "{status}""#)]
fn store_holds_task(
    world: &mut TaskBoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    world
        .store
        .seed(TaskRecord {
            name: Some(title.clone()),
            title: Some(title),
            status: Some(status),
            priority: Some("Medium".to_owned()),
            ..TaskRecord::default()
        })
        .wrap_err("seed task record")?;
    Ok(())
}

#[given("the store is unavailable")]
fn store_unavailable(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    world
        .store
        .set_unavailable(true)
        .wrap_err("switch store off")?;
    Ok(())
}

#[given("the board has started")]
fn board_started(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    if let Some(notification) = run_async(world.controller.start()) {
        return Err(eyre::eyre!("board failed to start: {notification}"));
    }
    Ok(())
}
