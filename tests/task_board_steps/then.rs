//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, parse_status};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskflow::board::BoardView;

#[then("the board is ready")]
fn board_is_ready(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    match world.controller.view() {
        BoardView::Ready(_) => Ok(()),
        other => Err(eyre::eyre!("expected a ready board, got {other:?}")),
    }
}

#[then("the board shows the load error")]
fn board_shows_load_error(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    match world.controller.view() {
        BoardView::Failed { .. } => Ok(()),
        other => Err(eyre::eyre!("expected a failed board, got {other:?}")),
    }
}

#[then(r#"the "{status}" column lists "{title}""#)]
fn column_lists(world: &TaskBoardWorld, status: String, title: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let BoardView::Ready(layout) = world.controller.view() else {
        return Err(eyre::eyre!("board is not ready"));
    };
    let column = layout
        .column(expected)
        .ok_or_else(|| eyre::eyre!("missing column {expected}"))?;
    if !column
        .tasks()
        .iter()
        .any(|task| task.title().as_str() == title)
    {
        return Err(eyre::eyre!("{title:?} is not in the {expected} column"));
    }
    Ok(())
}

#[then(r#"the notification reads "{message}""#)]
fn notification_reads(world: &TaskBoardWorld, message: String) -> Result<(), eyre::Report> {
    let notification = world
        .last_notification
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no notification was shown"))?;
    if notification.message() != message {
        return Err(eyre::eyre!(
            "expected notification {message:?}, got {:?}",
            notification.message()
        ));
    }
    Ok(())
}

#[then("no notification is shown")]
fn no_notification(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    match &world.last_notification {
        None => Ok(()),
        Some(notification) => Err(eyre::eyre!("unexpected notification {notification:?}")),
    }
}

#[then(r#"the task "{title}" is stored with tags "{tags}""#)]
fn stored_with_tags(world: &TaskBoardWorld, title: String, tags: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let record = world
        .store
        .record(id)
        .wrap_err("read stored record")?
        .ok_or_else(|| eyre::eyre!("record {id} is not stored"))?;
    if record.tags.as_deref() != Some(tags.as_str()) {
        return Err(eyre::eyre!("expected stored tags {tags:?}, got {:?}", record.tags));
    }
    Ok(())
}

#[then(r#"the task "{title}" is stored with status "{status}""#)]
fn stored_with_status(
    world: &TaskBoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let record = world
        .store
        .record(id)
        .wrap_err("read stored record")?
        .ok_or_else(|| eyre::eyre!("record {id} is not stored"))?;
    if record.status.as_deref() != Some(status.as_str()) {
        return Err(eyre::eyre!("expected stored status {status:?}, got {:?}", record.status));
    }
    Ok(())
}

#[then("the store holds {count:usize} tasks")]
fn store_holds(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world.store.len().wrap_err("read store size")?;
    if stored != count {
        return Err(eyre::eyre!("expected {count} stored tasks, found {stored}"));
    }
    Ok(())
}

#[then("the board shows {count:usize} tasks")]
fn board_shows(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let shown = world.controller.manager().snapshot().len();
    if shown != count {
        return Err(eyre::eyre!("expected {count} tasks on the board, found {shown}"));
    }
    Ok(())
}
