//! Board controller flows against the in-memory store.

use super::helpers::{controller, seed_task, store};
use eyre::ensure;
use rstest::rstest;
use taskflow::{
    board::{BoardView, NotificationLevel},
    task::{adapters::memory::InMemoryRecordStore, domain::TaskStatus},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_board_session(store: InMemoryRecordStore) -> Result<(), eyre::Report> {
    let docs = seed_task(&store, "Write docs", "To Do", "Low")?;
    seed_task(&store, "Fix login", "In Progress", "High")?;
    let mut board = controller(&store);

    ensure!(board.start().await.is_none(), "board should load");

    board.open_form();
    board.form_mut().title = "Plan sprint".to_owned();
    board.form_mut().tags = "planning".to_owned();
    board.form_mut().due_date = "2024-06-01".to_owned();
    let created = board.submit_form().await;
    ensure!(
        created.level() == NotificationLevel::Success,
        "create failed: {created}"
    );

    board.begin_drag(docs);
    let moved = board
        .drop_on(TaskStatus::Completed)
        .await
        .ok_or_else(|| eyre::eyre!("drop should notify"))?;
    ensure!(moved.message() == "Task moved to Completed!", "unexpected: {moved}");

    let BoardView::Ready(layout) = board.view() else {
        return Err(eyre::eyre!("board should be ready"));
    };
    let stats = layout.stats();
    ensure!(stats.total == 3, "expected three tasks, got {}", stats.total);
    ensure!(stats.in_progress == 1, "expected one task in progress");
    ensure!(stats.completed == 1, "expected one completed task");
    ensure!(stats.high_priority == 1, "expected one high-priority task");

    let to_do = layout
        .column(TaskStatus::ToDo)
        .ok_or_else(|| eyre::eyre!("missing To Do column"))?;
    let first = to_do
        .tasks()
        .first()
        .ok_or_else(|| eyre::eyre!("To Do column is empty"))?;
    ensure!(first.title().as_str() == "Plan sprint", "new task should lead");
    ensure!(store.len()? == 3, "store should hold three records");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reload_reflects_other_writers(store: InMemoryRecordStore) -> Result<(), eyre::Report> {
    let board = controller(&store);
    ensure!(board.start().await.is_none(), "board should load");
    ensure!(board.manager().snapshot().is_empty(), "board starts empty");

    seed_task(&store, "Added elsewhere", "To Do", "Medium")?;
    ensure!(board.start().await.is_none(), "board should reload");

    ensure!(board.manager().snapshot().len() == 1, "reload should see the new task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn outage_during_session_keeps_board(store: InMemoryRecordStore) -> Result<(), eyre::Report> {
    let docs = seed_task(&store, "Write docs", "To Do", "Low")?;
    let mut board = controller(&store);
    ensure!(board.start().await.is_none(), "board should load");

    store.set_unavailable(true)?;
    board.begin_drag(docs);
    let failed_move = board
        .drop_on(TaskStatus::InProgress)
        .await
        .ok_or_else(|| eyre::eyre!("drop should notify"))?;
    let failed_delete = board.delete(docs).await;

    ensure!(failed_move.is_error(), "move should fail");
    ensure!(
        failed_move
            .message()
            .starts_with("Failed to update task status: "),
        "unexpected: {failed_move}"
    );
    ensure!(failed_delete.is_error(), "delete should fail");
    let task = board
        .manager()
        .task(docs)
        .ok_or_else(|| eyre::eyre!("task should remain on the board"))?;
    ensure!(task.status() == TaskStatus::ToDo, "status should be unchanged");
    Ok(())
}
