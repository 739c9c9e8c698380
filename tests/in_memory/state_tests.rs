//! State manager behaviour observed through subscriptions.

use super::helpers::{manager, seed_task, store};
use eyre::ensure;
use rstest::rstest;
use taskflow::task::{
    adapters::memory::InMemoryRecordStore,
    domain::{TaskDraft, TaskStatus},
    services::{CollectionPhase, OperationKind, OperationStatus},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subscribers_see_every_applied_change(
    store: InMemoryRecordStore,
) -> Result<(), eyre::Report> {
    let id = seed_task(&store, "Write docs", "To Do", "Medium")?;
    let tasks = manager(&store);
    let mut updates = tasks.subscribe();

    tasks.load().await?;
    ensure!(updates.has_changed()?, "load should notify subscribers");
    ensure!(
        updates.borrow_and_update().phase() == &CollectionPhase::Ready,
        "subscriber should see the ready collection"
    );

    tasks.change_status(id, TaskStatus::InProgress).await?;
    ensure!(updates.has_changed()?, "update should notify subscribers");
    let latest = updates.borrow_and_update().clone();
    ensure!(
        latest.task(id).map(|task| task.status()) == Some(TaskStatus::InProgress),
        "subscriber should see the new status"
    );
    ensure!(
        latest.operations().get(OperationKind::Update) == &OperationStatus::Succeeded,
        "update should be marked succeeded"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_stack_newest_first(store: InMemoryRecordStore) -> Result<(), eyre::Report> {
    let tasks = manager(&store);
    tasks.load().await?;

    for title in ["first", "second", "third"] {
        tasks.add_task(TaskDraft::new(title)?).await?;
    }

    let titles: Vec<String> = tasks
        .snapshot()
        .tasks()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    ensure!(
        titles == ["third", "second", "first"],
        "unexpected order {titles:?}"
    );

    tasks.load().await?;
    let reloaded: Vec<String> = tasks
        .snapshot()
        .tasks()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    ensure!(reloaded == titles, "reload should keep store order");
    Ok(())
}
