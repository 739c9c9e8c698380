//! Column layout and productivity overview derived from a snapshot.

use crate::task::{
    domain::{Task, TaskPriority, TaskStatus},
    services::{BoardSnapshot, CollectionPhase},
};
use std::fmt;

/// One status column of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl BoardColumn {
    /// Returns the column status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column's tasks in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Productivity overview counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    /// Every task on the board.
    pub total: usize,
    /// Tasks in progress.
    pub in_progress: usize,
    /// Completed tasks.
    pub completed: usize,
    /// High-priority tasks in any column.
    pub high_priority: usize,
}

impl BoardStats {
    /// Counts the given tasks.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status() {
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::ToDo => {}
            }
            if task.priority() == TaskPriority::High {
                stats.high_priority += 1;
            }
            stats
        })
    }
}

/// Tasks grouped into the three status columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    columns: Vec<BoardColumn>,
    stats: BoardStats,
}

impl BoardLayout {
    /// Groups tasks by status, keeping collection order inside each column.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let columns = TaskStatus::ALL
            .iter()
            .map(|status| BoardColumn {
                status: *status,
                tasks: tasks
                    .iter()
                    .filter(|task| task.status() == *status)
                    .cloned()
                    .collect(),
            })
            .collect();
        Self {
            columns,
            stats: BoardStats::from_tasks(tasks),
        }
    }

    /// Returns the columns in `To Do`, `In Progress`, `Completed` order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Returns the productivity overview.
    #[must_use]
    pub const fn stats(&self) -> BoardStats {
        self.stats
    }
}

/// What the board shows for a given snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView {
    /// The collection has not arrived yet.
    Loading,
    /// Loading failed.
    Failed {
        /// Failure shown to the user.
        message: String,
    },
    /// The collection is ready.
    Ready(BoardLayout),
}

impl BoardView {
    /// Derives the view from the current state.
    #[must_use]
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Self {
        match snapshot.phase() {
            CollectionPhase::Idle | CollectionPhase::Loading => Self::Loading,
            CollectionPhase::Failed { message } => Self::Failed {
                message: message.clone(),
            },
            CollectionPhase::Ready => Self::Ready(BoardLayout::from_tasks(snapshot.tasks())),
        }
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => writeln!(f, "Loading tasks..."),
            Self::Failed { message } => {
                writeln!(f, "Error loading tasks")?;
                writeln!(f, "{message}")
            }
            Self::Ready(layout) => write_layout(f, layout),
        }
    }
}

fn write_layout(f: &mut fmt::Formatter<'_>, layout: &BoardLayout) -> fmt::Result {
    for column in layout.columns() {
        writeln!(f, "{} ({})", column.status(), column.len())?;
        if column.is_empty() {
            writeln!(f, "  -")?;
        }
        for task in column.tasks() {
            write_card(f, task)?;
        }
        writeln!(f)?;
    }
    let stats = layout.stats();
    writeln!(
        f,
        "Total {} | In progress {} | Completed {} | High priority {}",
        stats.total, stats.in_progress, stats.completed, stats.high_priority
    )
}

fn write_card(f: &mut fmt::Formatter<'_>, task: &Task) -> fmt::Result {
    write!(f, "  #{} [{}] {}", task.id(), task.priority(), task.title())?;
    if let Some(due_date) = task.due_date() {
        write!(f, " (due {})", due_date.format("%b %d"))?;
    }
    for tag in task.tags().iter() {
        write!(f, " #{tag}")?;
    }
    writeln!(f)?;
    if let Some(description) = task.description() {
        writeln!(f, "      {description}")?;
    }
    Ok(())
}
