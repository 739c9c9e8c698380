//! Loads the task board from the configured remote store and prints it.
//!
//! Usage:
//!
//! ```text
//! TASKFLOW_PROJECT_ID=... TASKFLOW_PUBLIC_KEY=... taskflow-board
//! ```
//!
//! The store location, table and request timeout come from
//! `TASKFLOW_STORE_URL`, `TASKFLOW_TABLE` and `TASKFLOW_TIMEOUT_SECS`.
//! Logging follows `RUST_LOG` and defaults to `info` on stderr.

use std::io::{self, Write};
use std::sync::Arc;
use taskflow::board::BoardController;
use taskflow::task::adapters::http::{HttpRecordStore, StoreConfig, StoreConfigError};
use taskflow::task::ports::RemoteStoreError;
use taskflow::task::services::{TaskStateManager, TaskTransport};
use thiserror::Error;
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that stop the board from being shown.
#[derive(Debug, Error)]
enum BoardError {
    #[error("invalid store configuration: {0}")]
    Config(#[from] StoreConfigError),
    #[error("failed to build store client: {0}")]
    Client(#[from] RemoteStoreError),
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to write board: {0}")]
    Output(#[source] io::Error),
    #[error("{0}")]
    Load(String),
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(BoardError::Runtime)?;
    runtime.block_on(run())?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), BoardError> {
    let config = StoreConfig::from_env()?;
    tracing::info!(
        store = %config.base_url(),
        table = config.table(),
        "starting task board"
    );
    let store = Arc::new(HttpRecordStore::new(config)?);
    let manager = Arc::new(TaskStateManager::new(TaskTransport::new(store)));
    let controller = BoardController::new(manager);
    let failure = controller.start().await;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", controller.view()).map_err(BoardError::Output)?;
    stdout.flush().map_err(BoardError::Output)?;

    failure.map_or(Ok(()), |notification| {
        Err(BoardError::Load(notification.message().to_owned()))
    })
}
