//! Roster CLI - manage the local student list from the terminal.
//!
//! Opens (or creates) the SQLite database, loads the controller and runs one
//! subcommand against it. Logs go to a daily rolling file in the log
//! directory (see [`config`]); `RUST_LOG` controls the filter.

use std::path::PathBuf;

use clap::Parser;
use roster_client::RosterState;
use roster_store::{Database, SqliteStudentRepository};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;

use commands::Command;

#[derive(Parser)]
#[command(name = "roster", about = "Manage a local list of student records")]
struct Cli {
    /// Database file. Defaults to `$ROSTER_DATA_DIR/$ROSTER_DB_FILE`.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_dir = config::get_log_dir();
    std::fs::create_dir_all(&log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&log_dir, "roster");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db_path = cli.db.unwrap_or_else(config::get_database_path);
    tracing::info!("Using database: {}", db_path.display());

    let db = Database::open(&db_path).await?;
    let repo = SqliteStudentRepository::new(db.pool().clone());
    let mut state = RosterState::new(repo).await?;

    let mut stdout = std::io::stdout().lock();
    let result = commands::run(&mut state, cli.command, &mut stdout).await;

    db.close().await;
    result
}
