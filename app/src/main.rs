//! Checklist CLI.
//!
//! The command surface mirrors the todo list's user-facing controls: `add`
//! is the new-todo form, `done`/`undone` the completion checkbox, `rm` the
//! delete control, and `list` the filter bar.

use anyhow::{Context, Result, bail};
use checklist::storage::FileStorage;
use checklist::{TodoApp, TodoId};
use checklist_core::environment::UuidIdGenerator;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "checklist",
    version,
    about = "A local todo list with write-through persistence"
)]
struct Cli {
    /// Path of the persisted todo list.
    #[arg(long, global = true, default_value = "TODOS.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new todo (an empty name is silently ignored).
    Add {
        /// Text of the new todo.
        name: String,
    },
    /// Mark a todo as completed.
    Done {
        /// Todo id, or any unique prefix of it.
        id: String,
    },
    /// Mark a todo as not completed.
    Undone {
        /// Todo id, or any unique prefix of it.
        id: String,
    },
    /// Delete a todo.
    Rm {
        /// Todo id, or any unique prefix of it.
        id: String,
    },
    /// List todos, optionally filtered.
    List {
        /// Only show todos whose name contains this text (case-sensitive).
        #[arg(long)]
        contains: Option<String>,

        /// Hide completed todos.
        #[arg(long)]
        hide_completed: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so listings stay pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checklist=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let storage = Arc::new(FileStorage::new(cli.file));
    let mut app = TodoApp::load(storage, Arc::new(UuidIdGenerator))
        .context("failed to load the persisted todo list")?;

    match cli.command {
        Commands::Add { name } => {
            // The form-level check: empty submissions are dropped silently
            if name.is_empty() {
                return Ok(());
            }
            app.add(name).await?;
        }

        Commands::Done { id } => {
            let id = resolve_id(&app, &id).await?;
            app.toggle(id, true).await?;
        }

        Commands::Undone { id } => {
            let id = resolve_id(&app, &id).await?;
            app.toggle(id, false).await?;
        }

        Commands::Rm { id } => {
            let id = resolve_id(&app, &id).await?;
            app.delete(id).await?;
        }

        Commands::List {
            contains,
            hide_completed,
        } => {
            if let Some(contains) = contains {
                app.set_name_filter(contains);
            }
            app.set_hide_completed(hide_completed);

            for todo in app.visible().await {
                let mark = if todo.completed { "x" } else { " " };
                println!("[{mark}] {}  {}", todo.id, todo.name);
            }
        }
    }

    Ok(())
}

/// Resolve a full id or a unique prefix against the current list.
///
/// Prefix matching is a convenience of this surface only; the store itself
/// matches exact ids and treats unknown ones as no-ops.
async fn resolve_id(app: &TodoApp, text: &str) -> Result<TodoId> {
    let todos = app.todos().await;
    let matches: Vec<_> = todos
        .iter()
        .filter(|t| t.id.to_string().starts_with(text))
        .collect();

    match matches.as_slice() {
        [todo] => Ok(todo.id),
        [] => bail!("no todo with id {text}"),
        _ => bail!("id prefix {text} is ambiguous"),
    }
}
