//! # goals
//!
//! Terminal frontend for the goals list.
//!
//! - `goals list` — show the list
//! - `goals add <text>` — add a goal and show the list
//! - `goals delete <id>` — delete a goal and show the list
//! - `goals serve` — run the HTTP API (same as `goals-daemon`)

mod commands;

use clap::{Parser, Subcommand};
use goals_daemon::ServeArgs;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GOALS_GIT_HASH"),
    " ",
    env!("GOALS_BUILD_DATE"),
    ")"
);

/// Goals — keep a short list of things to do.
#[derive(Parser)]
#[command(name = "goals", version = VERSION, about)]
struct Cli {
    /// Base URL of the goals API (defaults to $GOALS_SERVER or http://localhost:8000).
    #[arg(long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all goals.
    List,
    /// Add a goal.
    Add {
        /// Goal text (e.g., "Finish course").
        text: String,
    },
    /// Delete a goal by id.
    Delete {
        /// Goal id as shown by `goals list`.
        id: String,
    },
    /// Run the goals HTTP API.
    Serve(ServeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let server = commands::goal::server_url(cli.server.as_deref());

    match cli.command {
        Commands::List => commands::goal::execute(&server, commands::goal::GoalAction::List),
        Commands::Add { text } => {
            commands::goal::execute(&server, commands::goal::GoalAction::Add(text))
        }
        Commands::Delete { id } => {
            commands::goal::execute(&server, commands::goal::GoalAction::Delete(id.into()))
        }
        Commands::Serve(args) => commands::serve::execute(&args),
    }
}
