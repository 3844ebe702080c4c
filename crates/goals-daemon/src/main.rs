//! # goals-daemon
//!
//! Serves the goals HTTP API.
//!
//! ## Usage
//!
//! ```text
//! GOALS_STORE_URI=file:///var/lib/goals goals-daemon --port 8000
//! ```

use anyhow::Result;
use clap::Parser;

use goals_daemon::{logging, ServeArgs};

/// Goals HTTP API daemon.
#[derive(Parser)]
#[command(name = "goals-daemon", version, about = "Goals HTTP API daemon")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.serve.resolve()?;

    logging::init(config.access_log.as_deref())?;

    tracing::info!("Starting goals daemon");
    tracing::info!("Store: {}", config.store_uri);

    goals_daemon::run(config).await
}
