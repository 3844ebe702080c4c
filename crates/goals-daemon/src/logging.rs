// logging.rs — tracing subscriber setup for the daemon binaries.
//
// Human-readable logs go to stderr. When an access log is configured, the
// per-request records emitted under `ACCESS_TARGET` are additionally written
// as JSON lines to that file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::api::ACCESS_TARGET;

/// Install the global subscriber.
pub fn init(access_log: Option<&Path>) -> anyhow::Result<()> {
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_filter(
            EnvFilter::from_default_env()
                .add_directive("goals_core=info".parse()?)
                .add_directive("goals_daemon=info".parse()?),
        );

    let access = match access_log {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening access log {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_filter(Targets::new().with_target(ACCESS_TARGET, Level::INFO)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr)
        .with(access)
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}
