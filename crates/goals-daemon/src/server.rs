// server.rs — Daemon lifecycle: open store, serve HTTP, close store.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use goals_core::StoreHandle;
use tokio::net::TcpListener;

use crate::api::{self, AppState};
use crate::config::DaemonConfig;

/// Options shared by `goals-daemon` and `goals serve`.
#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Path to a daemon.toml configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Store connection string (overrides GOALS_STORE_URI).
    #[arg(long)]
    pub store: Option<String>,

    /// Listening port (overrides GOALS_PORT).
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind.
    #[arg(long)]
    pub bind: Option<std::net::IpAddr>,
}

impl ServeArgs {
    /// Defaults, then the config file, then the environment, then flags.
    pub fn resolve(&self) -> anyhow::Result<DaemonConfig> {
        let config = match &self.config {
            Some(path) => DaemonConfig::load(path)?,
            None => DaemonConfig::default(),
        };
        let mut config = config.apply_env(|key| std::env::var(key).ok())?;
        if let Some(store) = &self.store {
            config.store_uri = store.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        Ok(config)
    }
}

/// Run the daemon until Ctrl-C.
pub async fn run(config: DaemonConfig) -> anyhow::Result<()> {
    let store = StoreHandle::open(&config.store_uri)
        .await
        .with_context(|| format!("opening store {}", config.store_uri))?;

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("binding {}", config.socket_addr()))?;

    let result = serve(listener, store.clone(), &config).await;

    store.close().await?;
    tracing::info!("goals daemon stopped");
    result
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve(
    listener: TcpListener,
    store: StoreHandle,
    config: &DaemonConfig,
) -> anyhow::Result<()> {
    let state: Arc<AppState> = AppState::from_config(store, config);
    let app = api::router(state, config.cors);
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("goals daemon listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving goals API")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
