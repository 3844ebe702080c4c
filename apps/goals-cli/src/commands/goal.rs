// goal.rs — Goal subcommands: list, add, delete.
//
// Each invocation behaves like opening the page: load the list first, then
// apply the requested action, then render what the client state says.

use goals_client::{ClientState, GoalClient, GoalsBackend, HttpBackend};
use goals_core::GoalId;

/// Environment variable naming the API base URL.
pub const ENV_SERVER: &str = "GOALS_SERVER";
const DEFAULT_SERVER: &str = "http://localhost:8000";

pub enum GoalAction {
    List,
    Add(String),
    Delete(GoalId),
}

/// `--server`, else `$GOALS_SERVER`, else the local default.
pub fn server_url(flag: Option<&str>) -> String {
    flag.map(str::to_string)
        .or_else(|| std::env::var(ENV_SERVER).ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_SERVER.to_string())
}

pub fn execute(server: &str, action: GoalAction) -> anyhow::Result<()> {
    init_logging();
    let backend = HttpBackend::new(server)?;
    tracing::debug!(server, "using goals API");

    let rt = tokio::runtime::Runtime::new()?;
    let state = rt.block_on(run(backend, action));

    print!("{}", state.view());
    if state.error().is_some() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run<B: GoalsBackend>(backend: B, action: GoalAction) -> ClientState {
    let mut client = GoalClient::new(backend);
    client.load().await;
    match action {
        GoalAction::List => {}
        GoalAction::Add(text) => {
            client.add_goal(&text).await;
        }
        GoalAction::Delete(id) => {
            client.delete_goal(&id).await;
        }
    }
    client.state().clone()
}

// Quiet unless RUST_LOG asks otherwise; the banner already reports failures.
// An already-installed global subscriber is kept as is.
fn init_logging() {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!("keeping existing tracing subscriber: {}", e);
    }
}
