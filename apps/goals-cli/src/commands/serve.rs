// serve.rs — Start the goals HTTP API.
//
// This delegates to the same logic as goals-daemon, allowing users to
// start the server via `goals serve` without needing to know the binary name.

use goals_daemon::{logging, ServeArgs};

pub fn execute(args: &ServeArgs) -> anyhow::Result<()> {
    let config = args.resolve()?;
    logging::init(config.access_log.as_deref())?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(goals_daemon::run(config))
}
