//! reqstats: serves request statistics for itself at /stats.
//! Used by: binary entrypoint.

use reqstats::config::ServerConfig;
use reqstats::{server, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    tracing::info!(addr = %config.bind_addr, path = %config.stats_path, "starting reqstats");

    let state = state::build_state(config);
    server::run(state).await?;
    Ok(())
}
