//! Server settings read from the environment at startup.
//! Used by: main, server.

use std::net::SocketAddr;

use crate::error::{Error, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATS_PATH: &str = "/stats";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub stats_path: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("STATS_PATH").ok().as_deref(),
        )
    }

    fn from_vars(bind_addr: Option<&str>, stats_path: Option<&str>) -> Result<Self> {
        let raw_addr = bind_addr.unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr
            .parse()
            .map_err(|e| Error::Config(format!("BIND_ADDR {:?}: {}", raw_addr, e)))?;

        let stats_path = stats_path.unwrap_or(DEFAULT_STATS_PATH);
        if !stats_path.starts_with('/') || stats_path.len() < 2 {
            return Err(Error::Config(format!(
                "STATS_PATH {:?} must be an absolute route like /stats",
                stats_path
            )));
        }

        Ok(Self { bind_addr, stats_path: stats_path.to_owned() })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            stats_path: DEFAULT_STATS_PATH.to_owned(),
        }
    }
}
