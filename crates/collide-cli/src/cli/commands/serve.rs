//! Serve command: run the HTTP endpoint until the process is stopped.

use anyhow::Result;
use collide_core::config::CollideConfig;
use collide_core::fetch::CurlFetcher;
use std::sync::Arc;

use crate::cli::server::{self, AppState};

/// Binds `port` (or the configured port) on all interfaces and serves requests.
pub async fn run_serve(cfg: CollideConfig, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(cfg.port);
    let fetcher = Arc::new(CurlFetcher::new(&cfg.fetch_config()));
    let state = AppState::new(cfg, fetcher);
    server::serve(state, port).await
}
