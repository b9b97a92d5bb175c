//! Once command: run a single aggregation and print the JSON mapping.

use anyhow::Result;
use collide_core::aggregate;
use collide_core::config::CollideConfig;
use collide_core::fetch::CurlFetcher;
use std::sync::Arc;

pub async fn run_once(cfg: &CollideConfig) -> Result<()> {
    let fetcher = Arc::new(CurlFetcher::new(&cfg.fetch_config()));
    let json = aggregate::run_configured(fetcher, cfg).await?;
    println!("{}", json);
    Ok(())
}
