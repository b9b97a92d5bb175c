//! Config command: show where the configuration lives and what it contains.

use anyhow::Result;
use collide_core::config::CollideConfig;
use std::path::Path;

pub fn run_show_config(path: &Path, cfg: &CollideConfig) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
