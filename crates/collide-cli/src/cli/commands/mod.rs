//! CLI command handlers.

mod once;
mod serve;
mod show_config;

pub use once::run_once;
pub use serve::run_serve;
pub use show_config::run_show_config;
