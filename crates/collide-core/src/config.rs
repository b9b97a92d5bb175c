use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_REFERENCE: &str = "https://gist.githubusercontent.com/alexcesaro/c9c47c638252e21bd82c/raw/bd031237a56ae6691145b4df5617c385dffe930d/list.txt";

const DEFAULT_CANDIDATES: [&str; 4] = [
    "https://gist.githubusercontent.com/alexcesaro/4ebfa5a9548d053dddb2/raw/abb8525774b63f342e5173d1af89e47a7a39cd2d/file1.txt",
    "https://gist.githubusercontent.com/alexcesaro/249cde1332f9b2979140/raw/951e43186f14f9c386918d75d715ee49390ebc54/file2.txt",
    "https://gist.githubusercontent.com/alexcesaro/f99d72a1d1a1f140b27f/raw/e506ed86336ea8561027d9f8cd4007d1f691d835/file3.txt",
    "https://gist.githubusercontent.com/alexcesaro/77c12bfd58a0d1156d77/raw/e40a381a4bfade72c8fe85e97d83736a48f091e6/file4.txt",
];

/// Per-transfer curl limits (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Seconds allowed to establish a connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole transfer, including the body.
    pub transfer_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            transfer_timeout_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/collide/config.toml`.
///
/// Read once at startup and passed by reference afterwards; nothing mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollideConfig {
    /// Locator of the reference word list.
    pub reference: String,
    /// Locators of the lists compared against the reference.
    pub candidates: Vec<String>,
    /// Deadline in seconds for collecting every candidate result.
    pub timeout_secs: f64,
    /// TCP port the HTTP endpoint listens on.
    pub port: u16,
    /// Optional curl limits; if missing, built-in defaults are used.
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
}

impl Default for CollideConfig {
    fn default() -> Self {
        Self {
            reference: DEFAULT_REFERENCE.to_string(),
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            timeout_secs: 10.0,
            port: 8080,
            fetch: None,
        }
    }
}

impl CollideConfig {
    /// Aggregation deadline. Negative or NaN values collapse to zero.
    pub fn deadline(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(Duration::ZERO)
    }

    pub fn fetch_config(&self) -> FetchConfig {
        self.fetch.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("collide")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CollideConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CollideConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path; the file must exist.
pub fn load_from(path: &Path) -> Result<CollideConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: CollideConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
