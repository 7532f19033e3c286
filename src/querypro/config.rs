//! # Configuration
//!
//! Settings are resolved in priority order:
//! 1. **Command-line flags** (`--bind`, `--data-dir`, `--api-url`), applied by the binary.
//! 2. **Environment variables**: `QUERYPRO_*`, plus `PORT` for hosted deployments.
//! 3. **Config file**: `config.json` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**.
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `bind` | `QUERYPRO_BIND`, `PORT` | `0.0.0.0:9191` |
//! | `data_dir` | `QUERYPRO_DATA_DIR` | `./.querypro` |
//! | `api_url` | `QUERYPRO_API_URL` | `http://127.0.0.1:9191` |
//! | `max_body_bytes` | `QUERYPRO_MAX_BODY_BYTES` | `16384` |
//! | `request_timeout_ms` | `QUERYPRO_REQUEST_TIMEOUT_MS` | `10000` |

use crate::error::{QueryError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BIND: &str = "0.0.0.0:9191";
const DEFAULT_DATA_DIR: &str = ".querypro";
const DEFAULT_API_URL: &str = "http://127.0.0.1:9191";
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryProConfig {
    /// Address the HTTP service listens on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory holding `enquiries.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Base URL the client and dashboard talk to.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

impl Default for QueryProConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            data_dir: default_data_dir(),
            api_url: default_api_url(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl QueryProConfig {
    /// OS-appropriate directory for `config.json`, if the platform has one.
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "querypro", "querypro").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: QueryProConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Defaults, then the config file (when a config directory exists), then the environment.
    pub fn resolve() -> Result<Self> {
        let mut config = match Self::default_config_dir() {
            Some(dir) => Self::load(dir)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply `QUERYPRO_*` overrides read through `lookup`. `QUERYPRO_BIND` wins
    /// over `PORT`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(bind) = var("QUERYPRO_BIND") {
            self.bind = bind;
        } else if let Some(port) = var("PORT") {
            let port: u16 = parse_number("PORT", &port)?;
            self.bind = format!("0.0.0.0:{port}");
        }
        if let Some(dir) = var("QUERYPRO_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(url) = var("QUERYPRO_API_URL") {
            self.api_url = url;
        }
        if let Some(raw) = var("QUERYPRO_MAX_BODY_BYTES") {
            self.max_body_bytes = parse_number("QUERYPRO_MAX_BODY_BYTES", &raw)?;
        }
        if let Some(raw) = var("QUERYPRO_REQUEST_TIMEOUT_MS") {
            self.request_timeout_ms = parse_number("QUERYPRO_REQUEST_TIMEOUT_MS", &raw)?;
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| QueryError::Config(format!("{name} must be a number, got {raw:?}")))
}
