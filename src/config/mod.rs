//! Service Configuration
//!
//! Settings are resolved in three layers, later ones winning:
//! 1. Built-in defaults.
//! 2. An optional TOML file passed with `--config`.
//! 3. Environment variables (`POSTGRES_URL`, `WIMBD_DATA_DIR`, `ES_CONFIG`, `ES_DOLMA_CONFIG`)
//!    and the `--bind` flag.
//!
//! Elasticsearch credentials live in separate per-cluster TOML files so that
//! they can be mounted as secrets.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;


pub const ENV_POSTGRES_URL: &str = "POSTGRES_URL";
pub const ENV_DATA_DIR: &str = "WIMBD_DATA_DIR";
pub const ENV_ES_CONFIG: &str = "ES_CONFIG";
pub const ENV_ES_DOLMA_CONFIG: &str = "ES_DOLMA_CONFIG";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub bind: SocketAddr,
    /// Root of the precomputed statistics files.
    pub data_dir: PathBuf,
    /// When unset, domain tables are served from `data_dir/domains_per_token`.
    pub postgres_url: Option<String>,
    pub pool_min: u32,
    pub pool_max: u32,
    /// Deadline for a whole per-dataset fan-out.
    pub query_timeout_secs: u64,
    /// Entries kept by each query cache before it is flushed.
    pub cache_capacity: usize,
    pub es_config: PathBuf,
    pub es_dolma_config: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8000)),
            data_dir: PathBuf::from("/skiff_files/apps/wimdb"),
            postgres_url: None,
            pool_min: 4,
            pool_max: 8,
            query_timeout_secs: 200,
            cache_capacity: 128,
            es_config: PathBuf::from("/secret/es_config.toml"),
            es_dolma_config: PathBuf::from("/secret/es_dolma_config.toml"),
        }
    }
}

impl AppConfig {
    /// Resolves the configuration from command line arguments and the process environment.
    pub fn load(args: &[String]) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Same as `load` with an injectable environment lookup.
    pub fn resolve(args: &[String], env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut bind: Option<SocketAddr> = None;
        let mut config_path: Option<PathBuf> = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("--bind requires <addr:port>"))?;
                    bind = Some(
                        value
                            .parse()
                            .with_context(|| format!("invalid --bind address {:?}", value))?,
                    );
                    i += 2;
                }
                "--config" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("--config requires <path>"))?;
                    config_path = Some(PathBuf::from(value));
                    i += 2;
                }
                other => {
                    tracing::warn!("Ignoring unknown argument {:?}", other);
                    i += 1;
                }
            }
        }

        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env(env);
        if let Some(bind) = bind {
            config.bind = bind;
        }
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(url) = env(ENV_POSTGRES_URL).filter(|v| !v.trim().is_empty()) {
            self.postgres_url = Some(url);
        }
        if let Some(dir) = env(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(path) = env(ENV_ES_CONFIG) {
            self.es_config = PathBuf::from(path);
        }
        if let Some(path) = env(ENV_ES_DOLMA_CONFIG) {
            self.es_dolma_config = PathBuf::from(path);
        }
    }

    fn validate(&self) -> Result<()> {
        if self.pool_min > self.pool_max {
            return Err(anyhow!(
                "pool_min ({}) must not exceed pool_max ({})",
                self.pool_min,
                self.pool_max
            ));
        }
        if self.query_timeout_secs == 0 {
            return Err(anyhow!("query_timeout_secs must be positive"));
        }
        Ok(())
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

fn default_es_timeout() -> u64 {
    30
}

fn default_es_retries() -> usize {
    3
}

/// Connection settings for one Elasticsearch deployment.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EsClusterConfig {
    /// Base URL, e.g. `https://es.example.org:9200`.
    pub url: String,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default = "default_es_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_es_retries")]
    pub retries: usize,
}

impl EsClusterConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading Elasticsearch config {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("parsing Elasticsearch config {}", path.display()))?;
        if config.url.trim().is_empty() {
            return Err(anyhow!("{}: url must not be empty", path.display()));
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
