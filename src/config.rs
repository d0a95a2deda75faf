use serde::Deserialize;
use std::env;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid log level: '{0}'. Valid levels: off, error, warn, info, debug, trace")]
    LogLevel(String),

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<NonZeroUsize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadsConfig {
    #[serde(default = "default_uploads_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_uploads_dir(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_model_path() -> PathBuf {
    PathBuf::from("final_model.onnx")
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Reads the configuration named by `CONFIG_PATH`, or `config.yaml`.
///
/// A missing `config.yaml` falls back to defaults; a missing file that was
/// named explicitly is an error.
pub fn load() -> Result<Config, ConfigError> {
    match env::var("CONFIG_PATH") {
        Ok(path) => from_file(Path::new(&path)),
        Err(_) => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                from_file(path)
            } else {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                Ok(Config::default())
            }
        }
    }
}

/// Checks that `level` is a plain level name such as `info` or `debug`.
pub fn validate_log_level(level: &str) -> Result<LevelFilter, ConfigError> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError::LogLevel(level.to_string()))
}

pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
    debug!("Loading configuration from: {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
