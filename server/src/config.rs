//! Server configuration: defaults, then a YAML file, then flags/environment.
//!
//! The YAML file is `--config-file` when given (it must exist), otherwise the
//! first `main.yml` found in the working directory or `$HOME`. Every setting
//! is optional at every layer.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 9090;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const CONFIG_FILE_NAME: &str = "main.yml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: serde_yaml::Error },
}

#[derive(Debug, Default, Parser)]
#[command(name = "flashcards-server", about = "Flashcards API and SSR server")]
pub struct CliArgs {
    /// YAML config file; defaults to `main.yml` in the working dir or `$HOME`.
    #[arg(short = 'f', long, env = "FLASHCARDS_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Postgres URL. Without one the in-process store is used.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "DB_MAX_CONNECTIONS")]
    pub db_max_connections: Option<u32>,

    /// `tracing` filter directive, e.g. `debug` or `server=debug,sqlx=warn`.
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub logger: LoggerSection,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerSection {
    pub port: Option<u16>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggerSection {
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub log_level: String,
}

impl ServerConfig {
    /// Locate and read the config file, then layer `args` on top.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config file is missing, or if the
    /// chosen file cannot be read or parsed.
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        let search_dirs: Vec<PathBuf> = [std::env::current_dir().ok(), std::env::var_os("HOME").map(PathBuf::from)]
            .into_iter()
            .flatten()
            .collect();
        let file = match locate_config_file(args.config_file.as_deref(), &search_dirs)? {
            Some(path) => Some(read_config_file(&path)?),
            None => None,
        };
        Ok(Self::resolve(args, file.unwrap_or_default()))
    }

    /// Merge layers: `args` over `file` over defaults. Empty database URLs
    /// count as unset.
    #[must_use]
    pub fn resolve(args: &CliArgs, file: FileConfig) -> Self {
        let database_url = args
            .database_url
            .clone()
            .or(file.database.url)
            .filter(|url| !url.trim().is_empty());

        Self {
            port: args.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            database_url,
            db_max_connections: args
                .db_max_connections
                .or(file.database.max_connections)
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            log_level: args
                .log_level
                .clone()
                .or(file.logger.level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
        }
    }
}

/// Pick the config file: `explicit` if given, else the first
/// `main.yml` under `search_dirs`.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] when `explicit` does not exist.
pub fn locate_config_file(explicit: Option<&Path>, search_dirs: &[PathBuf]) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        return Ok(Some(path.to_path_buf()));
    }
    Ok(search_dirs
        .iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file()))
}

/// Read and parse one YAML config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid YAML.
pub fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    if raw.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
