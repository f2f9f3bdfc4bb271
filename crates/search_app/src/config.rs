use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::engine_info;
use log::LevelFilter;
use search_core::{resolve, DEFAULT_METHOD_TOKEN, DEFAULT_SVD_RANKS};
use search_engine::{ExecutorSettings, DEFAULT_BASE_URL};
use serde::Deserialize;
use thiserror::Error;

use crate::logging::LogDestination;

const CONFIG_FILENAME: &str = "search_client.ron";
/// Overrides the config file location.
pub const CONFIG_ENV: &str = "SEARCH_CLIENT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("default method {0:?} is not a valid method token")]
    InvalidDefaultMethod(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    /// Ranks with precomputed SVD components, in the order they are offered.
    pub svd_ranks: Vec<i64>,
    pub default_method: String,
    pub connect_timeout_secs: Option<u64>,
    /// `None` lets a request wait for the backend indefinitely.
    pub request_timeout_secs: Option<u64>,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BASE_URL.to_string(),
            svd_ranks: DEFAULT_SVD_RANKS.to_vec(),
            default_method: DEFAULT_METHOD_TOKEN.to_string(),
            connect_timeout_secs: Some(5),
            request_timeout_secs: Some(30),
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn executor_settings(&self) -> ExecutorSettings {
        ExecutorSettings {
            base_url: self.backend_url.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if resolve(&self.default_method).is_err() {
            return Err(ConfigError::InvalidDefaultMethod(self.default_method));
        }
        Ok(self)
    }
}

/// Config location: `$SEARCH_CLIENT_CONFIG`, or `search_client.ron` in the working directory.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// Loads the config file. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    engine_info!("Loaded config from {:?}", path);
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load(&temp.path().join("absent.ron")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.svd_ranks.len(), 10);
        assert_eq!(config.default_method, "linear");
    }

    #[test]
    fn partial_file_overrides_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search_client.ron");
        fs::write(
            &path,
            r#"(
                backend_url: "http://search.internal:8080",
                svd_ranks: [300, 100],
                default_method: "svd-300",
                request_timeout_secs: None,
                log_destination: Terminal,
            )"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.backend_url, "http://search.internal:8080");
        assert_eq!(config.svd_ranks, vec![300, 100]);
        assert_eq!(config.default_method, "svd-300");
        assert_eq!(config.log_destination, LogDestination::Terminal);

        let settings = config.executor_settings();
        assert_eq!(settings.request_timeout, None);
        assert_eq!(settings.connect_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search_client.ron");
        fs::write(&path, "(svd_ranks: [100,").unwrap();

        assert!(matches!(load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn unknown_default_method_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search_client.ron");
        fs::write(&path, r#"(default_method: "ann")"#).unwrap();

        assert!(matches!(
            load(&path),
            Err(ConfigError::InvalidDefaultMethod(method)) if method == "ann"
        ));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "loud".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
