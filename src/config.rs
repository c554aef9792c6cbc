//! Configuration management for equipscout using the prefer crate.
//!
//! Precedence, lowest to highest: built-in defaults, config file,
//! `EQUIPSCOUT_*` environment variables, command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Default number of image candidates downloaded per lookup.
pub const DEFAULT_MAX_IMAGES: usize = 3;

/// Default number of result pages requested per search engine.
pub const DEFAULT_MAX_PAGES: usize = 3;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}

/// Application settings.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub bind: String,
    /// User agent for HTTP requests ("impersonate" picks a real browser UA).
    pub user_agent: String,
    /// Timeout in seconds for search pages and image downloads.
    pub request_timeout: u64,
    /// Timeout in seconds for PDF HEAD checks.
    pub head_timeout: u64,
    /// Delay between spec-sheet result pages in milliseconds.
    pub page_delay_ms: u64,
    /// Maximum image candidates downloaded per lookup.
    pub max_images: usize,
    /// Result pages requested per search engine for spec sheets.
    pub max_pages: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            user_agent: crate::http_client::IMPERSONATE.to_string(),
            request_timeout: 10,
            head_timeout: 5,
            page_delay_ms: 2000,
            max_images: DEFAULT_MAX_IMAGES,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn head_timeout(&self) -> Duration {
        Duration::from_secs(self.head_timeout)
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_images: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<usize>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers equipscout config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("equipscout").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file: {}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            // No config file found
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents).map_err(|e| ConfigError::Parse {
                format: "TOML",
                message: e.to_string(),
            })?,
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
                format: "YAML",
                message: e.to_string(),
            })?,
            _ => serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
                format: "JSON",
                message: e.to_string(),
            })?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(timeout) = self.head_timeout {
            settings.head_timeout = timeout;
        }
        if let Some(delay) = self.page_delay_ms {
            settings.page_delay_ms = delay;
        }
        if let Some(max) = self.max_images {
            settings.max_images = max;
        }
        if let Some(max) = self.max_pages {
            settings.max_pages = max;
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
pub async fn load_settings_with_options(
    options: LoadOptions,
) -> Result<(Settings, Config), ConfigError> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };

    if let Some(ref path) = config.source_path {
        tracing::debug!("Loaded config from {}", path.display());
    }

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    Ok((settings, config))
}

/// Apply `EQUIPSCOUT_*` overrides. Empty or unparseable values are ignored.
fn apply_env_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(bind) = var("EQUIPSCOUT_BIND") {
        tracing::debug!("Using EQUIPSCOUT_BIND from environment: {}", bind);
        settings.bind = bind;
    }
    if let Some(user_agent) = var("EQUIPSCOUT_USER_AGENT") {
        settings.user_agent = user_agent;
    }
    if let Some(v) = parse_var(var("EQUIPSCOUT_REQUEST_TIMEOUT"), "EQUIPSCOUT_REQUEST_TIMEOUT") {
        settings.request_timeout = v;
    }
    if let Some(v) = parse_var(var("EQUIPSCOUT_PAGE_DELAY_MS"), "EQUIPSCOUT_PAGE_DELAY_MS") {
        settings.page_delay_ms = v;
    }
    if let Some(v) = parse_var(var("EQUIPSCOUT_MAX_IMAGES"), "EQUIPSCOUT_MAX_IMAGES") {
        settings.max_images = v;
    }
    if let Some(v) = parse_var(var("EQUIPSCOUT_MAX_PAGES"), "EQUIPSCOUT_MAX_PAGES") {
        settings.max_pages = v;
    }
}

fn parse_var<T: std::str::FromStr>(value: Option<String>, key: &str) -> Option<T> {
    let value = value?;
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={}", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_search_behaviour() {
        let settings = Settings::default();
        assert_eq!(settings.bind, "127.0.0.1:8000");
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
        assert_eq!(settings.head_timeout(), Duration::from_secs(5));
        assert_eq!(settings.page_delay(), Duration::from_secs(2));
        assert_eq!(settings.max_images, 3);
        assert_eq!(settings.max_pages, 3);
    }

    #[tokio::test]
    async fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equipscout.toml");
        std::fs::write(&path, "bind = \"0.0.0.0:9000\"\nmax_images = 5\n").unwrap();

        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.source_path.as_deref(), Some(path.as_path()));

        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings);
        assert_eq!(settings.bind, "0.0.0.0:9000");
        assert_eq!(settings.max_images, 5);
        assert_eq!(settings.max_pages, 3);
    }

    #[tokio::test]
    async fn json_and_yaml_files_parse() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("equipscout.json");
        std::fs::write(&json, r#"{"page_delay_ms": 0}"#).unwrap();
        let config = Config::load_from_path(&json).await.unwrap();
        assert_eq!(config.page_delay_ms, Some(0));

        let yaml = dir.path().join("equipscout.yaml");
        std::fs::write(&yaml, "user_agent: TestBot/1.0\n").unwrap();
        let config = Config::load_from_path(&yaml).await.unwrap();
        assert_eq!(config.user_agent.as_deref(), Some("TestBot/1.0"));
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equipscout.toml");
        std::fs::write(&path, "bind = ").unwrap();

        let err = Config::load_from_path(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "TOML", .. }));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = Config::load_from_path(Path::new("/nonexistent/equipscout.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> = [
            ("EQUIPSCOUT_BIND", "0.0.0.0:1234"),
            ("EQUIPSCOUT_MAX_PAGES", "1"),
            ("EQUIPSCOUT_MAX_IMAGES", "lots"),
            ("EQUIPSCOUT_USER_AGENT", ""),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        Config {
            max_pages: Some(5),
            max_images: Some(4),
            ..Default::default()
        }
        .apply_to_settings(&mut settings);
        apply_env_overrides(&mut settings, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.bind, "0.0.0.0:1234");
        assert_eq!(settings.max_pages, 1);
        // unparseable env value leaves the file value in place
        assert_eq!(settings.max_images, 4);
        // empty env value is ignored
        assert_eq!(settings.user_agent, "impersonate");
    }
}
