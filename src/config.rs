//! Client configuration.
//!
//! [`FindingConfig`] is persisted as TOML. Every field has a default, so a
//! config file only needs the fields it changes.

use crate::error::{FindingError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Production Finding service endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://svcs.ebay.com/services/search/FindingService/v1?REST-PAYLOAD";

/// Environment variable that overrides [`FindingConfig::app_id`] in the CLI.
pub const APP_ID_ENV: &str = "FINDING_APP_ID";

/// Configuration for a [`crate::FindingClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindingConfig {
    /// Application ID sent as `SECURITY-APPNAME`.
    pub app_id: String,
    /// Base URL of the Finding service. Query parameters are appended to it.
    pub endpoint: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent. `None` uses the crate name and version.
    pub user_agent: Option<String>,
}

impl Default for FindingConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout_seconds: 5,
            user_agent: None,
        }
    }
}

impl FindingConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `app_id` must not be empty
    /// - `endpoint` must parse as an absolute URL
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(FindingError::Config("app_id must not be empty".into()));
        }
        url::Url::parse(&self.endpoint)
            .map_err(|e| FindingError::Config(format!("invalid endpoint: {e}")))?;
        if self.timeout_seconds == 0 {
            return Err(FindingError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| FindingError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FindingError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/finding/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("finding").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("finding")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/finding-config/config.toml")
        }
    }

    /// Replaces `app_id` with `value` when it is set and non-empty.
    pub fn apply_app_id_override(&mut self, value: Option<String>) {
        if let Some(app_id) = value.filter(|v| !v.trim().is_empty()) {
            self.app_id = app_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FindingConfig {
        FindingConfig {
            app_id: "app-123".into(),
            ..Default::default()
        }
    }

    #[test]
    fn default_values() {
        let config = FindingConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, 5);
        assert!(config.app_id.is_empty());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn default_requires_app_id() {
        let err = FindingConfig::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "config error: app_id must not be empty");
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = FindingConfig {
            timeout_seconds: 0,
            ..valid()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn relative_endpoint_rejected() {
        let config = FindingConfig {
            endpoint: "/services/search".into(),
            ..valid()
        };
        assert!(matches!(config.validate(), Err(FindingError::Config(_))));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let config = FindingConfig {
            user_agent: Some("finding-test/1.0".into()),
            timeout_seconds: 12,
            ..valid()
        };
        config.save_to_file(&path).expect("save");
        let loaded = FindingConfig::from_file(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "app_id = \"from-file\"\n").expect("write");
        let loaded = FindingConfig::from_file(&path).expect("load");
        assert_eq!(loaded.app_id, "from-file");
        assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(loaded.timeout_seconds, 5);
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = FindingConfig::from_file(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(FindingError::Io(_))));
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write");
        assert!(matches!(
            FindingConfig::from_file(&path),
            Err(FindingError::Config(_))
        ));
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = FindingConfig::default_config_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.ends_with("config.toml"));
        assert!(path_str.contains("finding"));
    }

    #[test]
    fn app_id_override_ignores_blank_values() {
        let mut config = valid();
        config.apply_app_id_override(Some("  ".into()));
        assert_eq!(config.app_id, "app-123");
        config.apply_app_id_override(None);
        assert_eq!(config.app_id, "app-123");
        config.apply_app_id_override(Some("env-app".into()));
        assert_eq!(config.app_id, "env-app");
    }
}
