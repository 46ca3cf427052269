//! Shell configuration.
//!
//! Everything has a default, so an empty file (or no file at all) yields a
//! shell that mounts on `#app` and serves from `/`.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`ShellConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is present but unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for an [`App`](crate::App).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Selector of the host element the shell renders into.
    pub mount_selector: String,
    /// URL prefix the application is served under.
    pub history_base: String,
    /// Location for the first navigation, overriding the history's own.
    pub initial_path: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mount_selector: "#app".to_owned(),
            history_base: "/".to_owned(),
            initial_path: None,
        }
    }
}

impl ShellConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mount_selector.trim().is_empty() {
            return Err(ConfigError::Invalid("mount_selector is empty".to_owned()));
        }

        if !self.history_base.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "history_base '{}' must start with '/'",
                self.history_base
            )));
        }

        if let Some(path) = &self.initial_path
            && !path.starts_with('/')
        {
            return Err(ConfigError::Invalid(format!(
                "initial_path '{path}' must start with '/'"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ShellConfig::from_toml_str("").unwrap();

        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.mount_selector, "#app");
        assert_eq!(config.history_base, "/");
    }

    #[test]
    fn test_overrides() {
        let config = ShellConfig::from_toml_str(
            r##"
            mount_selector = "#root"
            history_base = "/app/"
            initial_path = "/login"
            "##,
        )
        .unwrap();

        assert_eq!(config.mount_selector, "#root");
        assert_eq!(config.history_base, "/app/");
        assert_eq!(config.initial_path.as_deref(), Some("/login"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ShellConfig::from_toml_str(r#"mount_selector = " ""#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ShellConfig::from_toml_str(r#"history_base = "app""#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ShellConfig::from_toml_str(r#"initial_path = "login""#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ShellConfig::from_toml_str("mount_selector = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ShellConfig::from_toml_str("unknown = true"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            ShellConfig::load("does/not/exist.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
