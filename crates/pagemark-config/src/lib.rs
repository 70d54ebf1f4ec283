use pagemark_engine::MarkupOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),
}

fn default_language() -> String {
    MarkupOptions::default().default_language
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Language for snippets that do not name one.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Indent JSON output.
    #[serde(default = "enabled")]
    pub pretty_json: bool,
    /// Check section content rules when reading JSON.
    #[serde(default = "enabled")]
    pub validate_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            pretty_json: true,
            validate_json: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Config for a run: the file given explicitly (which must exist), or
    /// the default location, or built-in defaults when that is absent.
    pub fn resolve(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit_path {
            Some(path) => Self::load_from_path(path)?
                .ok_or_else(|| ConfigError::ConfigNotFound(path.to_path_buf())),
            None => Ok(Self::load()?.unwrap_or_default()),
        }
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/pagemark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Parser and serializer options derived from this config.
    pub fn markup_options(&self) -> MarkupOptions {
        MarkupOptions {
            default_language: self.default_language.clone(),
        }
    }
}
