use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the site root.
pub const CONFIG_FILE_NAME: &str = "mdsite.toml";

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
}

/// Site layout: where content and static assets are read from, where the
/// generated pages go, and which template wraps them. All paths are
/// interpreted relative to the site root unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_path: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template_path: PathBuf::from("template.html"),
        }
    }
}

impl SiteConfig {
    /// Loads a config file, returning `Ok(None)` when it does not exist.
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

        let mut config: SiteConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured paths
        config.content_dir = Self::expand_path(&config.content_dir).unwrap_or(config.content_dir);
        config.static_dir = Self::expand_path(&config.static_dir).unwrap_or(config.static_dir);
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);
        config.template_path =
            Self::expand_path(&config.template_path).unwrap_or(config.template_path);

        Ok(Some(config))
    }

    /// Loads `mdsite.toml` from the site root, falling back to the default
    /// layout when the file is absent.
    pub fn load_or_default<P: AsRef<Path>>(site_root: P) -> Result<Self, ConfigError> {
        let config_path = site_root.as_ref().join(CONFIG_FILE_NAME);
        Ok(Self::load_from_path(&config_path)?.unwrap_or_default())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
