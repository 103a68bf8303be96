use crate::error::{ConfigError, RegistryError};
use crate::model::ViewRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub views: ViewsConfig,
    pub keys: KeyConfig,
    pub threads: ThreadsConfig,
    pub logging: LoggingConfig,
}

/// View registry configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ViewsConfig {
    /// Ordered view identifiers; order drives next/previous
    pub registry: Vec<String>,
    /// View shown when the URL fragment names none
    pub default: String,
    /// Views that have a container on the page. Defaults to every registered view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<Vec<String>>,
}

/// Keyboard bindings, using DOM key names
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub next: String,
    pub previous: String,
    pub home: String,
}

/// Decorative thread for each view
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThreadsConfig {
    pub by_view: BTreeMap<String, String>,
}

/// Logging configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset, e.g. "info" or "crossroads=debug"
    pub level: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        ViewsConfig {
            registry: ["home", "diplomacy", "venture", "thought", "events"]
                .into_iter()
                .map(String::from)
                .collect(),
            default: "home".to_string(),
            containers: None,
        }
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig {
            next: "ArrowRight".to_string(),
            previous: "ArrowLeft".to_string(),
            home: "Home".to_string(),
        }
    }
}

impl Default for ThreadsConfig {
    fn default() -> Self {
        let by_view = [
            ("diplomacy", "diplomacy"),
            ("venture", "venture"),
            ("thought", "thought"),
            ("events", "event"),
        ]
        .into_iter()
        .map(|(view, thread)| (view.to_string(), thread.to_string()))
        .collect();
        ThreadsConfig { by_view }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl ViewsConfig {
    pub fn build_registry(&self) -> Result<ViewRegistry, RegistryError> {
        ViewRegistry::new(&self.registry, &self.default)
    }

    pub fn container_ids(&self) -> Vec<String> {
        self.containers
            .clone()
            .unwrap_or_else(|| self.registry.clone())
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "crossroads")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the config directory, or return defaults.
    ///
    /// Logging is not running yet when this is called, so problems come back
    /// as warnings for the caller to report.
    pub fn load() -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return (config, warnings),
                    Err(e) => {
                        warnings.push(e.to_string());
                        warnings.push("Using default configuration".to_string());
                    }
                }
            }
        }
        (Config::default(), warnings)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(write_err)
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save_to(&path)?;
            }
        }
        Ok(())
    }
}
