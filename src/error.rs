// Error types for registry validation, configuration and line input
use std::path::PathBuf;
use thiserror::Error;

/// Problems found while building the view registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("view registry must contain at least one view")]
    Empty,
    #[error("invalid view identifier {0:?}: use lowercase letters, digits, '-' or '_'")]
    InvalidIdentifier(String),
    #[error("view {0:?} is registered more than once")]
    Duplicate(String),
    #[error("default view {0:?} is not in the registry")]
    UnknownDefault(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unknown key name {0:?}")]
    InvalidKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command {0:?} (try 'help')")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown key name {0:?}")]
    UnknownKey(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
