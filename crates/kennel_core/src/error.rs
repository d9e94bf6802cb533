//! Error types for the kennel core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fallible kennel operations.
pub type PetResult<T> = Result<T, PetError>;

/// Errors raised by validation and configuration loading.
///
/// The `Pet` operations themselves never fail; only the opt-in checks and
/// the config loader produce these.
#[derive(Error, Debug)]
pub enum PetError {
    #[error("Pet name cannot be empty")]
    EmptyName,

    #[error("Pet age cannot be negative: {0}")]
    NegativeAge(i32),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Unsupported config format (expected .toml, .yaml, .yml or .json): {0}")]
    UnsupportedConfigFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
