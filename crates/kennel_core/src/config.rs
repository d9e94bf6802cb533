//! Kennel configuration file model and loader.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PetError, PetResult};
use crate::pet::Pet;

/// Default pet the CLI starts from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PetConfig {
    pub name: String,
    pub age: i32,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            name: "Rex".to_string(),
            age: 3,
        }
    }
}

impl PetConfig {
    pub fn to_pet(&self) -> Pet {
        Pet::new(self.name.clone(), self.age)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KennelConfig {
    /// Starting pet
    pub pet: PetConfig,
    /// Reject pets that fail validation
    pub strict: bool,
    /// Default tracing filter directive (overridden by RUST_LOG)
    pub log_filter: String,
}

impl Default for KennelConfig {
    fn default() -> Self {
        Self {
            pet: PetConfig::default(),
            strict: false,
            log_filter: "kennel=info".to_string(),
        }
    }
}

impl KennelConfig {
    /// Load a config file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> PetResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PetError::ConfigNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        debug!("Reading config from {:?}", path);
        let config: Self = match extension.as_str() {
            "toml" => toml::from_str(&fs::read_to_string(path)?)?,
            "yaml" | "yml" => serde_yaml::from_str(&fs::read_to_string(path)?)?,
            "json" => serde_json::from_str(&fs::read_to_string(path)?)?,
            _ => return Err(PetError::UnsupportedConfigFormat(path.to_path_buf())),
        };

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> PetResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Set the starting pet's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.pet.name = name.into();
        self
    }

    /// Set the starting pet's age.
    pub fn with_age(mut self, age: i32) -> Self {
        self.pet.age = age;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
