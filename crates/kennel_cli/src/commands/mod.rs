//! CLI command definitions.
//!
//! Every subcommand works on one pet, resolved from the command-line flags,
//! then the config file, then the built-in defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use kennel_core::{KennelConfig, Pet, PetValidator};

pub mod age;
pub mod bark;
pub mod greet;
pub mod has_baby;
pub mod rename;
pub mod show;
pub mod validate;

/// kennel - a pet that barks, greets, and has babies
#[derive(Parser)]
#[command(name = "kennel")]
#[command(version, about = "kennel - a pet that barks, greets, and has babies")]
#[command(long_about = r#"
kennel drives a single Pet value from the command line.

COMMANDS:
  show      → Print the pet
  bark      → Make the pet bark
  greet     → Compose a greeting from the pet
  has-baby  → Print the pet's offspring
  rename    → Rename a copy of the pet
  age       → Re-age a copy of the pet
  validate  → Check the pet for an empty name or negative age

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (.toml, .yaml, .yml or .json)
    #[arg(short, long, global = true, env = "KENNEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pet name (overrides the config file)
    #[arg(short, long, global = true)]
    pub name: Option<String>,

    /// Pet age (overrides the config file)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub age: Option<i32>,

    /// Reject pets that fail validation
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the pet
    Show(show::ShowArgs),

    /// Make the pet bark
    Bark,

    /// Compose a greeting from the pet
    Greet(greet::GreetArgs),

    /// Print the pet's offspring
    #[command(name = "has-baby")]
    HasBaby(has_baby::HasBabyArgs),

    /// Rename a copy of the pet, leaving the original untouched
    Rename(rename::RenameArgs),

    /// Re-age a copy of the pet, leaving the original untouched
    Age(age::AgeArgs),

    /// Validate the pet
    Validate,
}

/// Resolved configuration and the pet every command works on.
pub struct Session {
    pub config: KennelConfig,
    pub pet: Pet,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn session(&self) -> Result<Session> {
        let mut config = KennelConfig::load_or_default(self.config.as_deref())
            .context("Failed to load config")?;

        if let Some(name) = &self.name {
            config = config.with_name(name.clone());
        }
        if let Some(age) = self.age {
            config = config.with_age(age);
        }
        if self.strict {
            config = config.strict(true);
        }

        let pet = config.pet.to_pet();
        if config.strict {
            PetValidator::ensure_valid(&pet).context("Strict mode: pet failed validation")?;
        }

        debug!("Resolved pet: {}", pet);
        Ok(Session { config, pet })
    }
}
