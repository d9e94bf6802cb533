//! # kennel_core
//!
//! A small `Pet` value type with a name and an age, plus opt-in validation
//! and a configuration loader for the `kennel` CLI.
//!
//! ## Features
//!
//! - **Pet**: construct, clone, bark, greet, and produce offspring
//! - **Validation**: reject empty names and negative ages when asked to
//! - **Config**: TOML, YAML, or JSON configuration files
//!
//! ## Example
//!
//! ```rust
//! use kennel_core::Pet;
//!
//! let rex = Pet::new("Rex", 3);
//! let mut copy = rex.clone();
//! copy.set_age(5);
//!
//! assert_eq!(rex.age(), 3);
//! assert_eq!(rex.greet("Fido", "Hello"), "Hello, Fido! I'm Rex.");
//! assert_eq!(rex.has_baby().name(), "Rex Jr.");
//! ```

pub mod config;
pub mod error;
pub mod pet;
pub mod validator;

pub use config::{KennelConfig, PetConfig};
pub use error::{PetError, PetResult};
pub use pet::{Pet, BARK_SOUND, OFFSPRING_SUFFIX};
pub use validator::{PetValidator, ValidationResult, MAX_PLAUSIBLE_AGE};
