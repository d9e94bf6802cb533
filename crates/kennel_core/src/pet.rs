//! The `Pet` value type.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PetResult;
use crate::validator::PetValidator;

/// Sound written by [`Pet::bark`].
pub const BARK_SOUND: &str = "Woof!";

/// Suffix appended to a parent's name by [`Pet::has_baby`].
pub const OFFSPRING_SUFFIX: &str = "Jr.";

/// A named, aged pet.
///
/// `Pet` is a plain value: cloning yields a fully independent copy and
/// dropping it releases only the owned name. Neither the constructor nor the
/// mutators validate their input, so empty names and negative ages are
/// representable. Use [`Pet::try_new`] or [`PetValidator`] to reject them.
///
/// Mutation goes through `&mut self`; sharing one pet between threads that
/// mutate it requires external synchronization such as a `Mutex`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pet {
    name: String,
    age: i32,
}

impl Pet {
    /// Create a new pet. No validation is performed.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        let pet = Self {
            name: name.into(),
            age,
        };
        debug!("Created pet {:?} aged {}", pet.name, pet.age);
        pet
    }

    /// Create a new pet, rejecting an empty name or a negative age.
    pub fn try_new(name: impl Into<String>, age: i32) -> PetResult<Self> {
        let pet = Self::new(name, age);
        PetValidator::ensure_valid(&pet)?;
        Ok(pet)
    }

    /// Write the bark line to standard output.
    ///
    /// Never fails: a broken stdout is logged and otherwise ignored.
    pub fn bark(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.bark_to(&mut out) {
            warn!("{} could not bark: {}", self.name, e);
        }
    }

    /// Write the bark line (`"<name>: Woof!"`) to `out`.
    pub fn bark_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        debug!("{} barks", self.name);
        writeln!(out, "{}: {}", self.name, BARK_SOUND)
    }

    /// Compose a greeting from this pet to `other`.
    pub fn greet(&self, other: &str, msg: &str) -> String {
        debug!("{} greets {}", self.name, other);
        format!("{}, {}! I'm {}.", msg, other, self.name)
    }

    /// Produce an offspring named after this pet, aged zero.
    pub fn has_baby(&self) -> Pet {
        let baby = Pet::new(format!("{} {}", self.name, OFFSPRING_SUFFIX), 0);
        debug!("{} had a baby: {}", self.name, baby.name);
        baby
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (age {})", self.name, self.age)
    }
}
