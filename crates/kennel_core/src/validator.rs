//! Opt-in pet validation.

use crate::error::{PetError, PetResult};
use crate::pet::Pet;

/// Ages above this produce a warning, not an error.
pub const MAX_PLAUSIBLE_AGE: i32 = 30;

/// Validation result with details.
#[derive(Debug)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for pets.
pub struct PetValidator;

impl PetValidator {
    /// Validate a pet, collecting every problem found.
    pub fn validate(pet: &Pet) -> ValidationResult {
        let mut result = ValidationResult::new();

        if pet.name().trim().is_empty() {
            result.add_error("Pet name cannot be empty");
        }

        if pet.age() < 0 {
            result.add_error(format!(
                "Pet '{}' has negative age: {}",
                pet.name(),
                pet.age()
            ));
        } else if pet.age() > MAX_PLAUSIBLE_AGE {
            result.add_warning(format!(
                "Pet '{}' is unusually old: {} (over {})",
                pet.name(),
                pet.age(),
                MAX_PLAUSIBLE_AGE
            ));
        }

        result
    }

    /// Validate several pets into one report.
    pub fn validate_all<'a>(pets: impl IntoIterator<Item = &'a Pet>) -> ValidationResult {
        let mut result = ValidationResult::new();
        for pet in pets {
            result.merge(Self::validate(pet));
        }
        result
    }

    /// Fail on the first validation error.
    pub fn ensure_valid(pet: &Pet) -> PetResult<()> {
        if pet.name().trim().is_empty() {
            return Err(PetError::EmptyName);
        }
        if pet.age() < 0 {
            return Err(PetError::NegativeAge(pet.age()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_result_is_valid() {
        let mut result = ValidationResult::default();
        assert!(result.valid);
        assert_eq!(result.valid, ValidationResult::new().valid);

        result.merge(ValidationResult::new());
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validate_pet() {
        let result = PetValidator::validate(&Pet::new("Rex", 3));
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_empty_pet() {
        let result = PetValidator::validate(&Pet::new("", -2));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_old_pet_warns() {
        let result = PetValidator::validate(&Pet::new("Methuselah", 31));
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validate_all_merges() {
        let pets = [Pet::new("Rex", 3), Pet::new("", 1)];
        let result = PetValidator::validate_all(&pets);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_ensure_valid_reports_name_first() {
        let err = PetValidator::ensure_valid(&Pet::new("", -1)).unwrap_err();
        assert!(matches!(err, PetError::EmptyName));
    }
}
