//! Validate command - Check the pet for an empty name or negative age.

use anyhow::Result;
use tracing::info;

use kennel_core::PetValidator;

use super::Session;

pub fn execute(session: &Session) -> Result<()> {
    info!("Validating pet: {}", session.pet);

    let result = PetValidator::validate(&session.pet);

    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }

    if result.valid {
        println!("✅ Pet validation passed");
        Ok(())
    } else {
        println!("❌ Pet validation failed:");
        for error in &result.errors {
            println!("   - {}", error);
        }
        anyhow::bail!("Pet validation failed with {} error(s)", result.errors.len())
    }
}
