//! Bark command - Make the pet bark.

use anyhow::Result;
use tracing::info;

use super::Session;

pub fn execute(session: &Session) -> Result<()> {
    info!("Asking {} to bark", session.pet.name());
    session.pet.bark();
    Ok(())
}
