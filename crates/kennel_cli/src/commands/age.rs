//! Age command - Re-age a copy of the pet.

use anyhow::Result;
use clap::Args;

use super::Session;

#[derive(Args)]
pub struct AgeArgs {
    /// New age for the copy
    #[arg(short, long, allow_negative_numbers = true)]
    set: i32,
}

pub fn execute(args: AgeArgs, session: &Session) -> Result<()> {
    let mut aged = session.pet.clone();
    aged.set_age(args.set);

    println!("Original: {}", session.pet);
    println!("Aged:     {}", aged);
    Ok(())
}
