//! Rename command - Rename a copy of the pet.

use anyhow::Result;
use clap::Args;

use super::Session;

#[derive(Args)]
pub struct RenameArgs {
    /// New name for the copy
    #[arg(long)]
    to: String,
}

pub fn execute(args: RenameArgs, session: &Session) -> Result<()> {
    let mut renamed = session.pet.clone();
    renamed.set_name(args.to);

    println!("Original: {}", session.pet);
    println!("Renamed:  {}", renamed);
    Ok(())
}
