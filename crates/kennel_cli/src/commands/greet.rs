//! Greet command - Compose a greeting from the pet.

use anyhow::Result;
use clap::Args;

use super::Session;

#[derive(Args)]
pub struct GreetArgs {
    /// Who to greet
    #[arg(short, long)]
    other: String,

    /// Greeting message
    #[arg(short, long, default_value = "Hello")]
    message: String,
}

pub fn execute(args: GreetArgs, session: &Session) -> Result<()> {
    println!("{}", session.pet.greet(&args.other, &args.message));
    Ok(())
}
