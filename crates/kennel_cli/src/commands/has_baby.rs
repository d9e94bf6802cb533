//! Has-baby command - Print the pet's offspring.

use anyhow::Result;
use clap::Args;
use tracing::info;

use kennel_core::Pet;

use super::Session;

#[derive(Args)]
pub struct HasBabyArgs {
    /// Number of generations to produce
    #[arg(short, long, default_value_t = 1)]
    generations: u32,
}

pub fn execute(args: HasBabyArgs, session: &Session) -> Result<()> {
    info!(
        "{} is having {} generation(s) of offspring",
        session.pet.name(),
        args.generations
    );

    for baby in lineage(&session.pet, args.generations) {
        println!("{}", baby);
    }
    Ok(())
}

/// Successive offspring, each born of the previous one.
///
/// Lazy: only the most recent generation is held at any time.
fn lineage(pet: &Pet, generations: u32) -> impl Iterator<Item = Pet> {
    std::iter::successors(Some(pet.has_baby()), |parent| Some(parent.has_baby()))
        .take(generations as usize)
}
