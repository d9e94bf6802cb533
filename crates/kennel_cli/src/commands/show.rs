//! Show command - Print the pet.

use anyhow::Result;
use clap::{Args, ValueEnum};

use kennel_core::Pet;

use super::Session;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

pub fn execute(args: ShowArgs, session: &Session) -> Result<()> {
    println!("{}", render(&session.pet, args.format)?);
    Ok(())
}

fn render(pet: &Pet, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => pet.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(pet)?,
        OutputFormat::Yaml => serde_yaml::to_string(pet)?.trim_end().to_string(),
        OutputFormat::Toml => toml::to_string(pet)?.trim_end().to_string(),
    };
    Ok(rendered)
}
