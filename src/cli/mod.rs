//! CLI module - argument parsing and command dispatch

pub mod commands;
pub mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mdt",
    version,
    about = "Motor Data Toolkit - rocket motor hardware records as plain-text JSON"
)]
pub struct Cli {
    /// Data directory holding the record subdirectories
    #[arg(
        long,
        global = true,
        env = "MDT_DATA_DIR",
        default_value = "motor-data"
    )]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory skeleton
    Init,

    /// Inspect motor part records
    #[command(subcommand)]
    Part(commands::part::PartCommand),

    /// Inspect motor assembly records
    #[command(subcommand)]
    Asm(commands::asm::AsmCommand),

    /// Inspect casting supply records
    #[command(subcommand)]
    Sup(commands::sup::SupCommand),

    /// Inspect motor reload records
    #[command(subcommand)]
    Reload(commands::reload::ReloadCommand),

    /// Validate records against their schemas and cross-references
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
