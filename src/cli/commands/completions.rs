//! Shell completion generation
//!
//! ```bash
//! # Bash - add to ~/.bashrc
//! source <(mdt completions bash)
//!
//! # Fish
//! mdt completions fish > ~/.config/fish/completions/mdt.fish
//! ```

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use miette::Result;

use crate::cli::Cli;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "mdt", &mut io::stdout());
    Ok(())
}
