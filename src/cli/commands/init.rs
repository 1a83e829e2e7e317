//! `mdt init` command - create the data directory skeleton

use std::fs;
use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::helpers::RECORD_DIRS;

pub fn run(dir: &Path) -> Result<()> {
    for subdir in RECORD_DIRS {
        let path = dir.join(subdir);
        fs::create_dir_all(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("could not create {}", path.display()))?;
        println!("{} {}", style("✓").green(), path.display());
    }

    println!(
        "\n{} Initialized motor data directory at {}",
        style("✓").green().bold(),
        dir.display()
    );
    Ok(())
}
