//! `mdt reload` commands - inspect motor reload records

use std::path::Path;

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{open_store, print_record, record_ids};
use crate::entities::reload::MotorReload;
use crate::store::load_motor_reload;

#[derive(Subcommand, Debug)]
pub enum ReloadCommand {
    /// Show one reload record as JSON
    Show {
        /// Reload ID (file stem under motor-reloads/)
        id: String,
    },
    /// List all reload records
    List,
}

pub fn run(cmd: ReloadCommand, dir: &Path) -> Result<()> {
    match cmd {
        ReloadCommand::Show { id } => show(dir, &id),
        ReloadCommand::List => list(dir),
    }
}

fn show(dir: &Path, id: &str) -> Result<()> {
    let store = open_store(dir);
    let reload = load_motor_reload(&store, id).into_diagnostic()?;
    print_record(&reload)
}

fn list(dir: &Path) -> Result<()> {
    let store = open_store(dir);
    let ids = record_ids(dir, "motor-reloads");
    if ids.is_empty() {
        println!("No reloads found");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "ASSEMBLY", "STANDARD", "GRAINS", "NAME"]);
    for id in &ids {
        let reload: MotorReload = load_motor_reload(&store, id).into_diagnostic()?;
        builder.push_record([
            reload.motor_reload_id.clone(),
            reload.assembly_id.clone(),
            reload.motor_standard.to_string(),
            reload.grain_geometry.grain_count.to_string(),
            reload.display_name.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    println!("{}", table);
    println!("\n{} {} reload(s) found", style("→").blue(), ids.len());
    Ok(())
}
