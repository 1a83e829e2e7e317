//! `mdt part` commands - inspect motor part records

use std::path::Path;

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{open_store, print_record, record_ids};
use crate::entities::part::MotorPart;
use crate::store::load_motor_part;

#[derive(Subcommand, Debug)]
pub enum PartCommand {
    /// Show one part record as JSON
    Show {
        /// Part ID (file stem under motor-parts/)
        id: String,
    },
    /// List all part records
    List,
}

pub fn run(cmd: PartCommand, dir: &Path) -> Result<()> {
    match cmd {
        PartCommand::Show { id } => show(dir, &id),
        PartCommand::List => list(dir),
    }
}

fn show(dir: &Path, id: &str) -> Result<()> {
    let store = open_store(dir);
    let part = load_motor_part(&store, id).into_diagnostic()?;
    print_record(&part)
}

fn list(dir: &Path) -> Result<()> {
    let store = open_store(dir);
    let ids = record_ids(dir, "motor-parts");
    if ids.is_empty() {
        println!("No parts found");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "TYPE", "ROLE", "STANDARD", "NAME"]);
    for id in &ids {
        let part: MotorPart = load_motor_part(&store, id).into_diagnostic()?;
        builder.push_record([
            part.part_id().to_string(),
            part.part_type().to_string(),
            part.role().to_string(),
            part.motor_standard().to_string(),
            part.display_name().to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    println!("{}", table);
    println!("\n{} {} part(s) found", style("→").blue(), ids.len());
    Ok(())
}
