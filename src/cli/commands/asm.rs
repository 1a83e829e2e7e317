//! `mdt asm` commands - inspect motor assembly records

use std::path::Path;

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{open_store, print_record, record_ids};
use crate::entities::assembly::MotorAssembly;
use crate::store::load_motor_assembly;

#[derive(Subcommand, Debug)]
pub enum AsmCommand {
    /// Show one assembly record as JSON
    Show {
        /// Assembly ID (file stem under motor-assemblies/)
        id: String,
    },
    /// List all assembly records
    List,
}

pub fn run(cmd: AsmCommand, dir: &Path) -> Result<()> {
    match cmd {
        AsmCommand::Show { id } => show(dir, &id),
        AsmCommand::List => list(dir),
    }
}

fn show(dir: &Path, id: &str) -> Result<()> {
    let store = open_store(dir);
    let assembly = load_motor_assembly(&store, id).into_diagnostic()?;
    print_record(&assembly)
}

fn list(dir: &Path) -> Result<()> {
    let store = open_store(dir);
    let ids = record_ids(dir, "motor-assemblies");
    if ids.is_empty() {
        println!("No assemblies found");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "STANDARD", "PARTS", "MASS (g)", "NAME"]);
    for id in &ids {
        let asm: MotorAssembly = load_motor_assembly(&store, id).into_diagnostic()?;
        builder.push_record([
            asm.assembly_id.clone(),
            asm.motor_standard.to_string(),
            asm.parts.len().to_string(),
            format!("{:.1}", asm.hardware_mass.total_hardware_mass_grams),
            asm.display_name.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    println!("{}", table);
    println!("\n{} {} assembly(ies) found", style("→").blue(), ids.len());
    Ok(())
}
