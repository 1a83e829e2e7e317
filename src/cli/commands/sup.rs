//! `mdt sup` commands - inspect casting supply records

use std::path::Path;

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{open_store, print_record, record_ids};
use crate::entities::supply::CastingSupply;
use crate::store::load_casting_supply;

#[derive(Subcommand, Debug)]
pub enum SupCommand {
    /// Show one casting supply record as JSON
    Show {
        /// Casting supply ID (file stem under casting-supplies/)
        id: String,
    },
    /// List all casting supply records
    List,
}

pub fn run(cmd: SupCommand, dir: &Path) -> Result<()> {
    match cmd {
        SupCommand::Show { id } => show(dir, &id),
        SupCommand::List => list(dir),
    }
}

fn show(dir: &Path, id: &str) -> Result<()> {
    let store = open_store(dir);
    let supply = load_casting_supply(&store, id).into_diagnostic()?;
    print_record(&supply)
}

fn list(dir: &Path) -> Result<()> {
    let store = open_store(dir);
    let ids = record_ids(dir, "casting-supplies");
    if ids.is_empty() {
        println!("No casting supplies found");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "TYPE", "STANDARD", "STOCK (in)", "ON HAND", "NAME"]);
    for id in &ids {
        let supply: CastingSupply = load_casting_supply(&store, id).into_diagnostic()?;
        let on_hand = supply
            .pieces_in_inventory
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        builder.push_record([
            supply.casting_supply_id.clone(),
            supply.supply_type.to_string(),
            supply.motor_standard.to_string(),
            format!("{:.1}", supply.stock_length_inch),
            on_hand,
            supply.display_name.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    println!("{}", table);
    println!(
        "\n{} {} casting supply(ies) found",
        style("→").blue(),
        ids.len()
    );
    Ok(())
}
