//! `mdt validate` command - check every record and its cross-references
//!
//! Two passes. The schema pass loads every record against its type, which
//! exercises the same parse-and-validate path the store applies everywhere.
//! The reference pass then checks the soft cross-references (assembly part
//! IDs, reload assembly and casting supply IDs) against the records that
//! actually loaded - referential integrity is deliberately not enforced at
//! construction time, so this is where dangling references surface.

use std::collections::BTreeSet;
use std::path::Path;

use console::style;
use miette::Result;

use crate::cli::helpers::{open_store, record_ids};
use crate::entities::assembly::MotorAssembly;
use crate::entities::part::MotorPart;
use crate::entities::reload::MotorReload;
use crate::entities::supply::CastingSupply;
use crate::store::{
    load_casting_supply, load_motor_assembly, load_motor_part, load_motor_reload,
};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Strict mode - warnings become errors
    #[arg(long)]
    pub strict: bool,
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    records_checked: usize,
    records_failed: usize,
    total_errors: usize,
    total_warnings: usize,
}

pub fn run(args: ValidateArgs, dir: &Path) -> Result<()> {
    let store = open_store(dir);
    let mut stats = ValidationStats::default();

    let mut parts: Vec<MotorPart> = Vec::new();
    let mut assemblies: Vec<MotorAssembly> = Vec::new();
    let mut supplies: Vec<CastingSupply> = Vec::new();
    let mut reloads: Vec<MotorReload> = Vec::new();

    // Schema pass: every record must load against its type.
    for id in record_ids(dir, "motor-parts") {
        stats.records_checked += 1;
        match load_motor_part(&store, &id) {
            Ok(part) => parts.push(part),
            Err(e) => report_error(&mut stats, &format!("motor-parts/{}", id), &e),
        }
    }
    for id in record_ids(dir, "motor-assemblies") {
        stats.records_checked += 1;
        match load_motor_assembly(&store, &id) {
            Ok(asm) => assemblies.push(asm),
            Err(e) => report_error(&mut stats, &format!("motor-assemblies/{}", id), &e),
        }
    }
    for id in record_ids(dir, "casting-supplies") {
        stats.records_checked += 1;
        match load_casting_supply(&store, &id) {
            Ok(supply) => supplies.push(supply),
            Err(e) => report_error(&mut stats, &format!("casting-supplies/{}", id), &e),
        }
    }
    for id in record_ids(dir, "motor-reloads") {
        stats.records_checked += 1;
        match load_motor_reload(&store, &id) {
            Ok(reload) => reloads.push(reload),
            Err(e) => report_error(&mut stats, &format!("motor-reloads/{}", id), &e),
        }
    }

    // Reference pass over the records that loaded cleanly.
    let part_ids: BTreeSet<&str> = parts.iter().map(|p| p.part_id()).collect();
    let assembly_ids: BTreeSet<&str> = assemblies.iter().map(|a| a.assembly_id.as_str()).collect();
    let supply_ids: BTreeSet<&str> = supplies
        .iter()
        .map(|s| s.casting_supply_id.as_str())
        .collect();

    for asm in &assemblies {
        for part_ref in &asm.parts {
            if !part_ids.contains(part_ref.part_id.as_str()) {
                stats.total_errors += 1;
                println!(
                    "{} assembly `{}` references missing part `{}`",
                    style("✗").red(),
                    asm.assembly_id,
                    part_ref.part_id
                );
            }
        }
    }

    for reload in &reloads {
        if !assembly_ids.contains(reload.assembly_id.as_str()) {
            stats.total_errors += 1;
            println!(
                "{} reload `{}` references missing assembly `{}`",
                style("✗").red(),
                reload.motor_reload_id,
                reload.assembly_id
            );
        }
        for supply_id in reload.casting_supply_ids() {
            if !supply_ids.contains(supply_id) {
                stats.total_errors += 1;
                println!(
                    "{} reload `{}` references missing casting supply `{}`",
                    style("✗").red(),
                    reload.motor_reload_id,
                    supply_id
                );
            }
        }
        if reload.casting_tubes.grain_count != reload.grain_geometry.grain_count {
            stats.total_warnings += 1;
            println!(
                "{} reload `{}`: casting_tubes.grain_count ({}) disagrees with grain_geometry.grain_count ({})",
                style("!").yellow(),
                reload.motor_reload_id,
                reload.casting_tubes.grain_count,
                reload.grain_geometry.grain_count
            );
        }
    }

    println!(
        "\n{} {} record(s) checked, {} failed, {} error(s), {} warning(s)",
        style("→").blue(),
        stats.records_checked,
        stats.records_failed,
        stats.total_errors,
        stats.total_warnings
    );

    let failing = stats.total_errors > 0 || (args.strict && stats.total_warnings > 0);
    if failing {
        Err(miette::miette!("validation failed"))
    } else {
        println!("{} All records valid", style("✓").green().bold());
        Ok(())
    }
}

fn report_error(stats: &mut ValidationStats, key: &str, error: &dyn std::error::Error) {
    stats.records_failed += 1;
    stats.total_errors += 1;
    println!("{} {} - {}", style("✗").red(), key, error);
    // Show the underlying parse/validation detail when there is one.
    if let Some(source) = error.source() {
        println!("    {}", source);
    }
}
