//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get an mdt command
pub fn mdt() -> Command {
    Command::new(cargo::cargo_bin!("mdt"))
}

/// Helper to create an initialized data directory in a temp dir
pub fn setup_data_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    mdt()
        .current_dir(tmp.path())
        .args(["--dir", "motor-data", "init"])
        .assert()
        .success();
    tmp
}

fn write_record(base: &Path, relative: &str, json: &str) {
    let path = base.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, json).unwrap();
}

/// Write a 54 mm AMW case part fixture and return its ID
pub fn write_sample_case(base: &Path) -> &'static str {
    write_record(
        base,
        "motor-parts/case_54mm_amw_long_v1.json",
        r#"{
  "part_id": "case_54mm_amw_long_v1",
  "part_type": "case",
  "role": "case",
  "version": "v1",
  "display_name": "AMW 54mm Long Case",
  "motor_standard": "54mm",
  "ecosystem": ["AMW"],
  "dimensions": {
    "inner_diameter_inch": 1.522,
    "outer_diameter_inch": 1.75,
    "overall_length_inch": 15.6,
    "usable_length_inch": 14.9
  },
  "retention": "snap-ring",
  "material": "6061-T6 Aluminum",
  "mass": {"total_grams": 210.0}
}"#,
    );
    "case_54mm_amw_long_v1"
}

/// Write a nozzle part fixture and return its ID
pub fn write_sample_nozzle(base: &Path) -> &'static str {
    write_record(
        base,
        "motor-parts/nozzle_54mm_amw_v1.json",
        r#"{
  "part_id": "nozzle_54mm_amw_v1",
  "part_type": "nozzle",
  "role": "aft_closure_nozzle",
  "version": "v1",
  "display_name": "AMW 54mm Nozzle",
  "motor_standard": "54mm",
  "nozzle_geometry": {
    "throat_diameter_inch": 0.452,
    "exit_diameter_inch": 0.98,
    "expansion_ratio": 4.7
  },
  "mass": {"total_grams": 118.0}
}"#,
    );
    "nozzle_54mm_amw_v1"
}

/// Write a forward closure fixture and return its ID
pub fn write_sample_closure(base: &Path) -> &'static str {
    write_record(
        base,
        "motor-parts/fwd_closure_54mm_amw_v1.json",
        r#"{
  "part_id": "fwd_closure_54mm_amw_v1",
  "part_type": "closure",
  "role": "forward_closure",
  "version": "v1",
  "display_name": "AMW 54mm Forward Closure",
  "motor_standard": "54mm",
  "shoulder": {
    "shoulder_length_inch": 0.55,
    "shoulder_outer_diameter_inch": 1.5
  },
  "mass": {"total_grams": 92.0}
}"#,
    );
    "fwd_closure_54mm_amw_v1"
}

/// Write an assembly referencing the sample parts and return its ID
pub fn write_sample_assembly(base: &Path) -> &'static str {
    write_record(
        base,
        "motor-assemblies/asm_54mm_amw_long_v1.json",
        r#"{
  "assembly_id": "asm_54mm_amw_long_v1",
  "version": "v1",
  "display_name": "AMW 54mm Long Snap-Ring",
  "motor_standard": "54mm",
  "ecosystem": ["AMW"],
  "parts": [
    {"role": "case", "part_id": "case_54mm_amw_long_v1"},
    {"role": "forward_closure", "part_id": "fwd_closure_54mm_amw_v1"},
    {"role": "aft_closure_nozzle", "part_id": "nozzle_54mm_amw_v1"}
  ],
  "stack_geometry": {
    "case_usable_length_inch": 14.9,
    "forward_shoulder_length_inch": 0.55,
    "aft_shoulder_length_inch": 0.85,
    "available_liner_length_inch": 13.5,
    "recommended_liner_cut_length_inch": 13.4,
    "maximum_grain_stack_length_inch": 13.2,
    "recommended_grain_stack_length_inch": 13.0
  },
  "hardware_mass": {"total_hardware_mass_grams": 420.0}
}"#,
    );
    "asm_54mm_amw_long_v1"
}

/// Write a liner casting supply fixture and return its ID
pub fn write_sample_liner(base: &Path) -> &'static str {
    write_record(
        base,
        "casting-supplies/liner_54mm_truecore_v1.json",
        r#"{
  "casting_supply_id": "liner_54mm_truecore_v1",
  "supply_type": "liner",
  "version": "v1",
  "display_name": "TrueCore 54mm Liner",
  "motor_standard": "54mm",
  "ecosystem": ["TrueCore"],
  "dimensions": {
    "inner_diameter_inch": 1.32,
    "outer_diameter_inch": 1.5
  },
  "stock_length_inch": 48.0,
  "pieces_in_inventory": 4
}"#,
    );
    "liner_54mm_truecore_v1"
}

/// Write a casting tube supply fixture and return its ID
pub fn write_sample_tube(base: &Path) -> &'static str {
    write_record(
        base,
        "casting-supplies/tube_54mm_paper_v1.json",
        r#"{
  "casting_supply_id": "tube_54mm_paper_v1",
  "supply_type": "casting_tube",
  "version": "v1",
  "display_name": "54mm Paper Casting Tube",
  "motor_standard": "54mm",
  "dimensions": {
    "inner_diameter_inch": 1.26,
    "outer_diameter_inch": 1.3
  },
  "stock_length_inch": 36.0
}"#,
    );
    "tube_54mm_paper_v1"
}

/// Write a reload referencing the sample assembly and supplies
pub fn write_sample_reload(base: &Path) -> &'static str {
    write_record(
        base,
        "motor-reloads/reload_54mm_amw_white_v1.json",
        r#"{
  "motor_reload_id": "reload_54mm_amw_white_v1",
  "version": "v1",
  "display_name": "54mm AMW White Clone",
  "assembly_id": "asm_54mm_amw_long_v1",
  "motor_standard": "54mm",
  "ecosystem": ["AMW"],
  "liner": {
    "casting_supply_id": "liner_54mm_truecore_v1",
    "cut_length_inch": 13.4
  },
  "casting_tubes": {
    "casting_supply_id": "tube_54mm_paper_v1",
    "grain_count": 4,
    "cut_length_per_grain_inch": 3.25,
    "total_casting_tube_length_inch": 13.0
  },
  "grain_geometry": {
    "grain_outer_diameter_inch": 1.3,
    "grain_core_diameter_inch": 0.5,
    "grain_length_inch": 3.25,
    "grain_count": 4
  }
}"#,
    );
    "reload_54mm_amw_white_v1"
}

/// Write the full coherent sample data set
pub fn write_sample_records(base: &Path) {
    write_sample_case(base);
    write_sample_nozzle(base);
    write_sample_closure(base);
    write_sample_assembly(base);
    write_sample_liner(base);
    write_sample_tube(base);
    write_sample_reload(base);
}
