//! Motor reload entity - one buildable configuration
//!
//! A reload describes the liner and casting tube cuts drawn from casting
//! supplies, the grain geometry, the single-use consumables, and optional
//! performance/mass estimates, all for one assembly. The assembly and
//! supply references are soft: the reload stores the IDs and leaves
//! resolution to the caller.

use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::entities::common::{Ecosystem, MotorStandard};

/// Liner cut information for a specific reload
///
/// The liner itself comes from a casting supply record; this only records
/// which supply and how it is cut for this reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinerReloadInfo {
    /// ID of the liner casting supply used (from casting-supplies)
    pub casting_supply_id: String,

    /// Liner cut length in inches for this reload
    pub cut_length_inch: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cut_length_mm: Option<f64>,

    /// Number of liner pieces used per motor reload
    #[serde(default = "default_one")]
    pub pieces_per_motor: u32,
}

/// Casting tube cut information for a specific reload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastingTubeReloadInfo {
    /// ID of the casting tube casting supply used
    pub casting_supply_id: String,

    /// Number of grains in the reload
    pub grain_count: u32,

    /// Casting tube length per grain in inches
    pub cut_length_per_grain_inch: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cut_length_per_grain_mm: Option<f64>,

    /// Total casting tube length used for this reload, in inches
    pub total_casting_tube_length_inch: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_casting_tube_length_mm: Option<f64>,
}

/// Grain geometry for a specific reload
///
/// Tightly coupled to the propellant and the assembly envelope; a later
/// home for BATES and other grain shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrainGeometry {
    /// Grain outer diameter in inches
    pub grain_outer_diameter_inch: f64,

    /// Grain core diameter in inches
    pub grain_core_diameter_inch: f64,

    /// Individual grain length in inches
    pub grain_length_inch: f64,

    /// Number of grains used in the reload
    pub grain_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain_outer_diameter_mm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain_core_diameter_mm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain_length_mm: Option<f64>,

    /// Web thickness in inches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_thickness_inch: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_thickness_mm: Option<f64>,
}

/// Single-use O-ring requirement for a reload
///
/// Focused on consumption of specific part numbers; no groove geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ORingConsumable {
    /// O-ring part number, for example an AS568 designation
    pub part_number: String,

    /// Usage context, such as "forward_closure_case_seal"
    pub application: String,

    /// Quantity of this O-ring consumed per motor reload
    pub quantity_per_motor: u32,

    /// Material, such as "Viton"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_cross_section_inch: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_inner_diameter_inch: Option<f64>,
}

/// An inhibitor used in a reload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InhibitorConsumable {
    /// Type of inhibitor, for example "end_grain_cardboard"
    pub inhibitor_type: String,

    /// Inhibitor thickness in inches
    pub thickness_inch: f64,

    /// Number of inhibitor pieces used per motor
    pub quantity_per_motor: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_mm: Option<f64>,

    /// Usage notes or additional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An insulation disk used in a reload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsulationDiskConsumable {
    /// Location, for example "forward_bulkhead"
    pub disk_location: String,

    /// Material, such as "Fiber"
    pub material: String,

    /// Disk thickness in inches
    pub thickness_inch: f64,

    /// Number of disks used per motor
    pub quantity_per_motor: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_mm: Option<f64>,
}

/// An igniter configuration for a reload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgniterConsumable {
    /// Type, for example "electric_match_with_booster"
    pub igniter_type: String,

    /// Lead length in inches
    pub lead_length_inch: f64,

    /// Number of igniters used per motor
    pub quantity_per_motor: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_length_mm: Option<f64>,
}

/// All single-use components required to build one reload
///
/// The shopping/build list for one load, separate from the persistent
/// hardware and casting supply definitions. A reload still being specified
/// legitimately has none, so every list defaults to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReloadConsumables {
    /// O-rings consumed by this reload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub o_rings_single_use: Vec<ORingConsumable>,

    /// Inhibitors used in this reload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inhibitors: Vec<InhibitorConsumable>,

    /// Insulation disks used in this reload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insulation_disks: Vec<InsulationDiskConsumable>,

    /// Igniters used in this reload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub igniters: Vec<IgniterConsumable>,
}

/// Approximate performance estimates for a reload configuration
///
/// Stored, never computed here; refine with simulation elsewhere.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceEstimates {
    /// Estimated initial Kn (dimensionless)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_kn: Option<f64>,

    /// Estimated maximum Kn (dimensionless)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_kn: Option<f64>,

    /// Estimated peak chamber pressure in psi
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_peak_pressure_psi: Option<f64>,

    /// Estimated average chamber pressure in psi
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_average_pressure_psi: Option<f64>,

    /// Estimated specific impulse in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_isp_seconds: Option<f64>,

    /// Estimated total impulse in newton-seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_total_impulse_newton_second: Option<f64>,

    /// Estimated chamber residence time in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chamber_residence_time_milliseconds: Option<f64>,
}

/// Mass breakdown for a loaded motor using this reload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReloadMassBreakdown {
    /// Hardware mass in grams (from the assembly)
    pub hardware_mass_grams: f64,

    /// Propellant mass in grams
    pub propellant_mass_grams: f64,

    /// Total loaded motor mass in grams
    pub total_loaded_mass_grams: f64,

    /// Mass of liner and casting tube in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liner_and_tube_mass_grams: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_loaded_mass_ounces: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_loaded_mass_pounds: Option<f64>,
}

/// A motor reload (liner + grains + expendables) designed to fit a
/// specific hardware assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorReload {
    /// Unique ID for this motor reload record
    pub motor_reload_id: String,

    /// Version tag, such as "v1"
    pub version: String,

    /// Human-readable name for this reload
    pub display_name: String,

    /// ID of the motor assembly this reload is designed to fit
    pub assembly_id: String,

    /// Nominal motor standard label, such as "54mm"
    #[serde(default)]
    pub motor_standard: MotorStandard,

    /// Ecosystem(s) this reload belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ecosystem: Vec<Ecosystem>,

    /// ID of the propellant formulation used, if tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propellant_id: Option<String>,

    /// Free-form notes for this reload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Liner cut information for this reload
    pub liner: LinerReloadInfo,

    /// Casting tube cut information for this reload
    pub casting_tubes: CastingTubeReloadInfo,

    /// Grain geometry for this reload
    pub grain_geometry: GrainGeometry,

    /// Single-use components required for one reload
    #[serde(default)]
    pub consumables: ReloadConsumables,

    /// Performance estimates for this reload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_estimates: Option<PerformanceEstimates>,

    /// Mass breakdown for this reload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_breakdown: Option<ReloadMassBreakdown>,
}

fn default_one() -> u32 {
    1
}

impl MotorReload {
    /// Casting supply IDs this reload draws from (liner first, then tubes)
    pub fn casting_supply_ids(&self) -> [&str; 2] {
        [
            self.liner.casting_supply_id.as_str(),
            self.casting_tubes.casting_supply_id.as_str(),
        ]
    }
}

impl Record for MotorReload {
    const PREFIX: &'static str = "motor-reloads";
    const KIND: &'static str = "motor reload";

    fn record_id(&self) -> &str {
        &self.motor_reload_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reload_json() -> String {
        r#"{
            "motor_reload_id": "reload_54mm_amw_white_v1",
            "version": "v1",
            "display_name": "54mm AMW White Lightning Clone",
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
        }"#
        .to_string()
    }

    #[test]
    fn test_consumables_default_to_empty_lists() {
        let reload: MotorReload = serde_json::from_str(&sample_reload_json()).unwrap();
        assert!(reload.consumables.o_rings_single_use.is_empty());
        assert!(reload.consumables.inhibitors.is_empty());
        assert!(reload.consumables.insulation_disks.is_empty());
        assert!(reload.consumables.igniters.is_empty());
    }

    #[test]
    fn test_liner_pieces_default_to_one() {
        let reload: MotorReload = serde_json::from_str(&sample_reload_json()).unwrap();
        assert_eq!(reload.liner.pieces_per_motor, 1);
    }

    #[test]
    fn test_optional_estimate_blocks_absent() {
        let reload: MotorReload = serde_json::from_str(&sample_reload_json()).unwrap();
        assert!(reload.performance_estimates.is_none());
        assert!(reload.mass_breakdown.is_none());

        let json = serde_json::to_string(&reload).unwrap();
        assert!(!json.contains("performance_estimates"));
        assert!(!json.contains("mass_breakdown"));
    }

    #[test]
    fn test_reload_round_trip() {
        let mut reload: MotorReload = serde_json::from_str(&sample_reload_json()).unwrap();
        reload.consumables.igniters.push(IgniterConsumable {
            igniter_type: "electric_match_with_booster".to_string(),
            lead_length_inch: 36.0,
            quantity_per_motor: 1,
            lead_length_mm: None,
        });
        reload.performance_estimates = Some(PerformanceEstimates {
            initial_kn: Some(210.0),
            ..Default::default()
        });

        let json = serde_json::to_string_pretty(&reload).unwrap();
        let parsed: MotorReload = serde_json::from_str(&json).unwrap();
        assert_eq!(reload, parsed);
    }

    #[test]
    fn test_casting_supply_ids_order() {
        let reload: MotorReload = serde_json::from_str(&sample_reload_json()).unwrap();
        assert_eq!(
            reload.casting_supply_ids(),
            ["liner_54mm_truecore_v1", "tube_54mm_paper_v1"]
        );
    }

    #[test]
    fn test_missing_assembly_id_fails_parse() {
        let json = r#"{
            "motor_reload_id": "reload_bad",
            "version": "v1",
            "display_name": "No Assembly",
            "liner": {"casting_supply_id": "l1", "cut_length_inch": 1.0},
            "casting_tubes": {
                "casting_supply_id": "t1",
                "grain_count": 1,
                "cut_length_per_grain_inch": 1.0,
                "total_casting_tube_length_inch": 1.0
            },
            "grain_geometry": {
                "grain_outer_diameter_inch": 1.0,
                "grain_core_diameter_inch": 0.4,
                "grain_length_inch": 1.0,
                "grain_count": 1
            }
        }"#;
        let result: Result<MotorReload, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
