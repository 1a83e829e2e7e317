//! Motor assembly entity - a buildable hardware stack
//!
//! An assembly names the parts in a specific stack (one case, closures, and
//! optionally a separate nozzle or retainer) by reference, plus caller-
//! computed geometry and mass rollups. Reloads are designed to fit a
//! particular assembly_id.

use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::error::ValidationError;
use crate::entities::common::{Ecosystem, MotorStandard, PartRole};

/// Reference to a motor part in an assembly
///
/// Does not embed the part details; those are loaded separately from
/// `motor-parts/` using part_id. Existence of the target is not checked
/// here - resolution is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyPartRef {
    /// Functional role of this part inside the assembly
    pub role: PartRole,

    /// ID of the motor part record (matches part_id in motor-parts)
    pub part_id: String,
}

/// Simplified geometry for a hardware assembly
///
/// Describes the usable space between shoulders and the recommended liner
/// and grain stack lengths. Detailed grain geometry lives with the motor
/// reload, not the assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackGeometry {
    /// Usable internal length of the case in inches
    pub case_usable_length_inch: f64,

    /// Forward shoulder intrusion into the case in inches
    pub forward_shoulder_length_inch: f64,

    /// Aft shoulder or nozzle shoulder intrusion in inches
    pub aft_shoulder_length_inch: f64,

    /// Length available for the liner between shoulders in inches
    pub available_liner_length_inch: f64,

    /// Recommended liner cut length for this assembly in inches
    pub recommended_liner_cut_length_inch: f64,

    /// Maximum total length available for the propellant grain stack
    pub maximum_grain_stack_length_inch: f64,

    /// Recommended total length of the grain stack
    pub recommended_grain_stack_length_inch: f64,

    /// Radial clearance between liner OD and case ID, in inches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liner_clearance_to_case_inch: Option<f64>,
}

/// Hardware mass roll-up for an assembly
///
/// Detailed per-part masses live in the part records; this is a convenient
/// summary for quick performance and handling estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareMassSummary {
    /// Total mass of all hardware in grams for this assembly
    pub total_hardware_mass_grams: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hardware_mass_ounces: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hardware_mass_pounds: Option<f64>,
}

/// A specific usable hardware stack
///
/// Examples: a 54 mm AMW long snap-ring assembly (case + forward closure +
/// integrated aft closure nozzle), or a 54 mm AT threaded assembly (case +
/// forward closure + nozzle + nozzle retainer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorAssembly {
    /// Unique ID for this assembly record
    pub assembly_id: String,

    /// Version tag, such as "v1"
    pub version: String,

    /// Human-readable name for this assembly
    pub display_name: String,

    /// Nominal motor standard label, such as "54mm"
    #[serde(default)]
    pub motor_standard: MotorStandard,

    /// Ecosystem(s) this assembly belongs to, such as ["AMW"]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ecosystem: Vec<Ecosystem>,

    /// Free-form notes about this assembly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Part references used in this assembly; must include a case
    pub parts: Vec<AssemblyPartRef>,

    /// Geometry for the usable space inside this assembly (caller-computed)
    pub stack_geometry: StackGeometry,

    /// Total hardware mass summary for this assembly (caller-computed)
    pub hardware_mass: HardwareMassSummary,
}

impl MotorAssembly {
    /// Create a new assembly, enforcing the case-presence invariant.
    ///
    /// The parts list is stored as given, order preserved. Additional rules
    /// (such as "only one case") can be added later without changing the
    /// external JSON shape.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        assembly_id: String,
        version: String,
        display_name: String,
        motor_standard: MotorStandard,
        ecosystem: Vec<Ecosystem>,
        parts: Vec<AssemblyPartRef>,
        stack_geometry: StackGeometry,
        hardware_mass: HardwareMassSummary,
    ) -> Result<Self, ValidationError> {
        let assembly = Self {
            assembly_id,
            version,
            display_name,
            motor_standard,
            ecosystem,
            notes: None,
            parts,
            stack_geometry,
            hardware_mass,
        };
        assembly.validate()?;
        Ok(assembly)
    }

    /// Part references carrying the given role, in stored order
    pub fn parts_with_role(&self, role: PartRole) -> impl Iterator<Item = &AssemblyPartRef> {
        self.parts.iter().filter(move |p| p.role == role)
    }
}

impl Record for MotorAssembly {
    const PREFIX: &'static str = "motor-assemblies";
    const KIND: &'static str = "motor assembly";

    fn record_id(&self) -> &str {
        &self.assembly_id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let has_case = self.parts.iter().any(|p| p.role == PartRole::Case);
        if !has_case {
            return Err(ValidationError::AssemblyMissingCase {
                assembly_id: self.assembly_id.clone(),
            });
        }
        Ok(())
    }
}
