//! Shared building blocks for motor records
//!
//! Closed enumerations and small value objects embedded by value in the
//! part, assembly, supply, and reload entities. Everything here is a pure
//! data container; construction only fails when a required field is absent
//! or an enum string is outside its closed set (both caught by serde).

use serde::{Deserialize, Serialize};

use crate::core::units;

/// Ecosystem or brand family a part or reload belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ecosystem {
    #[serde(rename = "AMW")]
    Amw,
    #[serde(rename = "AT")]
    At,
    #[serde(rename = "CTI")]
    Cti,
    #[serde(rename = "TrueCore")]
    TrueCore,
    #[serde(rename = "Other")]
    Other,
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Amw => write!(f, "AMW"),
            Ecosystem::At => write!(f, "AT"),
            Ecosystem::Cti => write!(f, "CTI"),
            Ecosystem::TrueCore => write!(f, "TrueCore"),
            Ecosystem::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Ecosystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amw" => Ok(Ecosystem::Amw),
            "at" => Ok(Ecosystem::At),
            "cti" => Ok(Ecosystem::Cti),
            "truecore" => Ok(Ecosystem::TrueCore),
            "other" => Ok(Ecosystem::Other),
            _ => Err(format!(
                "Invalid ecosystem: {}. Use AMW, AT, CTI, TrueCore, or Other",
                s
            )),
        }
    }
}

/// Nominal motor standard label (mostly marketing / ecosystem)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotorStandard {
    #[serde(rename = "54mm")]
    Mm54,
    #[serde(rename = "75mm")]
    Mm75,
    #[serde(rename = "98mm")]
    Mm98,
    #[serde(rename = "other")]
    #[default]
    Other,
}

impl std::fmt::Display for MotorStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotorStandard::Mm54 => write!(f, "54mm"),
            MotorStandard::Mm75 => write!(f, "75mm"),
            MotorStandard::Mm98 => write!(f, "98mm"),
            MotorStandard::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for MotorStandard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "54mm" | "54" => Ok(MotorStandard::Mm54),
            "75mm" | "75" => Ok(MotorStandard::Mm75),
            "98mm" | "98" => Ok(MotorStandard::Mm98),
            "other" => Ok(MotorStandard::Other),
            _ => Err(format!(
                "Invalid motor standard: {}. Use 54mm, 75mm, 98mm, or other",
                s
            )),
        }
    }
}

/// How the hardware is retained together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RetentionStyle {
    #[serde(rename = "snap-ring")]
    #[default]
    SnapRing,
    #[serde(rename = "threaded")]
    Threaded,
    #[serde(rename = "Frankenstein")]
    Frankenstein,
}

impl std::fmt::Display for RetentionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetentionStyle::SnapRing => write!(f, "snap-ring"),
            RetentionStyle::Threaded => write!(f, "threaded"),
            RetentionStyle::Frankenstein => write!(f, "Frankenstein"),
        }
    }
}

/// Nozzle expansion behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionProfile {
    #[default]
    Neutral,
    Tapered,
}

impl std::fmt::Display for ExpansionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpansionProfile::Neutral => write!(f, "neutral"),
            ExpansionProfile::Tapered => write!(f, "tapered"),
        }
    }
}

/// High-level classification of a motor part
///
/// Doubles as the discriminant when parsing stored part records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Case,
    Closure,
    Nozzle,
    #[default]
    Other,
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartType::Case => write!(f, "case"),
            PartType::Closure => write!(f, "closure"),
            PartType::Nozzle => write!(f, "nozzle"),
            PartType::Other => write!(f, "other"),
        }
    }
}

/// Functional role of a part inside an assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    Case,
    ForwardClosure,
    AftClosure,
    AftClosureNozzle,
    Nozzle,
    NozzleRetainer,
    #[default]
    Other,
}

impl std::fmt::Display for PartRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartRole::Case => write!(f, "case"),
            PartRole::ForwardClosure => write!(f, "forward_closure"),
            PartRole::AftClosure => write!(f, "aft_closure"),
            PartRole::AftClosureNozzle => write!(f, "aft_closure_nozzle"),
            PartRole::Nozzle => write!(f, "nozzle"),
            PartRole::NozzleRetainer => write!(f, "nozzle_retainer"),
            PartRole::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for PartRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "case" => Ok(PartRole::Case),
            "forward_closure" => Ok(PartRole::ForwardClosure),
            "aft_closure" => Ok(PartRole::AftClosure),
            "aft_closure_nozzle" => Ok(PartRole::AftClosureNozzle),
            "nozzle" => Ok(PartRole::Nozzle),
            "nozzle_retainer" => Ok(PartRole::NozzleRetainer),
            "other" => Ok(PartRole::Other),
            _ => Err(format!(
                "Invalid part role: {}. Use case, forward_closure, aft_closure, \
                 aft_closure_nozzle, nozzle, nozzle_retainer, or other",
                s
            )),
        }
    }
}

/// Type of casting supply in inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastingSupplyType {
    Liner,
    CastingTube,
    Other,
}

impl std::fmt::Display for CastingSupplyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CastingSupplyType::Liner => write!(f, "liner"),
            CastingSupplyType::CastingTube => write!(f, "casting_tube"),
            CastingSupplyType::Other => write!(f, "other"),
        }
    }
}

/// Mass in multiple units; grams are authoritative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    /// Total mass in grams
    pub total_grams: f64,

    /// Total mass in ounces (denormalized cache)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_ounces: Option<f64>,

    /// Total mass in pounds (denormalized cache)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pounds: Option<f64>,
}

impl Mass {
    /// A mass with only the authoritative gram field set
    pub fn from_grams(total_grams: f64) -> Self {
        Self {
            total_grams,
            total_ounces: None,
            total_pounds: None,
        }
    }

    /// A mass with the ounce and pound caches filled from the gram field
    pub fn with_unit_caches(total_grams: f64) -> Self {
        Self {
            total_grams,
            total_ounces: Some(units::grams_to_ounces(total_grams)),
            total_pounds: Some(units::grams_to_pounds(total_grams)),
        }
    }
}

/// Mass per unit length, useful for liners and casting tubes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearMass {
    /// Mass per inch in grams
    pub grams_per_inch: f64,

    /// Mass per inch in ounces (denormalized cache)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ounces_per_inch: Option<f64>,
}

impl LinearMass {
    pub fn from_grams_per_inch(grams_per_inch: f64) -> Self {
        Self {
            grams_per_inch,
            ounces_per_inch: None,
        }
    }
}

/// An O-ring and, optionally, its groove geometry on a part
///
/// Groove offsets allow spacing calculations when a part carries two seals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ORingSpec {
    /// Logical position label, e.g. "case_seal_inner" or "nozzle_seal"
    pub position: String,

    /// Vendor or AS568 O-ring part number
    pub part_number: String,

    /// Nominal O-ring cross-section in inches
    pub cross_section_inch: f64,

    /// Nominal inner diameter in inches
    pub inner_diameter_inch: f64,

    /// Number of O-rings of this spec used on the part (must be >= 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Material, e.g. "Viton", "Nitrile"
    pub material: String,

    /// Groove depth in inches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groove_depth_inch: Option<f64>,

    /// Groove width in inches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groove_width_inch: Option<f64>,

    /// Distance from a defined reference face to the groove center, in inches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groove_center_offset_inch: Option<f64>,
}

fn default_quantity() -> u32 {
    1
}

/// A shoulder that intrudes axially into the case or liner
///
/// The shoulder outer diameter should normally sit about 0.020 in under the
/// enclosing case inner diameter for clearance. That is guidance for the
/// person entering data, not an enforced rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoulder {
    /// Axial length of the shoulder in inches
    pub shoulder_length_inch: f64,

    /// Largest outer diameter of the shoulder in inches
    pub shoulder_outer_diameter_inch: f64,

    /// Axial length in millimeters (denormalized cache)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder_length_mm: Option<f64>,

    /// Largest outer diameter in millimeters (denormalized cache)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder_outer_diameter_mm: Option<f64>,
}

/// Core nozzle geometry parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NozzleGeometry {
    /// Nozzle throat diameter in inches
    pub throat_diameter_inch: f64,

    /// Nozzle exit diameter in inches
    pub exit_diameter_inch: f64,

    /// Nozzle expansion ratio
    pub expansion_ratio: f64,

    /// Expansion profile: neutral or tapered
    #[serde(default)]
    pub expansion_profile: ExpansionProfile,

    /// Throat diameter in millimeters (denormalized cache)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throat_diameter_mm: Option<f64>,

    /// Exit diameter in millimeters (denormalized cache)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_diameter_mm: Option<f64>,
}
