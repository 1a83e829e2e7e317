//! Casting supply entity - uncut stock inventory
//!
//! A casting supply describes generic stock (liner sticks, casting tube
//! sticks) that multiple reloads can draw from. It is not tied to any
//! specific build; reloads reference it through casting_supply_id.

use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::entities::common::{CastingSupplyType, Ecosystem, LinearMass, Mass, MotorStandard};

/// Dimensions for liner or casting tube stock (inch-first)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastingSupplyDimensions {
    /// Inner diameter in inches
    pub inner_diameter_inch: f64,

    /// Outer diameter in inches
    pub outer_diameter_inch: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_diameter_mm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_diameter_mm: Option<f64>,
}

/// Stock casting supply item, such as a TrueCore 54 mm liner stick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastingSupply {
    /// Unique ID for this casting supply record
    pub casting_supply_id: String,

    /// Type of supply, such as liner or casting_tube
    pub supply_type: CastingSupplyType,

    /// Version tag, such as "v1"
    pub version: String,

    /// Human-readable name for this supply item
    pub display_name: String,

    /// Nominal motor standard label, such as "54mm"
    #[serde(default)]
    pub motor_standard: MotorStandard,

    /// Ecosystem(s) that typically use this supply
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ecosystem: Vec<Ecosystem>,

    /// Vendor or brand ID, such as "TrueCore"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,

    /// Full vendor or brand name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,

    /// Free-form notes about this supply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub dimensions: CastingSupplyDimensions,

    /// Length of each stock piece in inches
    pub stock_length_inch: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_length_mm: Option<f64>,

    /// Mass of one full stock piece
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<Mass>,

    /// Mass per inch of this supply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear_mass: Option<LinearMass>,

    /// Count of stock pieces currently on hand. Advisory only: nothing
    /// decrements this when a reload consumes stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pieces_in_inventory: Option<u32>,
}

impl CastingSupply {
    pub fn new(
        casting_supply_id: String,
        supply_type: CastingSupplyType,
        version: String,
        display_name: String,
        dimensions: CastingSupplyDimensions,
        stock_length_inch: f64,
    ) -> Self {
        Self {
            casting_supply_id,
            supply_type,
            version,
            display_name,
            motor_standard: MotorStandard::default(),
            ecosystem: Vec::new(),
            vendor_id: None,
            vendor_name: None,
            notes: None,
            dimensions,
            stock_length_inch,
            stock_length_mm: None,
            mass: None,
            linear_mass: None,
            pieces_in_inventory: None,
        }
    }
}

impl Record for CastingSupply {
    const PREFIX: &'static str = "casting-supplies";
    const KIND: &'static str = "casting supply";

    fn record_id(&self) -> &str {
        &self.casting_supply_id
    }
}
