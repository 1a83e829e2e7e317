//! Motor part entities - case, closure, and nozzle records
//!
//! The three variants share a common set of base fields but carry different
//! type-specific shapes, and all live together under `motor-parts/`. Stored
//! JSON is therefore parsed in two phases: sniff the `part_type` discriminant
//! from a generic value, then strict-parse against the matching concrete
//! schema. `MotorPart` wraps that dispatch in a single `Deserialize` impl.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::entity::Record;
use crate::core::error::ValidationError;
use crate::entities::common::{
    Ecosystem, Mass, MotorStandard, NozzleGeometry, ORingSpec, PartRole, PartType,
    RetentionStyle, Shoulder,
};

/// Dimensions specific to a case body (inch-first, mm fields are caches)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDimensions {
    /// Case inner diameter in inches
    pub inner_diameter_inch: f64,

    /// Case outer diameter in inches
    pub outer_diameter_inch: f64,

    /// Total case length in inches, including any end features
    pub overall_length_inch: f64,

    /// Usable internal length for liner and propellant, in inches
    pub usable_length_inch: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_diameter_mm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_diameter_mm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_length_mm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usable_length_mm: Option<f64>,
}

/// A specific motor case (tube) part, e.g. a 54 mm AMW long snap-ring case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasePart {
    /// Unique ID for this part record
    pub part_id: String,

    /// Always `case` for a case part; acts as the storage discriminant
    #[serde(default = "case_part_type")]
    pub part_type: PartType,

    /// Always `case`; a case cannot play another role in an assembly
    #[serde(default = "case_role")]
    pub role: PartRole,

    /// Version tag, e.g. "v1"
    pub version: String,

    /// Human-readable name for this part
    pub display_name: String,

    /// Nominal motor standard label, such as "54mm"
    #[serde(default)]
    pub motor_standard: MotorStandard,

    /// Ecosystem(s) or brand families this part belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ecosystem: Vec<Ecosystem>,

    /// Short manufacturer or vendor ID, such as "AMW"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<String>,

    /// Full manufacturer or brand name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub dimensions: CaseDimensions,

    /// Retention style, such as snap-ring or threaded
    #[serde(default)]
    pub retention: RetentionStyle,

    /// Material description, such as "6061-T6 Aluminum"
    pub material: String,

    /// Maximum recommended operating pressure in psi
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_operating_pressure_psi: Option<f64>,

    pub mass: Mass,
}

fn case_part_type() -> PartType {
    PartType::Case
}

fn case_role() -> PartRole {
    PartRole::Case
}

impl CasePart {
    /// Create a new case part with the discriminant fields fixed
    pub fn new(
        part_id: String,
        version: String,
        display_name: String,
        dimensions: CaseDimensions,
        material: String,
        mass: Mass,
    ) -> Self {
        Self {
            part_id,
            part_type: PartType::Case,
            role: PartRole::Case,
            version,
            display_name,
            motor_standard: MotorStandard::default(),
            ecosystem: Vec::new(),
            manufacturer_id: None,
            manufacturer_name: None,
            notes: None,
            dimensions,
            retention: RetentionStyle::default(),
            material,
            max_operating_pressure_psi: None,
            mass,
        }
    }
}

impl Record for CasePart {
    const PREFIX: &'static str = "motor-parts";
    const KIND: &'static str = "case part";

    fn record_id(&self) -> &str {
        &self.part_id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.part_type != PartType::Case {
            return Err(ValidationError::PartTypeMismatch {
                part_id: self.part_id.clone(),
                expected: "case",
                found: self.part_type.to_string(),
            });
        }
        if self.role != PartRole::Case {
            return Err(ValidationError::RoleMismatch {
                part_id: self.part_id.clone(),
                variant: "case",
                expected: "case",
                found: self.role.to_string(),
            });
        }
        Ok(())
    }
}

/// Flags describing functional features on a closure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClosureFeatures {
    /// True if the closure has threading for a recovery harness
    #[serde(default)]
    pub has_recovery_thread: bool,

    /// Thread size for the recovery attachment, such as "3/8-16"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_thread_size: Option<String>,

    /// True if the closure includes a pressure gauge port
    #[serde(default)]
    pub has_pressure_port: bool,

    /// Thread size for the pressure port, such as "1/8 NPT"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_port_thread_size: Option<String>,

    /// True if the closure includes a head-end ignition port
    #[serde(default)]
    pub has_head_end_ignition: bool,

    /// Thread size for the head-end ignition port, such as "8-32"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_end_ignition_thread_size: Option<String>,
}

/// A closure component: forward closure, threaded aft closure, or a nozzle
/// retainer on commercial hardware
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosurePart {
    /// Unique ID for this part record
    pub part_id: String,

    /// Always `closure` for a closure part
    #[serde(default = "closure_part_type")]
    pub part_type: PartType,

    /// Functional role inside an assembly (forward_closure, aft_closure, ...)
    #[serde(default)]
    pub role: PartRole,

    /// Version tag, e.g. "v1"
    pub version: String,

    /// Human-readable name for this part
    pub display_name: String,

    /// Nominal motor standard label, such as "54mm"
    #[serde(default)]
    pub motor_standard: MotorStandard,

    /// Ecosystem(s) or brand families this part belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ecosystem: Vec<Ecosystem>,

    /// Short manufacturer or vendor ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<String>,

    /// Full manufacturer or brand name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Shoulder geometry if this closure intrudes into the case or liner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder: Option<Shoulder>,

    pub mass: Mass,

    /// Any O-rings used on this closure
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub o_rings: Vec<ORingSpec>,

    /// Optional feature flags for this closure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<ClosureFeatures>,
}

fn closure_part_type() -> PartType {
    PartType::Closure
}

impl ClosurePart {
    pub fn new(
        part_id: String,
        version: String,
        display_name: String,
        role: PartRole,
        mass: Mass,
    ) -> Self {
        Self {
            part_id,
            part_type: PartType::Closure,
            role,
            version,
            display_name,
            motor_standard: MotorStandard::default(),
            ecosystem: Vec::new(),
            manufacturer_id: None,
            manufacturer_name: None,
            notes: None,
            shoulder: None,
            mass,
            o_rings: Vec::new(),
            features: None,
        }
    }
}

impl Record for ClosurePart {
    const PREFIX: &'static str = "motor-parts";
    const KIND: &'static str = "closure part";

    fn record_id(&self) -> &str {
        &self.part_id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.part_type != PartType::Closure {
            return Err(ValidationError::PartTypeMismatch {
                part_id: self.part_id.clone(),
                expected: "closure",
                found: self.part_type.to_string(),
            });
        }
        validate_o_rings(&self.part_id, &self.o_rings)
    }
}

/// A nozzle part
///
/// On snap-ring AMW-style motors this may also serve as the aft closure,
/// with role set to `aft_closure_nozzle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NozzlePart {
    /// Unique ID for this part record
    pub part_id: String,

    /// Always `nozzle` for a nozzle part
    #[serde(default = "nozzle_part_type")]
    pub part_type: PartType,

    /// Functional role inside an assembly
    #[serde(default)]
    pub role: PartRole,

    /// Version tag, e.g. "v1"
    pub version: String,

    /// Human-readable name for this part
    pub display_name: String,

    /// Nominal motor standard label, such as "54mm"
    #[serde(default)]
    pub motor_standard: MotorStandard,

    /// Ecosystem(s) or brand families this part belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ecosystem: Vec<Ecosystem>,

    /// Short manufacturer or vendor ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<String>,

    /// Full manufacturer or brand name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Core nozzle geometry (throat, exit, expansion)
    pub nozzle_geometry: NozzleGeometry,

    /// Shoulder geometry if the nozzle intrudes into the case or liner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder: Option<Shoulder>,

    pub mass: Mass,

    /// Any O-rings associated with this nozzle or its shoulder
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub o_rings: Vec<ORingSpec>,
}

fn nozzle_part_type() -> PartType {
    PartType::Nozzle
}

impl NozzlePart {
    pub fn new(
        part_id: String,
        version: String,
        display_name: String,
        role: PartRole,
        nozzle_geometry: NozzleGeometry,
        mass: Mass,
    ) -> Self {
        Self {
            part_id,
            part_type: PartType::Nozzle,
            role,
            version,
            display_name,
            motor_standard: MotorStandard::default(),
            ecosystem: Vec::new(),
            manufacturer_id: None,
            manufacturer_name: None,
            notes: None,
            nozzle_geometry,
            shoulder: None,
            mass,
            o_rings: Vec::new(),
        }
    }
}

impl Record for NozzlePart {
    const PREFIX: &'static str = "motor-parts";
    const KIND: &'static str = "nozzle part";

    fn record_id(&self) -> &str {
        &self.part_id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.part_type != PartType::Nozzle {
            return Err(ValidationError::PartTypeMismatch {
                part_id: self.part_id.clone(),
                expected: "nozzle",
                found: self.part_type.to_string(),
            });
        }
        validate_o_rings(&self.part_id, &self.o_rings)
    }
}

fn validate_o_rings(part_id: &str, o_rings: &[ORingSpec]) -> Result<(), ValidationError> {
    for spec in o_rings {
        if spec.quantity == 0 {
            return Err(ValidationError::ZeroQuantity {
                part_id: part_id.to_string(),
                position: spec.position.clone(),
            });
        }
    }
    Ok(())
}

/// Any motor part, discriminated by its `part_type` field
///
/// Deserialization sniffs the discriminant from a generic JSON value and
/// then strict-parses the matching concrete schema, so heterogeneous part
/// records can live in one flat `motor-parts/` directory.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorPart {
    Case(CasePart),
    Closure(ClosurePart),
    Nozzle(NozzlePart),
}

impl MotorPart {
    pub fn part_id(&self) -> &str {
        match self {
            MotorPart::Case(p) => &p.part_id,
            MotorPart::Closure(p) => &p.part_id,
            MotorPart::Nozzle(p) => &p.part_id,
        }
    }

    pub fn part_type(&self) -> PartType {
        match self {
            MotorPart::Case(_) => PartType::Case,
            MotorPart::Closure(_) => PartType::Closure,
            MotorPart::Nozzle(_) => PartType::Nozzle,
        }
    }

    pub fn role(&self) -> PartRole {
        match self {
            MotorPart::Case(p) => p.role,
            MotorPart::Closure(p) => p.role,
            MotorPart::Nozzle(p) => p.role,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            MotorPart::Case(p) => &p.display_name,
            MotorPart::Closure(p) => &p.display_name,
            MotorPart::Nozzle(p) => &p.display_name,
        }
    }

    pub fn motor_standard(&self) -> MotorStandard {
        match self {
            MotorPart::Case(p) => p.motor_standard,
            MotorPart::Closure(p) => p.motor_standard,
            MotorPart::Nozzle(p) => p.motor_standard,
        }
    }

    pub fn mass(&self) -> &Mass {
        match self {
            MotorPart::Case(p) => &p.mass,
            MotorPart::Closure(p) => &p.mass,
            MotorPart::Nozzle(p) => &p.mass,
        }
    }
}

impl Serialize for MotorPart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MotorPart::Case(p) => p.serialize(serializer),
            MotorPart::Closure(p) => p.serialize(serializer),
            MotorPart::Nozzle(p) => p.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for MotorPart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Phase one: read the record generically to inspect the discriminant.
        let value = serde_json::Value::deserialize(deserializer)?;
        let part_type = value
            .get("part_type")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("other");

        // Phase two: strict-parse against the concrete schema.
        match part_type {
            "case" => CasePart::deserialize(&value)
                .map(MotorPart::Case)
                .map_err(DeError::custom),
            "closure" => ClosurePart::deserialize(&value)
                .map(MotorPart::Closure)
                .map_err(DeError::custom),
            "nozzle" => NozzlePart::deserialize(&value)
                .map(MotorPart::Nozzle)
                .map_err(DeError::custom),
            other => Err(DeError::custom(format!(
                "unsupported part_type `{}`: expected case, closure, or nozzle",
                other
            ))),
        }
    }
}

impl Record for MotorPart {
    const PREFIX: &'static str = "motor-parts";
    const KIND: &'static str = "motor part";

    fn record_id(&self) -> &str {
        self.part_id()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            MotorPart::Case(p) => p.validate(),
            MotorPart::Closure(p) => p.validate(),
            MotorPart::Nozzle(p) => p.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::common::ExpansionProfile;

    fn sample_case() -> CasePart {
        CasePart::new(
            "case_54mm_amw_long_v1".to_string(),
            "v1".to_string(),
            "AMW 54mm Long Case".to_string(),
            CaseDimensions {
                inner_diameter_inch: 1.522,
                outer_diameter_inch: 1.75,
                overall_length_inch: 15.6,
                usable_length_inch: 14.9,
                inner_diameter_mm: None,
                outer_diameter_mm: None,
                overall_length_mm: None,
                usable_length_mm: None,
            },
            "6061-T6 Aluminum".to_string(),
            Mass::from_grams(210.0),
        )
    }

    fn sample_nozzle() -> NozzlePart {
        NozzlePart::new(
            "nozzle_54mm_amw_v1".to_string(),
            "v1".to_string(),
            "AMW 54mm Nozzle".to_string(),
            PartRole::AftClosureNozzle,
            NozzleGeometry {
                throat_diameter_inch: 0.452,
                exit_diameter_inch: 0.98,
                expansion_ratio: 4.7,
                expansion_profile: ExpansionProfile::Neutral,
                throat_diameter_mm: None,
                exit_diameter_mm: None,
            },
            Mass::from_grams(118.0),
        )
    }

    #[test]
    fn test_case_part_discriminants_fixed() {
        let case = sample_case();
        assert_eq!(case.part_type, PartType::Case);
        assert_eq!(case.role, PartRole::Case);
        assert!(case.validate().is_ok());
    }

    #[test]
    fn test_case_part_rejects_foreign_role() {
        let mut case = sample_case();
        case.role = PartRole::ForwardClosure;
        let err = case.validate().unwrap_err();
        assert!(matches!(err, ValidationError::RoleMismatch { .. }));
    }

    #[test]
    fn test_case_part_rejects_foreign_part_type() {
        let mut case = sample_case();
        case.part_type = PartType::Nozzle;
        let err = case.validate().unwrap_err();
        assert!(matches!(err, ValidationError::PartTypeMismatch { .. }));
    }

    #[test]
    fn test_case_round_trip_preserves_fields() {
        let case = sample_case();
        let json = serde_json::to_string_pretty(&case).unwrap();
        let parsed: CasePart = serde_json::from_str(&json).unwrap();
        assert_eq!(case, parsed);
    }

    #[test]
    fn test_motor_part_sniffs_case_discriminant() {
        let json = serde_json::to_string(&sample_case()).unwrap();
        let part: MotorPart = serde_json::from_str(&json).unwrap();
        assert!(matches!(part, MotorPart::Case(_)));
        assert_eq!(part.part_id(), "case_54mm_amw_long_v1");
    }

    #[test]
    fn test_motor_part_sniffs_nozzle_discriminant() {
        let json = serde_json::to_string(&sample_nozzle()).unwrap();
        let part: MotorPart = serde_json::from_str(&json).unwrap();
        assert!(matches!(part, MotorPart::Nozzle(_)));
        assert_eq!(part.role(), PartRole::AftClosureNozzle);
    }

    #[test]
    fn test_nozzle_json_fails_to_parse_as_case() {
        // A nozzle record has no case dimensions, so the strict parse
        // against the case schema must fail.
        let json = serde_json::to_string(&sample_nozzle()).unwrap();
        let result: Result<CasePart, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_motor_part_rejects_unknown_discriminant() {
        let json = r#"{"part_id": "p1", "part_type": "spacer"}"#;
        let result: Result<MotorPart, _> = serde_json::from_str(json);
        assert!(result.unwrap_err().to_string().contains("part_type"));
    }

    #[test]
    fn test_motor_part_serializes_as_inner_variant() {
        let part = MotorPart::Nozzle(sample_nozzle());
        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("\"part_type\":\"nozzle\""));
        assert!(json.contains("nozzle_geometry"));
    }

    #[test]
    fn test_zero_quantity_o_ring_rejected() {
        let mut nozzle = sample_nozzle();
        nozzle.o_rings.push(ORingSpec {
            position: "nozzle_seal".to_string(),
            part_number: "AS568-224".to_string(),
            cross_section_inch: 0.139,
            inner_diameter_inch: 1.734,
            quantity: 0,
            material: "Viton".to_string(),
            groove_depth_inch: None,
            groove_width_inch: None,
            groove_center_offset_inch: None,
        });
        let err = nozzle.validate().unwrap_err();
        assert!(matches!(err, ValidationError::ZeroQuantity { .. }));
    }
}
