//! Entity type definitions

pub mod assembly;
pub mod common;
pub mod part;
pub mod reload;
pub mod supply;

pub use assembly::{AssemblyPartRef, HardwareMassSummary, MotorAssembly, StackGeometry};
pub use common::{
    CastingSupplyType, Ecosystem, ExpansionProfile, LinearMass, Mass, MotorStandard,
    NozzleGeometry, ORingSpec, PartRole, PartType, RetentionStyle, Shoulder,
};
pub use part::{
    CaseDimensions, CasePart, ClosureFeatures, ClosurePart, MotorPart, NozzlePart,
};
pub use reload::{
    CastingTubeReloadInfo, GrainGeometry, IgniterConsumable, InhibitorConsumable,
    InsulationDiskConsumable, LinerReloadInfo, MotorReload, ORingConsumable,
    PerformanceEstimates, ReloadConsumables, ReloadMassBreakdown,
};
pub use supply::{CastingSupply, CastingSupplyDimensions};
