//! Pluggable persistence layer for motor records
//!
//! `ModelStore` is the single seam between the domain model and any backing
//! medium: two operations, one error taxonomy. `JsonFileStore` is the
//! file-backed implementation; an object-store-backed implementation only
//! needs to satisfy the same contract to be a drop-in replacement.
//!
//! Standard layout under a store's base:
//!
//! ```text
//! motor-data/
//!   motor-parts/
//!   motor-assemblies/
//!   casting-supplies/
//!   motor-reloads/
//! ```

pub mod fs;

pub use fs::JsonFileStore;

use crate::core::entity::Record;
use crate::core::error::StoreError;
use crate::entities::assembly::MotorAssembly;
use crate::entities::part::{CasePart, ClosurePart, MotorPart, NozzlePart};
use crate::entities::reload::MotorReload;
use crate::entities::supply::CastingSupply;

/// Minimal interface for loading and saving records.
///
/// Both operations are synchronous and stateless: each call either returns
/// fully or fails with a `StoreError`. The store performs no retries and
/// offers no ordering guarantee between independent calls; if two callers
/// save to the same key, the last write observed by the backing medium wins.
pub trait ModelStore {
    /// Load a record of type `T` identified by key.
    ///
    /// The interpretation of `key` depends on the implementation; the
    /// file-backed store treats it as a relative path under its base
    /// directory.
    fn load<T: Record>(&self, key: &str) -> Result<T, StoreError>;

    /// Save a record at key, creating or overwriting it.
    ///
    /// Idempotent: re-saving identical content produces an equivalent
    /// stored record.
    fn save<T: Record>(&self, record: &T, key: &str) -> Result<(), StoreError>;
}

/// Load a record by its ID, layering the kind's directory prefix onto it
pub fn load_record<T: Record, S: ModelStore>(store: &S, id: &str) -> Result<T, StoreError> {
    store.load(&T::key_for(id))
}

/// Save a record under its own ID and kind prefix
pub fn save_record<T: Record, S: ModelStore>(store: &S, record: &T) -> Result<(), StoreError> {
    store.save(record, &record.key())
}

/// Load any motor part by part_id, dispatching on its discriminant
pub fn load_motor_part<S: ModelStore>(store: &S, part_id: &str) -> Result<MotorPart, StoreError> {
    load_record(store, part_id)
}

/// Load a case part by part_id
pub fn load_case_part<S: ModelStore>(store: &S, part_id: &str) -> Result<CasePart, StoreError> {
    load_record(store, part_id)
}

/// Load a closure part by part_id
pub fn load_closure_part<S: ModelStore>(
    store: &S,
    part_id: &str,
) -> Result<ClosurePart, StoreError> {
    load_record(store, part_id)
}

/// Load a nozzle part by part_id
pub fn load_nozzle_part<S: ModelStore>(store: &S, part_id: &str) -> Result<NozzlePart, StoreError> {
    load_record(store, part_id)
}

/// Save any motor part under motor-parts/<part_id>
pub fn save_motor_part<S: ModelStore>(store: &S, part: &MotorPart) -> Result<(), StoreError> {
    save_record(store, part)
}

/// Load a motor assembly by assembly_id
pub fn load_motor_assembly<S: ModelStore>(
    store: &S,
    assembly_id: &str,
) -> Result<MotorAssembly, StoreError> {
    load_record(store, assembly_id)
}

/// Save a motor assembly under motor-assemblies/<assembly_id>
pub fn save_motor_assembly<S: ModelStore>(
    store: &S,
    assembly: &MotorAssembly,
) -> Result<(), StoreError> {
    save_record(store, assembly)
}

/// Load a casting supply by casting_supply_id
pub fn load_casting_supply<S: ModelStore>(
    store: &S,
    casting_supply_id: &str,
) -> Result<CastingSupply, StoreError> {
    load_record(store, casting_supply_id)
}

/// Save a casting supply under casting-supplies/<casting_supply_id>
pub fn save_casting_supply<S: ModelStore>(
    store: &S,
    supply: &CastingSupply,
) -> Result<(), StoreError> {
    save_record(store, supply)
}

/// Load a motor reload by motor_reload_id
pub fn load_motor_reload<S: ModelStore>(
    store: &S,
    motor_reload_id: &str,
) -> Result<MotorReload, StoreError> {
    load_record(store, motor_reload_id)
}

/// Save a motor reload under motor-reloads/<motor_reload_id>
pub fn save_motor_reload<S: ModelStore>(
    store: &S,
    reload: &MotorReload,
) -> Result<(), StoreError> {
    save_record(store, reload)
}
