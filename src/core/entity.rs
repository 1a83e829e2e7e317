//! Record trait - common interface for all stored model types

use serde::{de::DeserializeOwned, Serialize};

use crate::core::error::ValidationError;

/// Common trait for every entity the store can load and save.
///
/// A record's storage key is a pure string transform of its ID: the fixed
/// per-kind subdirectory prefix plus the caller-assigned ID. IDs are opaque,
/// unique within their namespace, and immutable once created.
pub trait Record: Serialize + DeserializeOwned {
    /// Fixed storage subdirectory for this kind (e.g. "motor-parts")
    const PREFIX: &'static str;

    /// Human-readable kind name used in error messages
    const KIND: &'static str;

    /// Get the record's unique, caller-assigned ID
    fn record_id(&self) -> &str;

    /// Check structural invariants beyond what deserialization enforces.
    ///
    /// The store runs this after every load and before every save, so a
    /// record that round-trips through storage is always valid.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Storage key for a record of this kind with the given ID
    fn key_for(id: &str) -> String {
        format!("{}/{}", Self::PREFIX, id)
    }

    /// Storage key for this record
    fn key(&self) -> String {
        Self::key_for(self.record_id())
    }
}
