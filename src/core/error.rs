//! Error taxonomy for model validation and storage
//!
//! `ValidationError` covers structural invariants on constructed entities.
//! `StoreError` covers everything that can go wrong mapping a (type, key)
//! pair to a stored record and back. Neither is ever recovered from
//! internally; callers decide how to surface them.

use thiserror::Error;

/// A constructed entity violates a required-field or structural invariant.
///
/// Raised at construction time (or when re-validating a deserialized
/// record), never at use time.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// An assembly was built without any part carrying role=case.
    #[error("assembly `{assembly_id}` must include at least one part with role=case")]
    AssemblyMissingCase { assembly_id: String },

    /// A part record's discriminant contradicts the concrete variant.
    #[error("part `{part_id}` declares part_type `{found}` but a {expected} part requires `{expected}`")]
    PartTypeMismatch {
        part_id: String,
        expected: &'static str,
        found: String,
    },

    /// A part carries a role that is fixed for its variant (case parts
    /// always have role=case).
    #[error("part `{part_id}` declares role `{found}` but a {variant} part requires role `{expected}`")]
    RoleMismatch {
        part_id: String,
        variant: &'static str,
        expected: &'static str,
        found: String,
    },

    /// An O-ring spec with a zero quantity makes no sense on a part.
    #[error("part `{part_id}`: o-ring at position `{position}` has quantity 0 (must be >= 1)")]
    ZeroQuantity { part_id: String, position: String },
}

/// A store operation failed.
///
/// The store never retries or backs off; retry policy belongs to the
/// caller or the backing-medium adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists at the requested key.
    #[error("no record found at key `{key}`")]
    NotFound { key: String },

    /// Backing content exists but does not parse against the requested type.
    #[error("record at `{key}` does not parse as {kind}")]
    Schema {
        key: String,
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Backing content parsed but violates a structural invariant.
    #[error("record at `{key}` failed validation")]
    Invalid {
        key: String,
        #[source]
        source: ValidationError,
    },

    /// The backing medium's I/O failed (permission, disk, ...).
    #[error("storage {operation} failed for key `{key}`")]
    Storage {
        key: String,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// The storage key the failed operation was addressed to.
    pub fn key(&self) -> &str {
        match self {
            StoreError::NotFound { key }
            | StoreError::Schema { key, .. }
            | StoreError::Invalid { key, .. }
            | StoreError::Storage { key, .. } => key,
        }
    }
}
