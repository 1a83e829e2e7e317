//! File-backed store implementation
//!
//! One pretty-printed JSON document per record under a base directory.
//! Keys are relative paths; a `.json` suffix is appended when absent, so
//! `motor-parts/case1` and `motor-parts/case1.json` address the same
//! record. The store assumes exclusive ownership of its subtree and does
//! no locking.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::entity::Record;
use crate::core::error::StoreError;
use crate::store::ModelStore;

/// Local filesystem implementation of `ModelStore`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Whether a record exists at the given key
    pub fn exists(&self, key: &str) -> bool {
        self.resolve(key).is_file()
    }

    /// Turn a relative key into a filesystem path under the base directory
    fn resolve(&self, key: &str) -> PathBuf {
        if key.ends_with(".json") {
            self.base_dir.join(key)
        } else {
            self.base_dir.join(format!("{}.json", key))
        }
    }
}

impl ModelStore for JsonFileStore {
    fn load<T: Record>(&self, key: &str) -> Result<T, StoreError> {
        let path = self.resolve(key);

        let raw = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StoreError::Storage {
                    key: key.to_string(),
                    operation: "read",
                    source: e,
                }
            }
        })?;

        let record: T = serde_json::from_str(&raw).map_err(|e| StoreError::Schema {
            key: key.to_string(),
            kind: T::KIND,
            source: e,
        })?;

        record.validate().map_err(|e| StoreError::Invalid {
            key: key.to_string(),
            source: e,
        })?;

        Ok(record)
    }

    fn save<T: Record>(&self, record: &T, key: &str) -> Result<(), StoreError> {
        record.validate().map_err(|e| StoreError::Invalid {
            key: key.to_string(),
            source: e,
        })?;

        let path = self.resolve(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Storage {
                key: key.to_string(),
                operation: "create directories",
                source: e,
            })?;
        }

        // serde_json pretty-prints with 2-space indent, matching the
        // stored record layout.
        let mut json = serde_json::to_string_pretty(record).map_err(|e| StoreError::Schema {
            key: key.to_string(),
            kind: T::KIND,
            source: e,
        })?;
        json.push('\n');

        fs::write(&path, json).map_err(|e| StoreError::Storage {
            key: key.to_string(),
            operation: "write",
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::common::{CastingSupplyType, Mass, MotorStandard};
    use crate::entities::supply::{CastingSupply, CastingSupplyDimensions};
    use tempfile::tempdir;

    fn sample_supply(id: &str) -> CastingSupply {
        CastingSupply::new(
            id.to_string(),
            CastingSupplyType::Liner,
            "v1".to_string(),
            "Test Liner".to_string(),
            CastingSupplyDimensions {
                inner_diameter_inch: 1.32,
                outer_diameter_inch: 1.5,
                inner_diameter_mm: None,
                outer_diameter_mm: None,
            },
            48.0,
        )
    }

    #[test]
    fn test_key_normalization_addresses_same_record() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let supply = sample_supply("liner1");

        store.save(&supply, "casting-supplies/liner1").unwrap();

        let via_plain: CastingSupply = store.load("casting-supplies/liner1").unwrap();
        let via_suffixed: CastingSupply = store.load("casting-supplies/liner1.json").unwrap();
        assert_eq!(via_plain, via_suffixed);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("motor-data"));
        store
            .save(&sample_supply("liner2"), "casting-supplies/liner2")
            .unwrap();

        assert!(dir
            .path()
            .join("motor-data/casting-supplies/liner2.json")
            .is_file());
    }

    #[test]
    fn test_load_missing_key_is_not_found() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let err = store
            .load::<CastingSupply>("casting-supplies/missing_id")
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(err.key(), "casting-supplies/missing_id");
    }

    #[test]
    fn test_corrupt_json_is_schema_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let path = dir.path().join("casting-supplies");
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("broken.json"), "{ not json").unwrap();

        let err = store
            .load::<CastingSupply>("casting-supplies/broken")
            .unwrap_err();
        assert!(matches!(err, StoreError::Schema { .. }));
    }

    #[test]
    fn test_save_is_idempotent_byte_for_byte() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let supply = sample_supply("liner3");
        let path = dir.path().join("casting-supplies/liner3.json");

        store.save(&supply, "casting-supplies/liner3").unwrap();
        let first = fs::read(&path).unwrap();
        store.save(&supply, "casting-supplies/liner3").unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_pretty_printed_with_two_space_indent() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store
            .save(&sample_supply("liner4"), "casting-supplies/liner4")
            .unwrap();

        let text = fs::read_to_string(dir.path().join("casting-supplies/liner4.json")).unwrap();
        assert!(text.starts_with("{\n  \""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_exists() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(!store.exists("casting-supplies/liner5"));

        store
            .save(&sample_supply("liner5"), "casting-supplies/liner5")
            .unwrap();
        assert!(store.exists("casting-supplies/liner5"));
        assert!(store.exists("casting-supplies/liner5.json"));
    }

    #[test]
    fn test_motor_standard_default_survives_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let supply = sample_supply("liner6");
        assert_eq!(supply.motor_standard, MotorStandard::Other);

        store.save(&supply, "casting-supplies/liner6").unwrap();
        let loaded: CastingSupply = store.load("casting-supplies/liner6").unwrap();
        assert_eq!(loaded.motor_standard, MotorStandard::Other);
        assert_eq!(loaded.mass, None::<Mass>);
    }
}
