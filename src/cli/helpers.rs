//! Shared helpers for CLI commands

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use walkdir::WalkDir;

use crate::store::JsonFileStore;

/// The record subdirectories every data directory carries
pub const RECORD_DIRS: [&str; 4] = [
    "motor-parts",
    "motor-assemblies",
    "casting-supplies",
    "motor-reloads",
];

/// Open the file-backed store over the given data directory
pub fn open_store(dir: &Path) -> JsonFileStore {
    JsonFileStore::new(dir)
}

/// Record IDs under one kind's subdirectory, sorted
///
/// IDs are the file stems of the `.json` files; subdirectories below the
/// kind directory are not part of the layout and are ignored.
pub fn record_ids(dir: &Path, prefix: &str) -> Vec<String> {
    let kind_dir = dir.join(prefix);
    if !kind_dir.is_dir() {
        return Vec::new();
    }

    let mut ids: Vec<String> = WalkDir::new(&kind_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .filter_map(|e| {
            e.path()
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .collect();
    ids.sort();
    ids
}

/// Print a record as pretty JSON to stdout
pub fn print_record<T: Serialize>(record: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(record).into_diagnostic()?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_record_ids_empty_for_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(record_ids(dir.path(), "motor-parts").is_empty());
    }

    #[test]
    fn test_record_ids_sorted_stems() {
        let dir = tempdir().unwrap();
        let parts = dir.path().join("motor-parts");
        fs::create_dir_all(&parts).unwrap();
        fs::write(parts.join("b_part.json"), "{}").unwrap();
        fs::write(parts.join("a_part.json"), "{}").unwrap();
        fs::write(parts.join("notes.txt"), "ignored").unwrap();

        assert_eq!(
            record_ids(dir.path(), "motor-parts"),
            vec!["a_part".to_string(), "b_part".to_string()]
        );
    }
}
