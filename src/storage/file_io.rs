//! JSON file helpers
//!
//! Reads never modify the file. Writes go through a sibling temp file and a
//! rename, so a reader sees either the old or the new contents.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CardcycleError;

fn storage_error(action: &str, path: &Path, err: impl Display) -> CardcycleError {
    CardcycleError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, CardcycleError> {
    let file = File::open(path).map_err(|e| storage_error("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Read JSON from `path`, or `T::default()` when the file is absent
pub fn read_json<T, P>(path: P) -> Result<T, CardcycleError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.exists() {
        parse_file(path)
    } else {
        Ok(T::default())
    }
}

/// Read JSON from `path`, failing when the file is absent
pub fn read_json_required<T, P>(path: P) -> Result<T, CardcycleError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(storage_error("find", path, "no such file"));
    }
    parse_file(path)
}

/// Write pretty JSON to `path` via temp file and rename
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), CardcycleError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    // same directory, or the rename is not atomic
    let temp_path = path.with_extension("json.tmp");
    let file = File::create(&temp_path).map_err(|e| storage_error("create", &temp_path, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize", path, e))?;
    writer.flush().map_err(|e| storage_error("flush", &temp_path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_error("sync", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_error("replace", path, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        name: String,
        billing_day: Option<u32>,
    }

    fn sample() -> Sample {
        Sample {
            name: "card".to_string(),
            billing_day: Some(14),
        }
    }

    #[test]
    fn test_missing_file_reads_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: Sample = read_json(temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_missing_file_required_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_json_required::<Sample, _>(temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CardcycleError::Storage(_)));
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("ledger.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(!temp_dir.path().join("nested").join("ledger.json.tmp").exists());

        let loaded: Sample = read_json_required(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_malformed_json_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Sample, _>(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
