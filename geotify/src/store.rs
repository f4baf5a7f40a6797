//! Persisted geofence list handling.
//!
//! The store is a JSON file holding an ordered list of record maps (see
//! [`crate::geotification::codec`]). Read and parse failures of the whole
//! file surface as typed errors; individual records that fail to decode are
//! skipped with a warning so one bad entry never takes down the list.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::geotification::{decode_record, encode_record, DecodePolicy, Geotification};

/// Geofence store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the store file
    #[error("Failed to read geofence store: {0}")]
    Read(std::io::Error),

    /// The store file is not valid JSON
    #[error("Failed to parse geofence store: {0}")]
    Parse(#[from] serde_json::Error),

    /// The store file does not hold a list of records
    #[error("Geofence store root must be a list of records")]
    NotAList,

    /// Failed to serialize the record list
    #[error("Failed to serialize geofence store: {0}")]
    Serialize(serde_json::Error),

    /// Failed to create the store directory
    #[error("Failed to create store directory: {0}")]
    Directory(std::io::Error),

    /// Failed to write the store file
    #[error("Failed to write geofence store: {0}")]
    Write(std::io::Error),
}

/// Load all geofence records from the store file.
///
/// Records that fail the per-record decode are skipped with a warning and
/// the successfully-decoded list is returned. Duplicate identifiers are the
/// caller's responsibility; the store only logs them.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not valid JSON, or its
/// root is not a list.
pub fn load_all(path: &Path, policy: DecodePolicy) -> Result<Vec<Geotification>, StoreError> {
    let raw = std::fs::read_to_string(path).map_err(StoreError::Read)?;
    let root: Value = serde_json::from_str(&raw)?;
    let items = root.as_array().ok_or(StoreError::NotAList)?;

    let mut records = Vec::with_capacity(items.len());
    let mut seen = HashSet::new();

    for (index, item) in items.iter().enumerate() {
        let map = match item.as_object() {
            Some(map) => map,
            None => {
                tracing::warn!(index, "skipping store entry that is not a record map");
                continue;
            }
        };

        match decode_record(map, policy) {
            Ok(record) => {
                if !seen.insert(record.identifier.clone()) {
                    tracing::warn!(
                        identifier = %record.identifier,
                        "duplicate identifier in geofence store"
                    );
                }
                records.push(record);
            }
            Err(error) => {
                tracing::warn!(index, %error, "skipping undecodable geofence record");
            }
        }
    }

    Ok(records)
}

/// Load all records, treating a missing store file as an empty list.
///
/// Convenience for flows that may run before the store was ever written.
pub fn load_or_empty(path: &Path, policy: DecodePolicy) -> Result<Vec<Geotification>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    load_all(path, policy)
}

/// Save all geofence records to the store file.
///
/// Encodes each record, pretty-prints the list, and creates parent
/// directories as needed.
pub fn save_all(path: &Path, records: &[Geotification]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(StoreError::Directory)?;
    }

    let list = Value::Array(
        records
            .iter()
            .map(|record| Value::Object(encode_record(record)))
            .collect(),
    );
    let content = serde_json::to_string_pretty(&list).map_err(StoreError::Serialize)?;

    std::fs::write(path, content).map_err(StoreError::Write)
}

/// Create an empty store file at `path` if it doesn't exist.
pub fn ensure_exists(path: &Path) -> Result<(), StoreError> {
    if !path.exists() {
        save_all(path, &[])?;
    }
    Ok(())
}
