//! Loading contractor records from disk.
//!
//! The engine itself does no I/O; this module is the CLI-side collaborator
//! that assembles records from JSON exports, one contractor per file.

use crate::error::{FlipscoreError, Result};
use crate::types::contractor::ContractorRecord;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Parse one contractor record from a JSON file.
pub fn load_record(path: &Path) -> Result<ContractorRecord> {
    let content = std::fs::read_to_string(path)?;
    let record: ContractorRecord =
        serde_json::from_str(&content).map_err(|e| FlipscoreError::RecordParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    debug!(path = %path.display(), contractor = %record.id, "loaded record");
    Ok(record)
}

/// Walk a data directory and parse every `*.json` file as a record.
/// A malformed file fails the whole load; an empty result set is an error
/// so callers never rank against a silently missing data set.
pub fn load_records(dir: &Path) -> Result<Vec<ContractorRecord>> {
    let mut records = Vec::new();
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        records.push(load_record(path)?);
    }
    if records.is_empty() {
        warn!(dir = %dir.display(), "no contractor records found");
        return Err(FlipscoreError::NoRecords(dir.display().to_string()));
    }
    debug!(count = records.len(), "loaded contractor records");
    Ok(records)
}
