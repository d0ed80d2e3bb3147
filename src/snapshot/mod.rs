//! Input snapshots on disk.
//!
//! The engine itself never touches the filesystem. The CLI uses these
//! helpers to load the player, candidate tournaments and history that a
//! caller has exported from the backend:
//! - Single documents (a player or a tournament) as JSON
//! - Collections as a JSON array, or as JSONL when the file ends in
//!   `.jsonl` or `.ndjson`

mod jsonl;

pub use jsonl::*;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

fn is_jsonl(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("jsonl") | Some("ndjson")
    )
}

/// Read a single JSON document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::PathNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Read a collection from a JSON array or a JSONL file.
pub fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SnapshotError> {
    if is_jsonl(path) {
        return JsonlReader::new(path.to_path_buf()).read_all();
    }

    read_document(path)
}

/// Read a collection, or an empty one when no path is given.
pub fn read_optional_collection<T: DeserializeOwned>(
    path: Option<&Path>,
) -> Result<Vec<T>, SnapshotError> {
    match path {
        Some(path) => read_collection(path),
        None => Ok(Vec::new()),
    }
}
