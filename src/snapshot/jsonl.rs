//! JSONL (JSON Lines) input.
//!
//! Each non-blank line is one JSON object. Lines that fail to parse are
//! skipped with a warning rather than failing the whole file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::SnapshotError;

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities from the file.
    pub fn read_all(&self) -> Result<Vec<T>, SnapshotError> {
        if !self.path.exists() {
            return Err(SnapshotError::PathNotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        let entities = parse_lines(BufReader::new(file), &self.path.display().to_string())?;

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

/// Parse JSONL from any buffered reader. `source` names the input in logs.
pub fn parse_lines<T, R>(reader: R, source: &str) -> Result<Vec<T>, SnapshotError>
where
    T: DeserializeOwned,
    R: BufRead,
{
    let mut entities = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str(&line) {
            Ok(entity) => entities.push(entity),
            Err(e) => {
                warn!("Failed to parse line {} in {}: {}", index + 1, source, e);
            }
        }
    }

    Ok(entities)
}
