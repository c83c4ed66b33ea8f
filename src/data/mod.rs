//! Candidate data source.
//!
//! The widget works over a fixed, ordered list of people loaded once before
//! the controller is built. The list comes from a JSON file, either wrapped
//! as `{"data": [...]}` or as a bare array, or from the bundled sample set.

mod types;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub use types::{Candidate, Chip};

/// Sample people bundled into the binary.
const SAMPLE_DATA: &str = include_str!("../../assets/people.json");

/// Errors that can occur when loading candidates.
#[derive(Debug, Error)]
pub enum DataError {
    /// Failed to read the data file.
    #[error("Failed to read data file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse the data file.
    #[error("Failed to parse data file: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Two candidates share an id.
    #[error("Duplicate candidate id '{0}'")]
    DuplicateId(String),

    /// A candidate has an empty id.
    #[error("Candidate at position {0} has an empty id")]
    EmptyId(usize),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Deserialize)]
#[serde(untagged)]
enum DataFile {
    Wrapped { data: Vec<Candidate> },
    Bare(Vec<Candidate>),
}

impl DataFile {
    fn into_candidates(self) -> Vec<Candidate> {
        match self {
            DataFile::Wrapped { data } => data,
            DataFile::Bare(data) => data,
        }
    }
}

/// Parse candidates from a JSON string and validate their ids.
pub fn parse_candidates(json: &str) -> Result<Vec<Candidate>> {
    let candidates = serde_json::from_str::<DataFile>(json)?.into_candidates();
    validate(&candidates)?;
    Ok(candidates)
}

/// Load candidates from a JSON file on disk.
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    debug!(path = %path.display(), "Loading candidates");
    let contents = fs::read_to_string(path)?;
    let candidates = parse_candidates(&contents)?;
    info!(count = candidates.len(), "Loaded candidates");
    Ok(candidates)
}

/// The bundled sample candidates.
pub fn sample_candidates() -> Result<Vec<Candidate>> {
    parse_candidates(SAMPLE_DATA)
}

/// Ids must be non-empty and unique within the collection.
fn validate(candidates: &[Candidate]) -> Result<()> {
    let mut seen = HashSet::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.id.is_empty() {
            return Err(DataError::EmptyId(index));
        }
        if !seen.insert(candidate.id.as_str()) {
            return Err(DataError::DuplicateId(candidate.id.clone()));
        }
    }
    Ok(())
}
