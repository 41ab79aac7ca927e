//! The seed document format and loading it into an index.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{ConnectionInput, StationInput};
use crate::index::{ImportSummary, StationIndex, StationStore};

use super::error::SeedError;

/// A full station graph as JSON: stations first, then connections.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub stations: Vec<StationInput>,
    #[serde(default)]
    pub connections: Vec<ConnectionInput>,
}

impl SeedDocument {
    /// Parse a seed document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SeedError> {
        serde_json::from_str(text).map_err(|e| SeedError::Json {
            message: e.to_string(),
        })
    }

    /// Read and parse a seed file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Import every record into `index` as one batch.
    ///
    /// Nothing is applied if any record is invalid.
    pub fn import_into<S: StationStore>(
        self,
        index: &StationIndex<S>,
    ) -> Result<ImportSummary, SeedError> {
        Ok(index.import(self.stations, self.connections)?)
    }
}

/// Load a seed file straight into `index`.
pub fn load_file<S: StationStore>(
    index: &StationIndex<S>,
    path: impl AsRef<Path>,
) -> Result<ImportSummary, SeedError> {
    let path = path.as_ref();
    let summary = SeedDocument::from_path(path)?.import_into(index)?;
    info!(
        path = %path.display(),
        stations = summary.stations,
        connections = summary.connections,
        "loaded seed file"
    );
    Ok(summary)
}
