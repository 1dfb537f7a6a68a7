//! Board provider: where attendants and their starting boards come from.
//!
//! DESIGN
//! ======
//! The manager asks a provider once at start-up for the attendant roster
//! and each attendant's board, then owns the data. Providers are read-only;
//! nothing the manager does is written back.
//!
//! Two sources ship: the built-in demo data (`SeedProvider`, see `seed.rs`)
//! and a JSON document on disk (`JsonFileProvider`).

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ErrorCode;
use crate::model::{Attendant, Column};

pub trait BoardProvider: Send + Sync {
    /// Attendant roster in display order.
    fn attendants(&self) -> Vec<Attendant>;

    /// Starting board for `attendant_id`, `None` if the provider has none.
    fn board(&self, attendant_id: &str) -> Option<Vec<Column>>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed file has a board for unknown attendant: {0}")]
    UnknownAttendant(String),
}

impl ErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E_SEED_IO",
            Self::Parse(_) => "E_SEED_PARSE",
            Self::UnknownAttendant(_) => "E_SEED_ATTENDANT",
        }
    }
}

// =============================================================================
// JSON FILE
// =============================================================================

/// On-disk seed format:
///
/// ```json
/// { "attendants": [{ "id": "att-1", ... }],
///   "boards": { "att-1": [{ "id": "column-1", "title": "...", "conversations": [...] }] } }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct JsonFileProvider {
    attendants: Vec<Attendant>,
    #[serde(default)]
    boards: HashMap<String, Vec<Column>>,
}

impl JsonFileProvider {
    /// Parse a seed document.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON and `UnknownAttendant` when a board
    /// key does not match any attendant.
    pub fn from_json(raw: &str) -> Result<Self, ProviderError> {
        let provider: Self = serde_json::from_str(raw)?;
        if let Some(orphan) = provider
            .boards
            .keys()
            .find(|id| !provider.attendants.iter().any(|a| &a.id == *id))
        {
            return Err(ProviderError::UnknownAttendant(orphan.clone()));
        }
        Ok(provider)
    }

    /// Read and parse a seed file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise see [`Self::from_json`].
    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ProviderError::Io { path: path.display().to_string(), source })?;
        Self::from_json(&raw)
    }
}

impl BoardProvider for JsonFileProvider {
    fn attendants(&self) -> Vec<Attendant> {
        self.attendants.clone()
    }

    fn board(&self, attendant_id: &str) -> Option<Vec<Column>> {
        self.boards.get(attendant_id).cloned()
    }
}
