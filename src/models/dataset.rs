use super::{Duty, Stop, Vehicle};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// The three collections the report is computed from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub duties: Vec<Duty>,
    pub vehicles: Vec<Vehicle>,
    pub stops: Vec<Stop>,
}

impl Dataset {
    /// Load the dataset from a JSON file.
    ///
    /// - missing file → `DataNotFound`
    /// - malformed JSON or missing collection → `InvalidData`
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppError::DataNotFound(path.display().to_string()),
            _ => AppError::Io(e),
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
