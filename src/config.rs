//! Conversion settings: file extensions and the batch error policy.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// What the batch driver does when one file pair fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole run at the first failure.
    #[default]
    Abort,
    /// Log the failure and continue with the next file.
    Skip,
}

/// Settings shared by every conversion in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Extension of the binary data files, without the dot.
    pub data_extension: String,
    /// Extension of the sidecar parameter files.
    pub param_extension: String,
    /// Extension given to the CSV outputs.
    pub output_extension: String,
    pub on_error: ErrorPolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            data_extension: "DTA".to_string(),
            param_extension: "DSC".to_string(),
            output_extension: "csv".to_string(),
            on_error: ErrorPolicy::Abort,
        }
    }
}

impl ConvertConfig {
    /// Load settings from a JSON file. Absent fields keep their defaults.
    pub fn from_json(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| ConvertError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
