use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alignment::domain::speaker_assigner::AssignmentStrategy;
use crate::alignment::domain::transcript_formatter::OutputStyle;
use crate::shared::constants::{SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User-adjustable alignment options. Missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentSettings {
    pub style: OutputStyle,
    pub assignment: AssignmentStrategy,
    /// Display names matched positionally to the sorted speaker labels.
    pub speaker_names: Vec<String>,
    /// Explicit label → name entries. These win over positional names.
    pub speaker_map: BTreeMap<String, String>,
}

impl AlignmentSettings {
    /// `<config dir>/diarscribe/settings.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| SettingsError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load from `explicit` if given (it must exist), otherwise from the
    /// default location when present, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::debug!("Using settings from {}", path.display());
                Self::load_from(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
