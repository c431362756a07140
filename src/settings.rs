use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::validation::{LengthValidator, MAX_LENGTH, MIN_LENGTH};

/// Hard limits for the configurable length bounds.
const LENGTH_LIMIT: usize = 128;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application settings read from `settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Shortest accepted password length (default 4)
    pub min_length: usize,
    /// Longest accepted password length (default 16)
    pub max_length: usize,
    /// Clipboard clear timeout in seconds (10-120, default 30)
    pub clipboard_clear_seconds: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
            clipboard_clear_seconds: 30,
        }
    }
}

/// Returns the base data directory for PassForm files.
pub fn data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "PassForm", "PassForm") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

impl AppSettings {
    /// Returns the path to the settings file
    pub fn settings_path() -> PathBuf {
        data_dir().join("settings.json")
    }

    /// Load settings from the default location, or defaults if absent
    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    /// Load settings from `path`. A missing or broken file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable settings file");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Validate and clamp the length bounds; `max` never drops below `min`
    pub fn set_length_bounds(&mut self, min: usize, max: usize) {
        self.min_length = min.clamp(1, LENGTH_LIMIT);
        self.max_length = max.clamp(self.min_length, LENGTH_LIMIT);
    }

    /// Validate and clamp clipboard timeout to allowed range
    pub fn set_clipboard_timeout(&mut self, seconds: u32) {
        self.clipboard_clear_seconds = seconds.clamp(10, 120);
    }

    /// Get clipboard timeout as u64 for comparison with Instant
    pub fn clipboard_timeout_u64(&self) -> u64 {
        self.clipboard_clear_seconds as u64
    }

    pub fn length_validator(&self) -> LengthValidator {
        LengthValidator::new(self.min_length, self.max_length)
    }

    fn normalized(mut self) -> Self {
        self.set_length_bounds(self.min_length, self.max_length);
        self.set_clipboard_timeout(self.clipboard_clear_seconds);
        self
    }
}
