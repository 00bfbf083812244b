//! File-backed settings loading.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};
use crate::model::SidebarSettings;

impl SidebarSettings {
    /// Read and validate a JSON settings file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read,
    /// [`ConfigError::Parse`] when it is not JSON, and the validation errors
    /// of [`SidebarSettings::from_json_value`] otherwise.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            operation: "settings.read",
            path: path.to_path_buf(),
            source,
        })?;
        let document: Value = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_value(&document)?;
        tracing::debug!(path = %path.display(), "sidebar settings loaded");
        Ok(settings)
    }

    /// Load `path` when provided, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`SidebarSettings::load`].
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
