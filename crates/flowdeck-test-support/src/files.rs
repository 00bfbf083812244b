//! Temp-file staging for tests that exercise path-based loaders.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

/// Scratch directory that removes itself on drop.
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    /// Create a fresh scratch directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create scratch directory")?;
        Ok(Self { dir })
    }

    /// Write `value` as pretty JSON to `name` inside the scratch directory.
    ///
    /// # Errors
    ///
    /// Returns an error when serialisation or the write fails.
    pub fn write_json(&self, name: &str, value: &Value) -> Result<PathBuf> {
        let text = serde_json::to_string_pretty(value).context("failed to serialise fixture")?;
        self.write_text(name, &text)
    }

    /// Write raw text to `name` inside the scratch directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the write fails.
    pub fn write_text(&self, name: &str, text: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Path that does not exist inside the scratch directory.
    #[must_use]
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
