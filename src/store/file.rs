//! File-backed store (one JSON file per slot).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::KeyValueStore;
use crate::error::{ItdeskError, Result};

/// Store that keeps each slot in `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a slot.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, slot: &str) -> Result<Option<Value>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content).map_err(|e| ItdeskError::StoreCorrupt {
            slot: slot.to_string(),
            message: format!("{}: {}", path.display(), e),
        })?;

        Ok(Some(value))
    }

    /// Overwrite a slot using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption.
    fn set(&self, slot: &str, value: &Value) -> Result<()> {
        self.ensure_dir()?;

        let path = self.slot_path(slot);
        let content = serde_json::to_string_pretty(value)?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Wrote slot {} ({} bytes)", slot, content.len());
        Ok(())
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted slot {}", slot);
        }
        Ok(())
    }

    fn slots(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut slots = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    slots.push(stem.to_string());
                }
            }
        }
        slots.sort();

        Ok(slots)
    }
}
