//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use super::merger::merge_configs;
use super::schema::Settings;
use crate::error::{ItdeskError, Result};

/// Paths to configuration files in priority order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.itdesk/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .itdesk/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .itdesk/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given working directory.
    pub fn discover(root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .map(|home| home.join(".itdesk").join("config.yml"))
                .filter(|p| p.exists()),
            ..Self::discover_local(root)
        }
    }

    /// Discover only the files under `root` (no user-global config).
    pub fn discover_local(root: &Path) -> Self {
        let existing = |name: &str| Some(root.join(".itdesk").join(name)).filter(|p| p.exists());
        Self {
            user_global: None,
            project: existing("config.yml"),
            project_local: existing("config.local.yml"),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Parse YAML content into settings.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| ItdeskError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single settings file without merging.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    parse_settings(&content, path)
}

fn load_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }
    serde_yaml::from_str(&content).map_err(|e| ItdeskError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every config file that applies to `root`.
pub fn load_settings(root: &Path) -> Result<Settings> {
    load_from_paths(&ConfigPaths::discover(root), root)
}

pub(crate) fn load_from_paths(paths: &ConfigPaths, root: &Path) -> Result<Settings> {
    let mut values = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config {}", path.display());
        values.push(load_value(path)?);
    }

    if values.is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_value(merge_configs(&values)).map_err(|e| ItdeskError::ConfigParseError {
        path: root.join(".itdesk").join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}
