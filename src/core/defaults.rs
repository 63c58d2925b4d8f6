use serde::{Deserialize, Serialize};

use crate::local_files::{self, FileSystem};
use crate::paths;

/// Root configuration structure for findreplace.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FindReplaceConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via findreplace.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    /// Project document used when `--project` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default)]
    pub undo_labels: UndoLabels,
}

/// Labels of the undo groups opened by each scope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UndoLabels {
    #[serde(default = "default_project_label")]
    pub project: String,

    #[serde(default = "default_composition_label")]
    pub composition: String,
}

impl Default for UndoLabels {
    fn default() -> Self {
        Self {
            project: default_project_label(),
            composition: default_composition_label(),
        }
    }
}

fn default_project_label() -> String {
    "Find & Replace Project Items".to_string()
}

fn default_composition_label() -> String {
    "Find & Replace Composition Layers".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If findreplace.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full findreplace.json config, falling back to defaults on any error.
pub fn load_config() -> FindReplaceConfig {
    load_config_from_file().unwrap_or_default()
}

fn load_config_from_file() -> crate::Result<FindReplaceConfig> {
    let path = paths::findreplace_json()?;

    if !path.exists() {
        return Err(crate::Error::other("findreplace.json not found"));
    }

    let content = local_files::local().read(&path)?;
    parse_config(&content)
}

fn parse_config(content: &str) -> crate::Result<FindReplaceConfig> {
    serde_json::from_str(content).map_err(|e| {
        crate::Error::validation_invalid_json(e, Some("parse findreplace.json".to_string()))
    })
}

/// Save config to findreplace.json file (creates if missing).
pub fn save_config(config: &FindReplaceConfig) -> crate::Result<()> {
    let path = paths::findreplace_json()?;
    let fs = local_files::local();

    if let Some(parent) = path.parent() {
        fs.ensure_dir(parent)?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        crate::Error::internal_json(e.to_string(), Some("serialize findreplace.json".to_string()))
    })?;

    fs.write(&path, &content)
}

/// Check if findreplace.json file exists
pub fn config_exists() -> bool {
    paths::findreplace_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}
