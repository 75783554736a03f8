//! Code generation configuration (fuibind.yaml) data structures
//!
//! Only `ignore_default_variable_name` influences resolution. The namespace
//! and class name prefix are naming inputs handed to the generators, the
//! prefix also names exported components in the resolution report.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Default configuration file name, looked up in the assets directory
pub const CONFIG_FILE: &str = "fuibind.yaml";

/// Code generation configuration (fuibind.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Namespace the generated classes live in
    pub namespace: String,

    /// Prefix prepended to every generated component class name
    pub class_name_prefix: String,

    /// Skip members that still carry an editor-assigned default name (`n12`, `c0`)
    pub ignore_default_variable_name: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            namespace: "ET.Client".to_string(),
            class_name_prefix: "FUI_".to_string(),
            ignore_default_variable_name: true,
        }
    }
}

impl CodegenConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid "all defaults" configuration
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration for an assets directory
    ///
    /// An explicit path must exist. Without one, `fuibind.yaml` inside the
    /// assets directory is used when present, defaults otherwise.
    pub fn load(assets_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(config::not_found(path.display().to_string()));
                }
                path.to_path_buf()
            }
            None => {
                let path = assets_dir.join(CONFIG_FILE);
                if !path.is_file() {
                    tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, assets_dir.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Generated class name for a component file name without extension
    pub fn class_name(&self, name_without_extension: &str) -> String {
        format!("{}{}", self.class_name_prefix, name_without_extension)
    }
}
