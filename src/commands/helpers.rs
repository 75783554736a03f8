//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::CodegenConfig;
use crate::error::Result;
use crate::parser;
use crate::progress::ProgressDisplay;
use crate::resolver::{self, Resolution};

/// Assets directory plus the effective configuration of one invocation
#[derive(Debug)]
pub struct Session {
    pub assets_dir: PathBuf,
    pub config: CodegenConfig,
}

impl Session {
    /// Load the configuration for an assets directory
    ///
    /// `include_default_names` overrides the configured
    /// `ignore_default_variable_name`.
    pub fn open(
        assets_dir: PathBuf,
        config_path: Option<&Path>,
        include_default_names: bool,
    ) -> Result<Self> {
        let mut config = CodegenConfig::load(&assets_dir, config_path)?;
        if include_default_names {
            config.ignore_default_variable_name = false;
        }
        tracing::debug!(
            "assets {}, namespace {}, prefix {}",
            assets_dir.display(),
            config.namespace,
            config.class_name_prefix
        );
        Ok(Self { assets_dir, config })
    }

    /// Parse every package and run all resolution passes
    pub fn resolve(&self) -> Result<Resolution> {
        let dirs = parser::discover_packages(&self.assets_dir)?;
        let progress = ProgressDisplay::new(dirs.len() as u64);

        let parsed = parser::parse_packages(&dirs, |dir| {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            progress.update_package(&name);
        });

        match parsed {
            Ok(parsed) => {
                progress.finish();
                Ok(resolver::resolve(parsed, &self.config))
            }
            Err(err) => {
                progress.abandon();
                Err(err)
            }
        }
    }
}
