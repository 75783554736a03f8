//! Descriptor parsing
//!
//! First stage of the pipeline: read every package directory under the assets
//! directory and register its packages and components. Nothing is resolved
//! here; the result is a complete [`Registry`] plus the [`ExportRequests`]
//! gathered along the way.
//!
//! Failure isolation:
//! - a package without a readable manifest is skipped with a warning
//! - a component file that cannot be read is skipped with a warning
//! - a malformed manifest or a duplicate package id aborts the whole run

pub mod component;
pub mod manifest;
pub mod xml;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FuiError, Result, fs};
use crate::registry::{ExportRequests, Registry};

/// Output of the parse stage, input of the resolution stage
#[derive(Debug, Default)]
pub struct ParsedAssets {
    pub registry: Registry,
    pub requests: ExportRequests,
}

/// List package directories directly below the assets directory
///
/// Sorted by name so runs are reproducible across file systems. Hidden
/// directories are skipped.
///
/// # Errors
///
/// Returns `AssetsNotFound` if `assets_dir` is not a directory.
pub fn discover_packages(assets_dir: &Path) -> Result<Vec<PathBuf>> {
    if !assets_dir.is_dir() {
        return Err(fs::assets_not_found(assets_dir.display().to_string()));
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(assets_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| fs::io_error(e.to_string()))?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if entry.file_type().is_dir() && !hidden {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Parse package directories into a registry
///
/// `on_package` is called before each directory is parsed (progress display).
///
/// # Errors
///
/// Returns the first fatal error (`MalformedManifest`, `DuplicatePackageId`).
/// No partial registry is returned in that case.
pub fn parse_packages<F>(package_dirs: &[PathBuf], mut on_package: F) -> Result<ParsedAssets>
where
    F: FnMut(&Path),
{
    let mut parsed = ParsedAssets::default();

    for dir in package_dirs {
        on_package(dir);
        parse_package(dir, &mut parsed)?;
    }

    tracing::debug!(
        "parsed {} package(s), {} component(s), {} export request(s)",
        parsed.registry.package_count(),
        parsed.registry.component_count(),
        parsed.requests.iter().count()
    );
    Ok(parsed)
}

/// Discover and parse every package below `assets_dir`
#[cfg(test)]
pub fn parse_assets(assets_dir: &Path) -> Result<ParsedAssets> {
    let dirs = discover_packages(assets_dir)?;
    parse_packages(&dirs, |_| {})
}

fn parse_package(dir: &Path, parsed: &mut ParsedAssets) -> Result<()> {
    let package = match manifest::parse_manifest(dir) {
        Ok(package) => package,
        Err(err) if !err.is_fatal() => {
            parsed.registry.warn(err);
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    tracing::debug!("package {} ({})", package.name, package.id);

    let mut warnings: Vec<FuiError> = Vec::new();
    let mut components = Vec::new();
    for entry in package.components.values() {
        match component::parse_component(&package, entry, &mut parsed.requests, &mut warnings) {
            Ok(component) => components.push(component),
            Err(err) => warnings.push(err),
        }
    }

    parsed.registry.insert_package(package)?;
    for component in components {
        parsed.registry.insert_component(component);
    }
    for warning in warnings {
        parsed.registry.warn(warning);
    }
    Ok(())
}
