//! Package registry
//!
//! Holds every parsed package and component. The registry is filled
//! completely by the descriptor parser before any resolution pass runs, so
//! references may point forward into packages discovered later. Resolution
//! passes only annotate the components already in it.

use indexmap::{IndexMap, IndexSet};

use crate::domain::{Component, ComponentKey, Package};
use crate::error::{FuiError, Result, manifest};

/// Component URLs that must be exported although nothing declares them
///
/// Collected while parsing (ComboBox dropdown lists) and handed to the export
/// pass by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRequests {
    urls: IndexSet<String>,
}

impl ExportRequests {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, url: impl Into<String>) {
        self.urls.insert(url.into());
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}

/// Every parsed package and component
#[derive(Debug, Default)]
pub struct Registry {
    packages: IndexMap<String, Package>,
    components: IndexMap<ComponentKey, Component>,
    /// Recoverable problems met while parsing
    warnings: Vec<FuiError>,
}

impl Registry {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePackageId` if another package already uses the id.
    pub fn insert_package(&mut self, package: Package) -> Result<()> {
        if let Some(existing) = self.packages.get(&package.id) {
            return Err(manifest::duplicate_id(
                &package.id,
                existing.path.display().to_string(),
                package.path.display().to_string(),
            ));
        }
        self.packages.insert(package.id.clone(), package);
        Ok(())
    }

    /// Register a component under its `packageId/componentId` key
    pub fn insert_component(&mut self, component: Component) {
        self.components.insert(component.key(), component);
    }

    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.get(id)
    }

    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    pub fn component(&self, key: &ComponentKey) -> Option<&Component> {
        self.components.get(key)
    }

    pub fn component_mut(&mut self, key: &ComponentKey) -> Option<&mut Component> {
        self.components.get_mut(key)
    }

    /// Components in registration order
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub(crate) fn components_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.components.values_mut()
    }

    /// Display name of a package, falling back to its id
    pub fn package_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.packages.get(id).map_or(id, |p| p.name.as_str())
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn warn(&mut self, warning: FuiError) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[FuiError] {
        &self.warnings
    }
}
