//! Export resolution
//!
//! Decides which components belong to the generated binding surface and which
//! of their members are exposed as bound fields.
//!
//! A component is exported when any of these holds:
//! - the manifest declares it `exported="true"`
//! - its URL was requested while parsing (ComboBox dropdown lists)
//! - the sub-panel walker reached it from a root panel
//!
//! The pass recomputes everything from authored data, so running it twice
//! gives the same result.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::CodegenConfig;
use crate::domain::{Component, ComponentKey, ObjectKind};
use crate::registry::{ExportRequests, Registry};

/// Exported components grouped by package: `packageId → componentId → key`
///
/// Consumed by the binder generator, which emits one binder per package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExportedComponents {
    by_package: IndexMap<String, IndexMap<String, ComponentKey>>,
}

impl ExportedComponents {
    pub fn insert(&mut self, key: ComponentKey) {
        self.by_package
            .entry(key.package_id.clone())
            .or_default()
            .insert(key.component_id.clone(), key);
    }

    pub fn contains(&self, key: &ComponentKey) -> bool {
        self.by_package
            .get(&key.package_id)
            .is_some_and(|components| components.contains_key(&key.component_id))
    }

    /// Packages with at least one exported component, with their components
    pub fn packages(&self) -> impl Iterator<Item = (&str, impl Iterator<Item = &ComponentKey>)> {
        self.by_package
            .iter()
            .map(|(package_id, components)| (package_id.as_str(), components.values()))
    }

    pub fn package_count(&self) -> usize {
        self.by_package.len()
    }

    pub fn component_count(&self) -> usize {
        self.by_package.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_package.is_empty()
    }
}

/// Whether a name was assigned by the editor rather than the author
///
/// The editor names display objects `n0`, `n1`, … and controllers `c0`, `c1`, …
pub fn is_default_name(name: &str, prefix: char) -> bool {
    name.strip_prefix(prefix)
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Whether a display member becomes a bound field
pub fn is_exposed(name: &str, kind: &ObjectKind, ignore_default_names: bool) -> bool {
    if name.is_empty() || !kind.is_bindable() {
        return false;
    }
    !(ignore_default_names && is_default_name(name, 'n'))
}

/// Run the export pass over the whole registry
pub fn resolve_exports(
    registry: &mut Registry,
    requests: &ExportRequests,
    config: &CodegenConfig,
) -> ExportedComponents {
    let ignore_default_names = config.ignore_default_variable_name;
    let mut exported = ExportedComponents::default();

    for component in registry.components_mut() {
        for variable in &mut component.variables {
            variable.exposed = is_exposed(&variable.name, &variable.kind, ignore_default_names);
        }
        for controller in &mut component.controllers {
            controller.exposed = !controller.name.is_empty()
                && !(ignore_default_names && is_default_name(&controller.name, 'c'));
        }

        component.exported =
            component.declared_exported || requests.contains(&component.url) || component.reachable;
        if component.exported {
            assign_class_name(component, config);
            exported.insert(component.key());
        } else {
            component.class_name = None;
        }
    }

    for url in requests.iter() {
        if !registry.components().any(|c| c.url == url) {
            tracing::warn!("Export requested for unknown component {url}");
        }
    }

    tracing::debug!(
        "{} exported component(s) in {} package(s)",
        exported.component_count(),
        exported.package_count()
    );
    exported
}

/// Export components reached as sub-panels
///
/// Returns how many were not exported before.
pub fn export_reachable<'a>(
    registry: &mut Registry,
    keys: impl IntoIterator<Item = &'a ComponentKey>,
    config: &CodegenConfig,
    exported: &mut ExportedComponents,
) -> usize {
    let mut newly_exported = 0;
    for key in keys {
        let Some(component) = registry.component_mut(key) else {
            continue;
        };
        component.reachable = true;
        if !exported.contains(key) {
            component.exported = true;
            assign_class_name(component, config);
            exported.insert(key.clone());
            newly_exported += 1;
        }
    }
    newly_exported
}

fn assign_class_name(component: &mut Component, config: &CodegenConfig) {
    component.class_name = Some(config.class_name(&component.name_without_extension));
}
