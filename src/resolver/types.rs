//! Type resolution
//!
//! Gives every exposed member a concrete generated type. Primitive display
//! objects map to fixed framework types; component references are looked up
//! in the registry by `packageId/componentId`.
//!
//! Runs after the export pass: a reference to an exported component is typed
//! with that component's generated class name.

use serde::Serialize;

use crate::domain::{Component, ComponentKey, ResolvedType, Variable};
use crate::error::{FuiError, resolve};
use crate::registry::Registry;

/// An exposed component reference whose target is not registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionFailure {
    pub component: ComponentKey,
    /// `Package/File.xml` of the owning component
    pub location: String,
    pub variable: String,
    pub target: ComponentKey,
}

impl ResolutionFailure {
    pub fn to_error(&self) -> FuiError {
        resolve::dangling(&self.location, &self.variable, self.target.to_string())
    }
}

/// Resolve the type of one member in the context of its owning component
///
/// `None` for members with nothing to resolve (unknown nodes).
pub fn resolve_variable(
    registry: &Registry,
    owner: &Component,
    variable: &Variable,
) -> Option<ResolvedType> {
    if let Some(type_name) = variable.kind.display_type() {
        return Some(ResolvedType::Display { type_name });
    }

    let target = variable.reference_target(&owner.package_id)?;
    let found = registry
        .package(&target.package_id)
        .and_then(|_| registry.component(&target));

    Some(match found {
        Some(component) => ResolvedType::Component {
            kind: component.kind,
            type_name: component
                .class_name
                .clone()
                .unwrap_or_else(|| component.kind.base_type().to_string()),
            target,
        },
        None => ResolvedType::Dangling { target },
    })
}

/// Run the type pass over every exposed member in the registry
///
/// Members that are not exposed lose any earlier resolution. Returns the
/// dangling references, in registry order.
pub fn resolve_types(registry: &mut Registry) -> Vec<ResolutionFailure> {
    let mut updates = Vec::new();
    for component in registry.components() {
        for (index, variable) in component.variables.iter().enumerate() {
            let resolved = if variable.exposed {
                resolve_variable(registry, component, variable)
            } else {
                None
            };
            updates.push((component.key(), index, resolved));
        }
    }

    let mut failures = Vec::new();
    for (key, index, resolved) in updates {
        if let Some(ResolvedType::Dangling { target }) = &resolved {
            let location = match registry.component(&key) {
                Some(component) => component.label(registry.package_name(&key.package_id)),
                None => key.to_string(),
            };
            let variable = registry
                .component(&key)
                .and_then(|c| c.variables.get(index))
                .map(|v| v.name.clone())
                .unwrap_or_default();
            failures.push(ResolutionFailure {
                component: key.clone(),
                location,
                variable,
                target: target.clone(),
            });
        }

        if let Some(variable) = registry
            .component_mut(&key)
            .and_then(|c| c.variables.get_mut(index))
        {
            variable.resolved = resolved;
        }
    }

    failures
}
