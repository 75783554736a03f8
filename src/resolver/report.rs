//! Serializable view of a resolution, handed to downstream generators as JSON

use serde::Serialize;

use super::Resolution;
use super::export::ExportedComponents;
use super::subpanel::{RootPanel, SubPanel};
use super::types::ResolutionFailure;
use crate::config::CodegenConfig;
use crate::domain::{Component, ComponentKey, ComponentKind, Controller, ObjectKind, Variable};

#[derive(Debug, Serialize)]
pub struct ResolutionReport<'a> {
    pub namespace: &'a str,
    pub class_name_prefix: &'a str,
    pub packages: Vec<PackageReport<'a>>,
    pub exported: &'a ExportedComponents,
    pub panels: &'a [RootPanel],
    pub sub_panels: &'a [SubPanel],
    pub failures: &'a [ResolutionFailure],
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PackageReport<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub path: String,
    pub components: Vec<ComponentReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ComponentReport<'a> {
    pub key: ComponentKey,
    pub id: &'a str,
    pub name: &'a str,
    pub url: &'a str,
    pub kind: ComponentKind,
    pub base_type: &'static str,
    pub exported: bool,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<&'a str>,
    pub controllers: Vec<ControllerReport<'a>>,
    pub variables: Vec<VariableReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ControllerReport<'a> {
    pub name: &'a str,
    pub pages: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct VariableReport<'a> {
    pub name: &'a str,
    pub kind: &'a ObjectKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'a ComponentKey>,
    pub dangling: bool,
}

impl<'a> ResolutionReport<'a> {
    /// Build the report; only exposed members and controllers are listed
    pub fn new(resolution: &'a Resolution, config: &'a CodegenConfig) -> Self {
        let registry = &resolution.registry;
        let packages = registry
            .packages()
            .map(|package| PackageReport {
                id: &package.id,
                name: &package.name,
                path: package.path.display().to_string(),
                components: package
                    .components
                    .values()
                    .filter_map(|entry| {
                        registry.component(&ComponentKey::new(&package.id, &entry.id))
                    })
                    .map(ComponentReport::new)
                    .collect(),
            })
            .collect();

        Self {
            namespace: &config.namespace,
            class_name_prefix: &config.class_name_prefix,
            packages,
            exported: &resolution.exported,
            panels: &resolution.walk.panels,
            sub_panels: &resolution.walk.sub_panels,
            failures: &resolution.failures,
            warnings: registry.warnings().iter().map(ToString::to_string).collect(),
        }
    }
}

impl<'a> ComponentReport<'a> {
    fn new(component: &'a Component) -> Self {
        Self {
            key: component.key(),
            id: &component.id,
            name: &component.name,
            url: &component.url,
            kind: component.kind,
            base_type: component.kind.base_type(),
            exported: component.exported,
            reachable: component.reachable,
            class_name: component.class_name.as_deref(),
            controllers: component
                .controllers
                .iter()
                .filter(|c| c.exposed)
                .map(ControllerReport::new)
                .collect(),
            variables: component
                .exposed_variables()
                .map(VariableReport::new)
                .collect(),
        }
    }
}

impl<'a> ControllerReport<'a> {
    fn new(controller: &'a Controller) -> Self {
        Self {
            name: &controller.name,
            pages: &controller.pages,
        }
    }
}

impl<'a> VariableReport<'a> {
    fn new(variable: &'a Variable) -> Self {
        let resolved = variable.resolved.as_ref();
        Self {
            name: &variable.name,
            kind: &variable.kind,
            type_name: resolved.and_then(|r| r.type_name()),
            base_type: resolved.and_then(|r| r.base_type()),
            target: resolved.and_then(|r| r.target()),
            dangling: resolved.is_some_and(|r| r.type_name().is_none()),
        }
    }
}
