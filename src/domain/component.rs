//! Component domain types
//!
//! A [`Component`] is the parsed view of one component file. It is created by
//! the descriptor parser and afterwards only annotated in place: the export
//! pass fills in `exported`, `class_name` and the `exposed` flags, the type
//! pass fills in [`Variable::resolved`].

use std::fmt;

use serde::{Serialize, Serializer};

use super::kinds::{ComponentKind, ObjectKind};
use crate::parser::xml::XmlElement;

/// Canonical lookup key of a component: `packageId/componentId`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentKey {
    pub package_id: String,
    pub component_id: String,
}

impl ComponentKey {
    pub fn new(package_id: impl Into<String>, component_id: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
            component_id: component_id.into(),
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package_id, self.component_id)
    }
}

impl Serialize for ComponentKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Canonical reference URL of a component
pub fn component_url(package_id: &str, component_id: &str) -> String {
    format!("ui://{package_id}{component_id}")
}

/// Concrete generated type of an exposed member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    /// Primitive display object with a fixed framework type
    Display { type_name: &'static str },

    /// Reference to another registered component
    Component {
        target: ComponentKey,
        kind: ComponentKind,
        /// Generated class name when the target is exported, else the base type
        type_name: String,
    },

    /// Reference that matches no registered component
    Dangling { target: ComponentKey },
}

impl ResolvedType {
    /// Type name a generator emits for the field, `None` when dangling
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Display { type_name } => Some(*type_name),
            Self::Component { type_name, .. } => Some(type_name.as_str()),
            Self::Dangling { .. } => None,
        }
    }

    /// Framework type the field is instantiated as
    pub fn base_type(&self) -> Option<&'static str> {
        match self {
            Self::Display { type_name } => Some(*type_name),
            Self::Component { kind, .. } => Some(kind.base_type()),
            Self::Dangling { .. } => None,
        }
    }

    /// Referenced component, resolved or not
    pub fn target(&self) -> Option<&ComponentKey> {
        match self {
            Self::Display { .. } => None,
            Self::Component { target, .. } | Self::Dangling { target } => Some(target),
        }
    }

    /// Plain-container references are the edges of the sub-panel graph
    pub fn is_sub_panel(&self) -> bool {
        matches!(
            self,
            Self::Component {
                kind: ComponentKind::Component,
                ..
            }
        )
    }
}

/// One bindable member declared in a component's display list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub kind: ObjectKind,
    /// The member's own display node, needed to follow `pkg`/`src` links
    pub node: XmlElement,
    pub exposed: bool,
    pub resolved: Option<ResolvedType>,
}

impl Variable {
    pub fn from_node(node: XmlElement) -> Self {
        Self {
            name: node.attr("name").unwrap_or_default().to_string(),
            kind: ObjectKind::from_node(&node),
            node,
            exposed: false,
            resolved: None,
        }
    }

    /// Key of the component this member references
    ///
    /// The target package is the node's `pkg` attribute, falling back to the
    /// owning package; the target component is its `src` attribute. `None`
    /// for non-references.
    pub fn reference_target(&self, owner_package: &str) -> Option<ComponentKey> {
        if self.kind != ObjectKind::Component {
            return None;
        }
        let package_id = self.node.non_empty_attr("pkg").unwrap_or(owner_package);
        let component_id = self.node.attr("src").unwrap_or_default();
        Some(ComponentKey::new(package_id, component_id))
    }
}

/// Controller declaration of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    pub name: String,
    pub pages: Vec<String>,
    pub exposed: bool,
    pub node: XmlElement,
}

impl Controller {
    /// The `pages` attribute alternates page ids and page names
    pub fn from_node(node: XmlElement) -> Self {
        let pages = node
            .attr("pages")
            .unwrap_or_default()
            .split(',')
            .skip(1)
            .step_by(2)
            .map(str::to_string)
            .collect();

        Self {
            name: node.attr("name").unwrap_or_default().to_string(),
            pages,
            exposed: false,
            node,
        }
    }
}

/// Parsed component file
#[derive(Debug, Clone)]
pub struct Component {
    pub package_id: String,
    pub id: String,
    /// File name, e.g. `LoginPanel.xml`
    pub name: String,
    pub name_without_extension: String,
    pub url: String,
    pub kind: ComponentKind,
    /// Exported flag as declared in the package manifest
    pub declared_exported: bool,
    pub display_list: Vec<XmlElement>,
    pub controllers: Vec<Controller>,
    pub variables: Vec<Variable>,

    /// Part of the binding surface (set by the export pass and the walker)
    pub exported: bool,
    /// Reached from a root panel as a nested sub-panel
    pub reachable: bool,
    /// Generated class name, set for exported components
    pub class_name: Option<String>,
}

impl Component {
    pub fn key(&self) -> ComponentKey {
        ComponentKey::new(&self.package_id, &self.id)
    }

    /// Human-readable location for diagnostics, e.g. `Login/LoginPanel.xml`
    pub fn label(&self, package_name: &str) -> String {
        format!("{package_name}/{}", self.name)
    }

    pub fn exposed_variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter().filter(|v| v.exposed)
    }

    #[cfg(test)]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }
}
