//! Sub-panel graph walker
//!
//! Every package may have a root panel, the component named
//! `<PackageName>Panel.xml`. Starting from each root, the walker follows
//! exposed members that reference plain container components and collects
//! every component reached that way as a sub-panel.
//!
//! ## Algorithm
//!
//! Depth-first with an explicit stack of frames, one frame per component
//! being expanded. A single visited set is shared across all roots:
//!
//! 1. Only edge targets are marked visited, never the root a walk starts
//!    from. A root panel referenced by another root is therefore yielded as a
//!    sub-panel whatever order the packages are walked in.
//! 2. An edge to a visited key is skipped, so cycles (A → B → A) and
//!    diamonds (A → {B, C} → D) yield each key once.
//! 3. An unvisited target is marked, yielded, then expanded before the
//!    remaining edges of its parent (pre-order).
//!
//! Edges come from the type pass: only references resolved to a component of
//! kind `Component` count. Dangling references were already recorded as
//! failures by that pass.

use std::collections::HashSet;
use std::vec;

use serde::Serialize;

use crate::domain::ComponentKey;
use crate::registry::Registry;

/// One outgoing edge of the sub-panel graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Name of the referencing member
    pub variable: String,
    pub target: ComponentKey,
}

/// A component yielded by [`depth_first`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub parent: ComponentKey,
    pub variable: String,
    pub component: ComponentKey,
}

/// Root panel of a package (one row of the panel-id table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootPanel {
    pub package_id: String,
    pub package_name: String,
    pub component: ComponentKey,
}

/// A component reached from a root panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubPanel {
    pub component: ComponentKey,
    /// Owning package of the sub-panel itself
    pub package_id: String,
    pub package_name: String,
    /// Component holding the reference
    pub parent: ComponentKey,
    /// Member of `parent` that references the sub-panel
    pub variable: String,
}

/// Result of walking every root panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubPanelWalk {
    pub panels: Vec<RootPanel>,
    pub sub_panels: Vec<SubPanel>,
}

impl SubPanelWalk {
    pub fn sub_panel_keys(&self) -> impl Iterator<Item = &ComponentKey> {
        self.sub_panels.iter().map(|s| &s.component)
    }

    /// Sub-panels first reached through `root`'s walk or one of its descendants
    pub fn sub_panels_of<'a>(&'a self, root: &ComponentKey) -> Vec<&'a SubPanel> {
        let mut members: HashSet<&ComponentKey> = HashSet::from([root]);
        let mut found = Vec::new();
        for sub_panel in &self.sub_panels {
            if members.contains(&sub_panel.parent) {
                members.insert(&sub_panel.component);
                found.push(sub_panel);
            }
        }
        found
    }
}

/// A component whose outgoing edges are being visited
struct Frame {
    key: ComponentKey,
    edges: vec::IntoIter<Edge>,
}

/// Walk the graph below `root`, skipping and extending `visited`
///
/// `edges` lists the outgoing edges of a component in declaration order.
/// Discoveries are returned in pre-order. `root` is not marked; it is yielded
/// only when an edge below it leads back to it.
pub fn depth_first<F>(
    root: &ComponentKey,
    visited: &mut HashSet<ComponentKey>,
    mut edges: F,
) -> Vec<Discovery>
where
    F: FnMut(&ComponentKey) -> Vec<Edge>,
{
    let mut discovered = Vec::new();
    let mut stack = vec![Frame {
        key: root.clone(),
        edges: edges(root).into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(edge) = frame.edges.next() else {
            stack.pop();
            continue;
        };
        if !visited.insert(edge.target.clone()) {
            continue;
        }

        discovered.push(Discovery {
            parent: frame.key.clone(),
            variable: edge.variable,
            component: edge.target.clone(),
        });
        let next = edges(&edge.target).into_iter();
        stack.push(Frame {
            key: edge.target,
            edges: next,
        });
    }

    discovered
}

/// Outgoing sub-panel edges of a registered component
pub fn sub_panel_edges(registry: &Registry, key: &ComponentKey) -> Vec<Edge> {
    let Some(component) = registry.component(key) else {
        return Vec::new();
    };

    component
        .exposed_variables()
        .filter_map(|variable| {
            let resolved = variable.resolved.as_ref()?;
            if !resolved.is_sub_panel() {
                return None;
            }
            Some(Edge {
                variable: variable.name.clone(),
                target: resolved.target()?.clone(),
            })
        })
        .collect()
}

/// Root panels in package order; packages without one are skipped
pub fn root_panels(registry: &Registry) -> Vec<RootPanel> {
    registry
        .packages()
        .filter_map(|package| {
            let entry = package.root_panel()?;
            let component = ComponentKey::new(&package.id, &entry.id);
            if registry.component(&component).is_none() {
                tracing::debug!(
                    "root panel {} of {} was not parsed",
                    entry.name,
                    package.name
                );
                return None;
            }
            Some(RootPanel {
                package_id: package.id.clone(),
                package_name: package.name.clone(),
                component,
            })
        })
        .collect()
}

/// Walk every root panel of the registry
pub fn walk_sub_panels(registry: &Registry) -> SubPanelWalk {
    let panels = root_panels(registry);
    let mut visited = HashSet::new();
    let mut sub_panels = Vec::new();

    for panel in &panels {
        let discovered = depth_first(&panel.component, &mut visited, |key| {
            sub_panel_edges(registry, key)
        });
        for discovery in discovered {
            let package_id = discovery.component.package_id.clone();
            tracing::debug!(
                "sub-panel {} via {}.{}",
                discovery.component,
                discovery.parent,
                discovery.variable
            );
            sub_panels.push(SubPanel {
                package_name: registry.package_name(&package_id).to_string(),
                package_id,
                component: discovery.component,
                parent: discovery.parent,
                variable: discovery.variable,
            });
        }
    }

    SubPanelWalk { panels, sub_panels }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;
    use crate::domain::{ComponentKind, PackageComponent, ResolvedType, Variable};
    use crate::test_fixtures::{component, package, reference};

    fn key(id: &str) -> ComponentKey {
        ComponentKey::new("p1", id)
    }

    fn graph(edges: &[(&str, &[&str])]) -> HashMap<ComponentKey, Vec<Edge>> {
        edges
            .iter()
            .map(|(from, targets)| {
                let edges = targets
                    .iter()
                    .map(|t| Edge {
                        variable: format!("to_{t}"),
                        target: key(t),
                    })
                    .collect();
                (key(from), edges)
            })
            .collect()
    }

    fn walk(graph: &HashMap<ComponentKey, Vec<Edge>>, root: &str) -> Vec<String> {
        let mut visited = HashSet::new();
        depth_first(&key(root), &mut visited, |k| {
            graph.get(k).cloned().unwrap_or_default()
        })
        .into_iter()
        .map(|d| d.component.component_id)
        .collect()
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = graph(&[("A", &["B"]), ("B", &["A"])]);
        assert_eq!(walk(&graph, "A"), ["B", "A"]);
    }

    #[test]
    fn test_diamond_yields_each_key_once() {
        let graph = graph(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &["D"])]);
        assert_eq!(walk(&graph, "A"), ["B", "D", "C"]);
    }

    #[test]
    fn test_self_reference() {
        let graph = graph(&[("A", &["A", "B"]), ("B", &["B"])]);
        assert_eq!(walk(&graph, "A"), ["A", "B"]);
    }

    #[test]
    fn test_parent_and_variable_recorded() {
        let graph = graph(&[("A", &["B"]), ("B", &["C"])]);
        let mut visited = HashSet::new();
        let found = depth_first(&key("A"), &mut visited, |k| {
            graph.get(k).cloned().unwrap_or_default()
        });
        assert_eq!(found[1].parent, key("B"));
        assert_eq!(found[1].variable, "to_C");
        assert!(!visited.contains(&key("A")));
        assert!(visited.contains(&key("C")));
    }

    fn resolved_ref(name: &str, target: &str, kind: ComponentKind) -> Variable {
        let mut variable = reference(name, None, target);
        variable.exposed = true;
        variable.resolved = Some(ResolvedType::Component {
            target: key(target),
            kind,
            type_name: kind.base_type().to_string(),
        });
        variable
    }

    fn registry(components: Vec<crate::domain::Component>) -> Registry {
        let mut login = package("p1", "Login");
        for c in &components {
            login.components.insert(
                c.name.clone(),
                PackageComponent {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    path: PathBuf::from(&c.name),
                    exported: false,
                },
            );
        }
        let mut registry = Registry::new();
        registry.insert_package(login).unwrap();
        for c in components {
            registry.insert_component(c);
        }
        registry
    }

    #[test]
    fn test_only_plain_container_references_are_edges() {
        let mut root = component("p1", "a0");
        root.variables = vec![
            resolved_ref("content", "a1", ComponentKind::Component),
            resolved_ref("ok", "a2", ComponentKind::Button),
        ];
        let mut hidden = resolved_ref("n5", "a3", ComponentKind::Component);
        hidden.exposed = false;
        root.variables.push(hidden);
        let mut gone = reference("gone", None, "zz");
        gone.exposed = true;
        gone.resolved = Some(ResolvedType::Dangling { target: key("zz") });
        root.variables.push(gone);

        let registry = registry(vec![root]);
        let edges = sub_panel_edges(&registry, &key("a0"));
        assert_eq!(
            edges,
            [Edge {
                variable: "content".to_string(),
                target: key("a1"),
            }]
        );
    }

    #[test]
    fn test_walk_from_root_panel() {
        let mut root = component("p1", "a0");
        root.name = "LoginPanel.xml".to_string();
        root.variables = vec![resolved_ref("form", "a1", ComponentKind::Component)];
        let mut form = component("p1", "a1");
        form.variables = vec![resolved_ref("footer", "a2", ComponentKind::Component)];
        let footer = component("p1", "a2");

        let registry = registry(vec![root, form, footer]);
        let walk = walk_sub_panels(&registry);

        assert_eq!(walk.panels.len(), 1);
        assert_eq!(walk.panels[0].component, key("a0"));
        assert_eq!(walk.panels[0].package_name, "Login");
        let found: Vec<_> = walk.sub_panel_keys().cloned().collect();
        assert_eq!(found, [key("a1"), key("a2")]);
        assert_eq!(walk.sub_panels[1].parent, key("a1"));
        assert_eq!(walk.sub_panels[1].variable, "footer");
        assert_eq!(walk.sub_panels_of(&key("a0")).len(), 2);
    }

    #[test]
    fn test_package_without_root_panel() {
        let registry = registry(vec![component("p1", "a0")]);
        let walk = walk_sub_panels(&registry);
        assert!(walk.panels.is_empty());
        assert!(walk.sub_panels.is_empty());
    }
}
