//! Component file parsing
//!
//! Turns one component XML file into a [`Component`] without resolving any
//! cross-references. Unknown node names are skipped on purpose: the editor's
//! format keeps growing and only a handful of nodes matter here.

use std::path::Path;

use crate::domain::{
    Component, ComponentKind, Controller, ObjectKind, Package, PackageComponent, Variable,
    component_url,
};
use crate::error::{FuiError, Result, component};
use crate::parser::xml::XmlElement;
use crate::registry::ExportRequests;

/// Read and parse the file of one manifest component
///
/// Recoverable problems (unknown kinds and nodes) are appended to `warnings`.
///
/// # Errors
///
/// Returns `ComponentUnreadable` if the file is missing or not well-formed.
pub fn parse_component(
    package: &Package,
    entry: &PackageComponent,
    requests: &mut ExportRequests,
    warnings: &mut Vec<FuiError>,
) -> Result<Component> {
    let display_path = entry.path.display().to_string();
    let text = std::fs::read_to_string(&entry.path)
        .map_err(|e| component::unreadable(&display_path, e.to_string()))?;
    let root = XmlElement::parse(&text)
        .map_err(|e| component::unreadable(&display_path, e.to_string()))?;

    Ok(build_component(package, entry, root, requests, warnings))
}

/// Build a component from its already parsed root element
pub fn build_component(
    package: &Package,
    entry: &PackageComponent,
    root: XmlElement,
    requests: &mut ExportRequests,
    warnings: &mut Vec<FuiError>,
) -> Component {
    let label = format!("{}/{}", package.name, entry.name);
    let kind = component_kind(&root, &label, warnings);

    let mut display_list = Vec::new();
    let mut controllers = Vec::new();

    for element in root.children {
        match element.name.as_str() {
            "displayList" => display_list = element.children,
            "controller" => controllers.push(Controller::from_node(element)),
            "relation" | "customProperty" => {}
            "ComboBox" if kind == ComponentKind::ComboBox => {
                if let Some(dropdown) = element.non_empty_attr("dropdown") {
                    let url = dropdown_url(dropdown, &package.id);
                    tracing::debug!("{label} requests export of dropdown {url}");
                    requests.request(url);
                }
            }
            _ => {}
        }
    }

    let variables = display_list
        .iter()
        .cloned()
        .map(Variable::from_node)
        .inspect(|variable| {
            if let ObjectKind::Unknown(tag) = &variable.kind {
                warnings.push(component::unknown_node(&label, tag, &variable.name));
            }
        })
        .collect();

    Component {
        package_id: package.id.clone(),
        id: entry.id.clone(),
        name: entry.name.clone(),
        name_without_extension: file_stem(&entry.name),
        url: component_url(&package.id, &entry.id),
        kind,
        declared_exported: entry.exported,
        display_list,
        controllers,
        variables,
        exported: false,
        reachable: false,
        class_name: None,
    }
}

/// Kind from the root attribute; the editor spells it `extention`
fn component_kind(root: &XmlElement, label: &str, warnings: &mut Vec<FuiError>) -> ComponentKind {
    let Some(value) = root
        .non_empty_attr("extention")
        .or_else(|| root.non_empty_attr("extension"))
    else {
        return ComponentKind::Component;
    };

    ComponentKind::parse(value).unwrap_or_else(|| {
        warnings.push(component::unknown_kind(label, value));
        ComponentKind::Component
    })
}

/// Dropdown references are `ui://` URLs, bare ids point into the same package
fn dropdown_url(value: &str, package_id: &str) -> String {
    if value.starts_with("ui://") {
        value.to_string()
    } else {
        component_url(package_id, value)
    }
}

fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use indexmap::IndexMap;

    use super::*;

    fn package() -> Package {
        Package {
            id: "p1".to_string(),
            name: "Login".to_string(),
            path: PathBuf::from("/assets/Login"),
            components: IndexMap::new(),
        }
    }

    fn entry(name: &str) -> PackageComponent {
        PackageComponent {
            id: "a0".to_string(),
            name: name.to_string(),
            path: PathBuf::from(format!("/assets/Login/{name}")),
            exported: true,
        }
    }

    fn build(xml: &str) -> (Component, ExportRequests, Vec<FuiError>) {
        let mut requests = ExportRequests::new();
        let mut warnings = Vec::new();
        let root = XmlElement::parse(xml).unwrap();
        let component = build_component(
            &package(),
            &entry("LoginPanel.xml"),
            root,
            &mut requests,
            &mut warnings,
        );
        (component, requests, warnings)
    }

    #[test]
    fn test_build_component_identity() {
        let (component, _, warnings) = build(r#"<component size="800,600"/>"#);
        assert_eq!(component.package_id, "p1");
        assert_eq!(component.id, "a0");
        assert_eq!(component.name, "LoginPanel.xml");
        assert_eq!(component.name_without_extension, "LoginPanel");
        assert_eq!(component.url, "ui://p1a0");
        assert_eq!(component.kind, ComponentKind::Component);
        assert!(component.declared_exported);
        assert!(!component.exported);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_build_component_dispatches_children() {
        let (component, _, _) = build(
            r#"<component extention="Button">
  <controller name="button" pages="0,up,1,down"/>
  <controller name="c1" pages="0,,1,"/>
  <displayList>
    <image id="n0" name="bg"/>
    <text id="n1" name="title"/>
    <component id="n2" name="icon" src="b3"/>
  </displayList>
  <relation target="" sidePair="width-width"/>
  <customProperty target="n1" propertyId="0" value="x"/>
  <transition name="t0"/>
</component>"#,
        );

        assert_eq!(component.kind, ComponentKind::Button);
        assert_eq!(component.controllers.len(), 2);
        assert_eq!(component.controllers[0].pages, ["up", "down"]);
        assert_eq!(component.display_list.len(), 3);

        let names: Vec<&str> = component.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["bg", "title", "icon"]);
        assert_eq!(component.variables[1].kind, ObjectKind::TextField);
        assert_eq!(component.variables[2].kind, ObjectKind::Component);
        assert!(component.variables.iter().all(|v| !v.exposed && v.resolved.is_none()));
    }

    #[test]
    fn test_unknown_kind_warns_and_defaults() {
        let (component, _, warnings) = build(r#"<component extention="Knob"/>"#);
        assert_eq!(component.kind, ComponentKind::Component);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], FuiError::UnknownComponentKind { .. }));
    }

    #[test]
    fn test_unknown_node_warns_and_is_kept() {
        let (component, _, warnings) = build(
            r#"<component><displayList><video id="n0" name="intro"/></displayList></component>"#,
        );
        assert_eq!(component.variables.len(), 1);
        assert_eq!(
            component.variables[0].kind,
            ObjectKind::Unknown("video".to_string())
        );
        assert!(matches!(warnings[0], FuiError::UnknownNodeKind { .. }));
    }

    #[test]
    fn test_combobox_dropdown_requests_export() {
        let (_, requests, _) = build(
            r#"<component extention="ComboBox"><ComboBox dropdown="ui://p2L1"/></component>"#,
        );
        assert!(requests.contains("ui://p2L1"));
    }

    #[test]
    fn test_combobox_dropdown_bare_id_uses_own_package() {
        let (_, requests, _) =
            build(r#"<component extention="ComboBox"><ComboBox dropdown="L1"/></component>"#);
        assert!(requests.contains("ui://p1L1"));
    }

    #[test]
    fn test_dropdown_ignored_for_other_kinds() {
        let (_, requests, _) =
            build(r#"<component extention="Label"><ComboBox dropdown="ui://p2L1"/></component>"#);
        assert_eq!(requests.iter().next(), None);
    }

    #[test]
    fn test_parse_component_missing_file() {
        let mut requests = ExportRequests::new();
        let mut warnings = Vec::new();
        let err = parse_component(
            &package(),
            &entry("Nope.xml"),
            &mut requests,
            &mut warnings,
        )
        .unwrap_err();
        assert!(matches!(err, FuiError::ComponentUnreadable { .. }));
    }
}
