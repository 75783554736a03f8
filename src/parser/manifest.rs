//! Package manifest (package.xml) parsing
//!
//! The manifest lists the package's resources and publish settings:
//!
//! ```text
//! <packageDescription id="x2p9q0">
//!   <resources>
//!     <component id="a0" name="LoginPanel.xml" path="/" exported="true"/>
//!     <image id="a1" name="bg.png" path="/images/"/>
//!   </resources>
//!   <publish name="Login"/>
//! </packageDescription>
//! ```
//!
//! Only `component` resources matter here; images, sounds and fonts are
//! skipped.

use std::path::Path;

use indexmap::IndexMap;

use super::xml::XmlElement;
use crate::domain::{Package, PackageComponent};
use crate::error::{Result, manifest};

/// Manifest file name inside every package directory
pub const MANIFEST_FILE: &str = "package.xml";

/// Parse the manifest of one package directory
///
/// The package name is the directory name.
///
/// # Errors
///
/// - `MissingManifest` if the directory has no `package.xml`
/// - `ManifestUnreadable` if it cannot be read or is not well-formed XML
/// - `MalformedManifest` if its sections are not `resources` then `publish`
///   or the root has no `id`
pub fn parse_manifest(package_dir: &Path) -> Result<Package> {
    let manifest_path = package_dir.join(MANIFEST_FILE);
    let display_path = manifest_path.display().to_string();

    if !manifest_path.is_file() {
        return Err(manifest::missing(display_path));
    }

    let text = std::fs::read_to_string(&manifest_path)
        .map_err(|e| manifest::unreadable(&display_path, e.to_string()))?;
    let root = XmlElement::parse(&text)
        .map_err(|e| manifest::unreadable(&display_path, e.to_string()))?;

    let name = package_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    build_package(&root, package_dir, name, &display_path)
}

/// Build a package from an already parsed manifest root
pub fn build_package(
    root: &XmlElement,
    package_dir: &Path,
    name: String,
    display_path: &str,
) -> Result<Package> {
    let section_names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
    let resources = match section_names.as_slice() {
        ["resources", "publish", ..] => &root.children[0],
        _ => {
            return Err(manifest::malformed(
                display_path,
                format!(
                    "expected <resources> followed by <publish>, found [{}]",
                    section_names.join(", ")
                ),
            ));
        }
    };

    let id = root
        .non_empty_attr("id")
        .ok_or_else(|| manifest::malformed(display_path, "root element has no id"))?
        .to_string();

    let mut components = IndexMap::new();
    for entry in resources.children.iter().filter(|e| e.name == "component") {
        let component = package_component(entry, package_dir);
        components.insert(component.name.clone(), component);
    }

    Ok(Package {
        id,
        name,
        path: package_dir.to_path_buf(),
        components,
    })
}

fn package_component(entry: &XmlElement, package_dir: &Path) -> PackageComponent {
    let name = entry.attr("name").unwrap_or_default().to_string();
    // `path` is package-relative with leading and trailing slashes, e.g. "/ui/"
    let relative = entry.attr("path").unwrap_or("/").trim_matches('/');
    let path = if relative.is_empty() {
        package_dir.join(&name)
    } else {
        package_dir.join(relative).join(&name)
    };

    PackageComponent {
        id: entry.attr("id").unwrap_or_default().to_string(),
        name,
        path,
        exported: entry.attr("exported") == Some("true"),
    }
}
