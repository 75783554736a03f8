//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Builds assets directories on disk the way the UI editor lays them out,
//! and in-memory components for tests that never touch the file system.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{AssetsFixture, component_xml};
//!
//! let assets = AssetsFixture::new();
//! assets
//!     .package("Login", "p1")
//!     .component("a0", "LoginPanel.xml", true, &component_xml(None, r#"<image name="bg"/>"#))
//!     .write();
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::TempDir;

use crate::domain::{Component, ComponentKind, Package, Variable, component_url};
use crate::parser::xml::XmlElement;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Component file content with an optional `extention` and a display list
pub fn component_xml(kind: Option<&str>, display_list: &str) -> String {
    let kind_attr = kind
        .map(|k| format!(r#" extention="{k}""#))
        .unwrap_or_default();
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<component size="400,300"{kind_attr}>
  <displayList>{display_list}</displayList>
</component>"#
    )
}

/// Temporary assets directory
pub struct AssetsFixture {
    temp: TempDir,
}

impl AssetsFixture {
    pub fn new() -> Self {
        Self {
            temp: create_temp_dir(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Start describing a package directory
    pub fn package(&self, name: &str, id: &str) -> PackageFixture<'_> {
        PackageFixture {
            root: self.temp.path(),
            name: name.to_string(),
            id: id.to_string(),
            entries: Vec::new(),
        }
    }

    /// Write an arbitrary file relative to the assets directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.temp.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }
}

struct Entry {
    id: String,
    name: String,
    exported: bool,
    content: String,
}

/// Package directory under construction
pub struct PackageFixture<'a> {
    root: &'a Path,
    name: String,
    id: String,
    entries: Vec<Entry>,
}

impl PackageFixture<'_> {
    /// Add a component entry and its file
    #[must_use]
    pub fn component(mut self, id: &str, name: &str, exported: bool, content: &str) -> Self {
        self.entries.push(Entry {
            id: id.to_string(),
            name: name.to_string(),
            exported,
            content: content.to_string(),
        });
        self
    }

    /// Write `package.xml` and every component file
    pub fn write(self) -> PathBuf {
        let dir = self.root.join(&self.name);
        std::fs::create_dir_all(&dir).expect("Failed to create package directory");

        let mut resources = String::new();
        for entry in &self.entries {
            resources.push_str(&format!(
                "    <component id=\"{}\" name=\"{}\" path=\"/\" exported=\"{}\"/>\n",
                entry.id, entry.name, entry.exported
            ));
            std::fs::write(dir.join(&entry.name), &entry.content)
                .expect("Failed to write component file");
        }

        let manifest = format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <packageDescription id=\"{}\">\n  <resources>\n{}  </resources>\n  \
             <publish name=\"{}\"/>\n</packageDescription>\n",
            self.id, resources, self.name
        );
        std::fs::write(dir.join("package.xml"), manifest).expect("Failed to write package.xml");
        dir
    }
}

/// In-memory package without manifest entries
pub fn package(id: &str, name: &str) -> Package {
    Package {
        id: id.to_string(),
        name: name.to_string(),
        path: PathBuf::from(format!("/assets/{name}")),
        components: IndexMap::new(),
    }
}

/// In-memory component without members
pub fn component(package_id: &str, id: &str) -> Component {
    Component {
        package_id: package_id.to_string(),
        id: id.to_string(),
        name: format!("{id}.xml"),
        name_without_extension: id.to_string(),
        url: component_url(package_id, id),
        kind: ComponentKind::Component,
        declared_exported: false,
        display_list: Vec::new(),
        controllers: Vec::new(),
        variables: Vec::new(),
        exported: false,
        reachable: false,
        class_name: None,
    }
}

/// In-memory display member
pub fn variable(tag: &str, name: &str) -> Variable {
    Variable::from_node(XmlElement::new(tag).with_attr("name", name))
}

/// In-memory component reference member
pub fn reference(name: &str, package_id: Option<&str>, src: &str) -> Variable {
    let mut node = XmlElement::new("component")
        .with_attr("name", name)
        .with_attr("src", src);
    if let Some(package_id) = package_id {
        node = node.with_attr("pkg", package_id);
    }
    Variable::from_node(node)
}
