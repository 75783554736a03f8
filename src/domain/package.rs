//! Package domain types
//!
//! A package is one asset bundle exported by the UI editor: a directory with
//! a `package.xml` manifest and one XML file per component.

use std::path::PathBuf;

use indexmap::IndexMap;

/// Manifest entry for one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageComponent {
    /// Id, unique within the package
    pub id: String,
    /// File name, e.g. `LoginPanel.xml`
    pub name: String,
    /// Resolved path of the component file
    pub path: PathBuf,
    /// `exported="true"` in the manifest
    pub exported: bool,
}

/// One parsed package
#[derive(Debug, Clone)]
pub struct Package {
    /// Stable id assigned by the editor
    pub id: String,
    /// Directory name
    pub name: String,
    pub path: PathBuf,
    /// Manifest components keyed by file name, in manifest order
    pub components: IndexMap<String, PackageComponent>,
}

impl Package {
    /// File name of the package's root panel, by convention `<Name>Panel.xml`
    pub fn root_panel_file(&self) -> String {
        format!("{}Panel.xml", self.name)
    }

    /// Manifest entry of the root panel, if the package has one
    pub fn root_panel(&self) -> Option<&PackageComponent> {
        self.components.get(&self.root_panel_file())
    }
}
