//! Common test utilities for fuibind integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary assets directory, one sub-directory per package
#[allow(dead_code)]
pub struct TestAssets {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the assets root
    pub path: PathBuf,
}

impl TestAssets {
    /// Create an empty assets directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the assets root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the assets root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Write `package.xml` for a package
    ///
    /// `components` lists `(id, file name, exported)`.
    pub fn write_manifest(&self, package: &str, id: &str, components: &[(&str, &str, bool)]) {
        let resources: String = components
            .iter()
            .map(|(component_id, name, exported)| {
                format!(
                    "    <component id=\"{component_id}\" name=\"{name}\" path=\"/\" exported=\"{exported}\"/>\n"
                )
            })
            .collect();
        self.write_file(
            &format!("{package}/package.xml"),
            &format!(
                "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
                 <packageDescription id=\"{id}\">\n  <resources>\n{resources}  </resources>\n  \
                 <publish name=\"{package}\"/>\n</packageDescription>\n"
            ),
        );
    }

    /// Write a component file with an optional `extention` and a display list
    pub fn write_component(
        &self,
        package: &str,
        name: &str,
        kind: Option<&str>,
        display_list: &str,
    ) {
        let kind_attr = kind
            .map(|k| format!(" extention=\"{k}\""))
            .unwrap_or_default();
        self.write_file(
            &format!("{package}/{name}"),
            &format!(
                "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
                 <component size=\"800,600\"{kind_attr}>\n  \
                 <displayList>{display_list}</displayList>\n</component>\n"
            ),
        );
    }

    /// Login package with a root panel, a nested form and a cross-package button
    #[allow(dead_code)]
    pub fn with_login_packages(self) -> Self {
        self.write_manifest(
            "Login",
            "p1",
            &[
                ("a0", "LoginPanel.xml", true),
                ("a1", "LoginForm.xml", false),
            ],
        );
        self.write_component(
            "Login",
            "LoginPanel.xml",
            None,
            r#"<image id="n0" name="n0"/>
               <component id="n1" name="form" src="a1"/>
               <component id="n2" name="ok" pkg="p2" src="b0"/>"#,
        );
        self.write_component(
            "Login",
            "LoginForm.xml",
            None,
            r#"<text id="n0" name="account" input="true"/>
               <text id="n1" name="title"/>"#,
        );
        self.write_manifest("Common", "p2", &[("b0", "OkButton.xml", true)]);
        self.write_component("Common", "OkButton.xml", Some("Button"), "");
        self
    }

    /// Get a fuibind command pointed at this assets directory
    #[allow(dead_code)]
    pub fn cmd(&self) -> Command {
        fuibind_cmd_for_assets(&self.path)
    }
}

impl Default for TestAssets {
    fn default() -> Self {
        Self::new()
    }
}

/// Get path to the fuibind binary
#[allow(dead_code)]
pub fn fuibind_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fuibind"))
}

/// A fuibind command with the environment isolated from the developer's
pub fn fuibind_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fuibind"));
    cmd.env_remove("FUIBIND_ASSETS");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A fuibind command with `--assets` set
#[allow(dead_code)]
pub fn fuibind_cmd_for_assets(assets: &Path) -> Command {
    let mut cmd = fuibind_cmd();
    cmd.arg("--assets").arg(assets);
    cmd
}
