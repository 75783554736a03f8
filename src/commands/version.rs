//! Version command implementation
//!
//! Prints the version together with the built-in code generation defaults
//! and the component kinds this build understands.

use std::io::{self, Write};

use crate::config::CodegenConfig;
use crate::config::codegen::CONFIG_FILE;
use crate::domain::ComponentKind;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    write_version(&mut io::stdout().lock())
}

fn write_version(out: &mut dyn Write) -> Result<()> {
    let defaults = CodegenConfig::default();
    let kinds: Vec<String> = ComponentKind::ALL
        .iter()
        .map(|kind| format!("{kind:?}"))
        .collect();

    writeln!(out, "fuibind {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "Build info:")?;
    writeln!(out, "  Profile: {}", build_profile())?;
    writeln!(out, "  Config file: {CONFIG_FILE}")?;
    writeln!(out, "  Default namespace: {}", defaults.namespace)?;
    writeln!(out, "  Default class prefix: {}", defaults.class_name_prefix)?;
    writeln!(out, "  Component kinds: {}", kinds.join(", "))?;
    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
