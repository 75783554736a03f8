//! Resolution passes over a parsed registry
//!
//! ```text
//! ParsedAssets ─▶ export ─▶ types ─▶ sub-panels ─▶ Resolution
//!                   ▲                     │
//!                   └── reachable ────────┘
//! ```
//!
//! Sub-panels found by the walker join the export set. When that adds new
//! exported components, the type pass runs once more so references to them
//! carry their generated class names.

pub mod export;
pub mod report;
pub mod subpanel;
pub mod types;

pub use export::ExportedComponents;
pub use report::ResolutionReport;
pub use subpanel::{RootPanel, SubPanel, SubPanelWalk};
pub use types::ResolutionFailure;

use crate::config::CodegenConfig;
use crate::error::{FuiError, Result};
use crate::parser::ParsedAssets;
use crate::registry::Registry;

/// Everything downstream generators need
#[derive(Debug)]
pub struct Resolution {
    pub registry: Registry,
    pub exported: ExportedComponents,
    pub walk: SubPanelWalk,
    pub failures: Vec<ResolutionFailure>,
}

impl Resolution {
    pub fn report<'a>(&'a self, config: &'a CodegenConfig) -> ResolutionReport<'a> {
        ResolutionReport::new(self, config)
    }

    /// Fails when any component reference stayed unresolved
    ///
    /// # Errors
    ///
    /// Returns `UnresolvedReferences` with the number of dangling references.
    pub fn ensure_resolved(&self) -> Result<()> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(FuiError::UnresolvedReferences {
                count: self.failures.len(),
            })
        }
    }
}

/// Run export, type and sub-panel resolution in order
pub fn resolve(parsed: ParsedAssets, config: &CodegenConfig) -> Resolution {
    let ParsedAssets {
        mut registry,
        requests,
    } = parsed;

    let mut exported = export::resolve_exports(&mut registry, &requests, config);
    let mut failures = types::resolve_types(&mut registry);
    let walk = subpanel::walk_sub_panels(&registry);

    let newly_exported =
        export::export_reachable(&mut registry, walk.sub_panel_keys(), config, &mut exported);
    if newly_exported > 0 {
        tracing::debug!("{newly_exported} sub-panel(s) joined the export set");
        failures = types::resolve_types(&mut registry);
    }
    for failure in &failures {
        tracing::warn!("{}", failure.to_error());
    }

    Resolution {
        registry,
        exported,
        walk,
        failures,
    }
}
