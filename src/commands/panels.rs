//! Panels command implementation
//!
//! Prints every package's root panel (the panel-id table) followed by the
//! sub-panels reached from it.

use console::Style;

use crate::cli::PanelsArgs;
use crate::commands::helpers::Session;
use crate::domain::ComponentKey;
use crate::error::Result;
use crate::registry::Registry;
use crate::resolver::{Resolution, RootPanel};

/// Run panels command
pub fn run(session: &Session, args: PanelsArgs) -> Result<()> {
    let resolution = session.resolve()?;
    show_panels(&resolution, args.package.as_deref());
    Ok(())
}

fn show_panels(resolution: &Resolution, package: Option<&str>) {
    let registry = &resolution.registry;
    let panels: Vec<&RootPanel> = resolution
        .walk
        .panels
        .iter()
        .filter(|panel| {
            package.is_none_or(|wanted| panel.package_name == wanted || panel.package_id == wanted)
        })
        .collect();

    if panels.is_empty() {
        match package {
            Some(wanted) => println!("No root panel for package {wanted}."),
            None => println!("No root panels found."),
        }
        return;
    }

    for panel in panels {
        println!(
            "{} {}",
            Style::new().bold().yellow().apply_to(&panel.package_name),
            Style::new()
                .dim()
                .apply_to(format!("{} ({})", label(registry, &panel.component), panel.component))
        );

        let sub_panels = resolution.walk.sub_panels_of(&panel.component);
        if sub_panels.is_empty() {
            println!("  {}", Style::new().dim().apply_to("no sub-panels"));
        }
        for sub_panel in sub_panels {
            println!(
                "  {}.{} -> {} {}",
                label(registry, &sub_panel.parent),
                sub_panel.variable,
                Style::new()
                    .green()
                    .apply_to(label(registry, &sub_panel.component)),
                Style::new().dim().apply_to(format!("({})", sub_panel.package_name))
            );
        }
        println!();
    }
}

/// Component file name, falling back to its key
fn label(registry: &Registry, key: &ComponentKey) -> String {
    registry
        .component(key)
        .map_or_else(|| key.to_string(), |c| c.name.clone())
}
