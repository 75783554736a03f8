//! List command implementation
//!
//! This command lists exported components grouped by package, with their
//! generated class names and, in detailed mode, their bound members.

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers::Session;
use crate::domain::Component;
use crate::error::Result;
use crate::resolver::Resolution;

/// Run list command
pub fn run(session: &Session, args: ListArgs) -> Result<()> {
    let resolution = session.resolve()?;
    list_exported(&resolution, args.detailed);
    Ok(())
}

/// List exported components in the resolution
fn list_exported(resolution: &Resolution, detailed: bool) {
    let registry = &resolution.registry;

    if resolution.exported.is_empty() {
        println!("No exported components.");
        return;
    }

    println!(
        "Exported components ({}):",
        resolution.exported.component_count()
    );
    println!();

    for (package_id, keys) in resolution.exported.packages() {
        println!(
            "  {} {}",
            Style::new()
                .bold()
                .yellow()
                .apply_to(registry.package_name(package_id)),
            Style::new().dim().apply_to(format!("({package_id})"))
        );
        for key in keys {
            let Some(component) = registry.component(key) else {
                continue;
            };
            display_component(component);
            if detailed {
                display_members(component);
            }
        }
        println!();
    }
}

/// Display one component line
fn display_component(component: &Component) {
    let class_name = component.class_name.as_deref().unwrap_or(&component.name);
    let origin = if component.declared_exported {
        ""
    } else if component.reachable {
        " [sub-panel]"
    } else {
        " [requested]"
    };
    println!(
        "    {} {} {}{}",
        Style::new().green().apply_to(class_name),
        Style::new().dim().apply_to(component.kind.base_type()),
        component.url,
        Style::new().cyan().apply_to(origin)
    );
}

/// Display bound controllers and members
fn display_members(component: &Component) {
    for controller in component.controllers.iter().filter(|c| c.exposed) {
        println!(
            "      {} {} [{}]",
            Style::new().bold().apply_to("controller"),
            controller.name,
            controller.pages.join(", ")
        );
    }
    for variable in component.exposed_variables() {
        let type_name = variable
            .resolved
            .as_ref()
            .and_then(|r| r.type_name())
            .unwrap_or("?");
        println!(
            "      {}: {}",
            variable.name,
            Style::new().cyan().apply_to(type_name)
        );
    }
}
