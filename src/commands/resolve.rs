//! Resolve command implementation
//!
//! Runs the whole pipeline and prints a summary, or emits the resolution
//! report as JSON for downstream generators. Fails when any component
//! reference stayed unresolved, after the output was written.

use console::Style;

use crate::cli::ResolveArgs;
use crate::commands::helpers::Session;
use crate::error::{Result, fs};
use crate::resolver::Resolution;

/// Run resolve command
pub fn run(session: &Session, args: ResolveArgs) -> Result<()> {
    let resolution = session.resolve()?;

    if args.json || args.output.is_some() {
        let json = serde_json::to_string_pretty(&resolution.report(&session.config))?;
        match &args.output {
            Some(path) => {
                std::fs::write(path, format!("{json}\n"))
                    .map_err(|e| fs::write_failed(path.display().to_string(), e.to_string()))?;
                if !args.json {
                    print_summary(&resolution);
                }
                eprintln!(
                    "{} {}",
                    Style::new().green().apply_to("Wrote report to"),
                    path.display()
                );
            }
            None => println!("{json}"),
        }
    } else {
        print_summary(&resolution);
    }

    resolution.ensure_resolved()
}

fn print_summary(resolution: &Resolution) {
    let registry = &resolution.registry;
    let bold = Style::new().bold();

    println!(
        "Resolved {} package(s), {} component(s)",
        registry.package_count(),
        registry.component_count()
    );
    println!(
        "  {} {} component(s) in {} package(s)",
        bold.apply_to("Exported:"),
        resolution.exported.component_count(),
        resolution.exported.package_count()
    );
    println!(
        "  {} {}",
        bold.apply_to("Root panels:"),
        resolution.walk.panels.len()
    );
    println!(
        "  {} {}",
        bold.apply_to("Sub-panels:"),
        resolution.walk.sub_panels.len()
    );

    let warnings = registry.warnings();
    if !warnings.is_empty() {
        println!(
            "  {} {}",
            bold.apply_to("Warnings:"),
            Style::new().yellow().apply_to(warnings.len())
        );
    }

    if !resolution.failures.is_empty() {
        println!();
        println!(
            "{}",
            Style::new()
                .bold()
                .red()
                .apply_to(format!("Unresolved references ({}):", resolution.failures.len()))
        );
        for failure in &resolution.failures {
            println!(
                "  {}.{} -> {}",
                failure.location, failure.variable, failure.target
            );
        }
    }
}
