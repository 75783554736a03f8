//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - list: List command arguments
//! - panels: Panels command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod panels;
pub mod resolve;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use panels::PanelsArgs;
pub use resolve::ResolveArgs;

/// fuibind - UI package descriptor resolver
///
/// Reads the packages exported by the UI editor and resolves what the binding
/// generators emit.
#[derive(Parser, Debug)]
#[command(
    name = "fuibind",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve UI editor packages into a binding model for code generators",
    long_about = "fuibind parses the package descriptors written by the UI editor, decides which \
                  components are exported, infers the generated type of every bound member and \
                  discovers the sub-panels nested below each package's root panel.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  fuibind resolve -a Assets/UI              \x1b[90m# Resolve and print a summary\x1b[0m\n   \
                  fuibind resolve --json -o model.json      \x1b[90m# Write the resolution report\x1b[0m\n   \
                  fuibind list --detailed                   \x1b[90m# List exported components\x1b[0m\n   \
                  fuibind panels                            \x1b[90m# Show root panels and sub-panels\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Assets directory holding one subdirectory per package
    #[arg(
        long,
        short = 'a',
        global = true,
        env = "FUIBIND_ASSETS",
        default_value = "."
    )]
    pub assets: PathBuf,

    /// Configuration file (defaults to fuibind.yaml in the assets directory)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Also bind members that keep editor-assigned names (n0, c1, ...)
    #[arg(long, global = true)]
    pub include_default_names: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve all packages and report the result
    Resolve(ResolveArgs),

    /// List exported components grouped by package
    List(ListArgs),

    /// Show root panels and the sub-panels reachable from them
    Panels(PanelsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
