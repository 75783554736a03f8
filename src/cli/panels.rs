use clap::Parser;

/// Arguments for the panels command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show every root panel:\n    fuibind panels\n\n\
                  Show one package's panel:\n    fuibind panels Login")]
pub struct PanelsArgs {
    /// Only show the panel of this package (name or id)
    pub package: Option<String>,
}
