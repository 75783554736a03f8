use clap::Parser;
use std::path::PathBuf;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve the packages in the current directory:\n    fuibind resolve\n\n\
                  Print the resolution report as JSON:\n    fuibind resolve --json\n\n\
                  Write the report for a generator:\n    fuibind resolve -a Assets/UI -o model.json")]
pub struct ResolveArgs {
    /// Print the resolution report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Write the JSON report to a file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
