use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List exported components:\n    fuibind list\n\n\
                  Show bound members and their types:\n    fuibind list --detailed\n\n\
                  Use verbose output:\n    fuibind list -v")]
pub struct ListArgs {
    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,
}
