//! Progress bar display for package parsing

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display while package directories are parsed
///
/// Draws to stderr and stays hidden when stderr is not a terminal.
pub struct ProgressDisplay {
    package_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total package count
    pub fn new(total_packages: u64) -> Self {
        let style = ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let package_pb = ProgressBar::new(total_packages);
        package_pb.set_style(style);

        Self { package_pb }
    }

    /// Show the package being parsed and advance
    pub fn update_package(&self, package_name: &str) {
        self.package_pb.set_message(package_name.to_string());
        self.package_pb.inc(1);
    }

    /// Remove the bar once every package is parsed
    pub fn finish(&self) {
        self.package_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.package_pb.abandon();
    }
}
