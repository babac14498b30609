//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are unit tested; `display_*`
//! functions print them.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::GitTagVersion;

/// Which version string(s) to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum VersionFormat {
    Short,
    Long,
    Semantic,
    /// One `key=value` line per format
    #[default]
    All,
}

/// Render the requested version string(s).
///
/// Single formats yield the bare value so scripts can capture it directly.
pub fn format_version(version: &GitTagVersion, format: VersionFormat) -> String {
    match format {
        VersionFormat::Short => version.short.clone(),
        VersionFormat::Long => version.long.clone(),
        VersionFormat::Semantic => version.semantic.clone(),
        VersionFormat::All => format!(
            "short={}\nlong={}\nsemantic={}",
            version.short, version.long, version.semantic
        ),
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print the version result on stdout.
pub fn display_version(version: &GitTagVersion, format: VersionFormat) {
    println!("{}", format_version(version, format));
}
