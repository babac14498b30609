//! User interface module - terminal output for task results.
//!
//! Results go to stdout; status, warnings and errors go to stderr.

use crate::cli::TaskOutput;

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success, display_version,
    format_version, VersionFormat,
};

/// Print a task result.
///
/// Warnings attached to a version result are shown before the version itself.
pub fn display_output(output: &TaskOutput, format: VersionFormat) {
    match output {
        TaskOutput::Version { version, warnings } => {
            for warning in warnings {
                display_boundary_warning(warning);
            }
            display_version(version, format);
        }
        TaskOutput::PackageName(name) => println!("{}", name),
        TaskOutput::Replaced { path, matched } => {
            display_success(&format!(
                "Updated {} ({} replacement(s) matched)",
                path.display(),
                matched
            ));
        }
    }
}
