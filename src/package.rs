//! Package file name generation.
//!
//! Names have the shape `{project}-{version}-{suffix}`. Spaces in the project
//! name become underscores; any character the host file system rejects in a
//! file name or path makes the argument invalid.

use crate::error::{BuildTasksError, Result};
use crate::platform::{Architecture, OperatingSystem};

/// Suffix used for source packages
pub const SOURCE_SUFFIX: &str = "src";

/// Whether `c` is forbidden in a file name or path segment on this host.
#[cfg(windows)]
pub fn is_invalid_name_char(c: char) -> bool {
    matches!(c, '"' | '<' | '>' | '|' | ':' | '*' | '?' | '\\' | '/') || (c as u32) < 0x20
}

/// Whether `c` is forbidden in a file name or path segment on this host.
#[cfg(not(windows))]
pub fn is_invalid_name_char(c: char) -> bool {
    matches!(c, '\0' | '/')
}

/// All characters rejected by [`is_invalid_name_char`] on this host.
pub fn invalid_name_chars() -> Vec<char> {
    (0u8..=0x7f)
        .map(char::from)
        .filter(|c| is_invalid_name_char(*c))
        .collect()
}

fn validate(argument: &str, value: &str) -> Result<()> {
    match value.chars().find(|c| is_invalid_name_char(*c)) {
        Some(character) => Err(BuildTasksError::IllegalCharacter {
            argument: argument.to_string(),
            value: value.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

/// Generates the file name of a binary package.
///
/// # Example
/// ```
/// # use build_tasks::package::generate_binary_package_name;
/// # use build_tasks::platform::{Architecture, OperatingSystem};
/// let name = generate_binary_package_name(
///     "My Project",
///     "1.3.6",
///     OperatingSystem::Windows,
///     Architecture::X64,
/// )
/// .unwrap();
/// assert_eq!(name, "My_Project-1.3.6-windows-amd64");
/// ```
pub fn generate_binary_package_name(
    project_name: &str,
    version: &str,
    os: OperatingSystem,
    arch: Architecture,
) -> Result<String> {
    generate_package_name(
        project_name,
        version,
        &format!("{}-{}", os.token(), arch.token()),
    )
}

/// Generates the file name of a source package (`{project}-{version}-src`).
pub fn generate_source_package_name(project_name: &str, version: &str) -> Result<String> {
    generate_package_name(project_name, version, SOURCE_SUFFIX)
}

/// Generates a package file name with an arbitrary suffix such as `doc`.
///
/// Arguments are checked in order and the first illegal one is reported.
pub fn generate_package_name(project_name: &str, version: &str, suffix: &str) -> Result<String> {
    validate("project_name", project_name)?;
    validate("version", version)?;
    validate("suffix", suffix)?;

    let project = project_name.replace(' ', "_");

    Ok(format!("{}-{}-{}", project, version, suffix))
}
