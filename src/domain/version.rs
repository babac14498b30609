use crate::domain::{Description, VersionTag};
use crate::error::{BuildTasksError, Result};
use std::fmt;

/// Marker used in the semantic label of untagged development builds
pub const DEV_MARKER: &str = "dev";

/// Version information extracted from a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionComponents {
    pub major: u64,
    pub minor: u64,
    pub revision: u64,
    /// Commits since the nearest tag
    pub commits: u64,
    /// Abbreviated object name of head
    pub shasum: String,
    /// Lexically greatest annotated `v` tag, the source of the numbers
    pub latest_tag: String,
    /// Tag that describe found nearest to head, the source of `commits`
    pub described_tag: String,
}

impl VersionComponents {
    pub fn new(latest_tag: &str, version: VersionTag, description: Description) -> Self {
        VersionComponents {
            major: version.major,
            minor: version.minor,
            revision: version.revision,
            commits: description.commits,
            shasum: description.shasum,
            latest_tag: latest_tag.to_string(),
            described_tag: description.tag,
        }
    }

    /// `shasum` on a tagged commit, `dev<commits>-<shasum>` otherwise
    pub fn label(&self) -> String {
        if self.commits == 0 {
            self.shasum.clone()
        } else {
            format!("{}{}-{}", DEV_MARKER, self.commits, self.shasum)
        }
    }
}

/// The three version strings derived from a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitTagVersion {
    /// `MAJOR.MINOR.REVISION`
    pub short: String,
    /// `MAJOR.MINOR.BUILD.REVISION`
    pub long: String,
    /// `MAJOR.MINOR.REVISION+LABEL`
    pub semantic: String,
}

impl GitTagVersion {
    pub fn from_components(components: &VersionComponents, build_number: u64) -> Self {
        let VersionComponents {
            major,
            minor,
            revision,
            ..
        } = components;

        GitTagVersion {
            short: format!("{}.{}.{}", major, minor, revision),
            long: format!("{}.{}.{}.{}", major, minor, build_number, revision),
            semantic: format!("{}.{}.{}+{}", major, minor, revision, components.label()),
        }
    }

    /// Parse the semantic string as a SemVer version with build metadata
    pub fn to_semver(&self) -> Result<semver::Version> {
        semver::Version::parse(&self.semantic).map_err(|e| {
            BuildTasksError::parse(format!(
                "'{}' is not a valid semantic version: {}",
                self.semantic, e
            ))
        })
    }
}

impl fmt::Display for GitTagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.semantic)
    }
}
