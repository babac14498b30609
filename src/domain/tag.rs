use crate::error::{BuildTasksError, Result};
use regex::Regex;

const VERSION_TAG_PATTERN: &str = r"v(?P<major>\d+)\.(?P<minor>\d+)\.(?P<revision>\d+)";

/// A tag as enumerated from a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    /// Annotated tags carry their own tag object; lightweight ones do not
    pub annotated: bool,
}

impl TagRef {
    pub fn annotated(name: impl Into<String>) -> Self {
        TagRef {
            name: name.into(),
            annotated: true,
        }
    }

    pub fn lightweight(name: impl Into<String>) -> Self {
        TagRef {
            name: name.into(),
            annotated: false,
        }
    }

    /// Whether the name starts with `v` or `V`
    pub fn has_version_prefix(&self) -> bool {
        self.name.starts_with(['v', 'V'])
    }
}

/// Version numbers parsed from a `v<major>.<minor>.<revision>` tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionTag {
    pub major: u64,
    pub minor: u64,
    pub revision: u64,
}

impl VersionTag {
    pub fn new(major: u64, minor: u64, revision: u64) -> Self {
        VersionTag {
            major,
            minor,
            revision,
        }
    }

    /// Parse the first `v<major>.<minor>.<revision>` occurrence in a tag name.
    ///
    /// The match is not anchored, so `release-v1.2.3` and `v1.2.3-rc1` both
    /// yield `1.2.3`. A lowercase `v` is required.
    pub fn parse(tag: &str) -> Result<Self> {
        let re = Regex::new(VERSION_TAG_PATTERN)
            .map_err(|e| BuildTasksError::parse(format!("Invalid tag pattern: {}", e)))?;

        let caps = re.captures(tag).ok_or_else(|| {
            BuildTasksError::parse(format!(
                "Tag '{}' does not match 'v<major>.<minor>.<revision>'",
                tag
            ))
        })?;

        let number = |group: &str| -> Result<u64> {
            caps[group].parse::<u64>().map_err(|e| {
                BuildTasksError::parse(format!("Invalid {} in tag '{}': {}", group, tag, e))
            })
        };

        Ok(VersionTag {
            major: number("major")?,
            minor: number("minor")?,
            revision: number("revision")?,
        })
    }
}
