use std::fmt;

/// Warnings that occur when deriving a version near the edges of the tag model.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The lexically greatest tag supplied the version numbers but describe
    /// counted commits from a different tag. Happens when tags were created
    /// out of order or do not sort lexically (`v1.10.0` < `v1.9.0`).
    LatestTagNotNearest {
        latest_tag: String,
        described_tag: String,
    },
    /// Lightweight tags with a `v` prefix were skipped
    LightweightTagsIgnored { tags: Vec<String> },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::LatestTagNotNearest {
                latest_tag,
                described_tag,
            } => {
                write!(
                    f,
                    "Version taken from tag '{}' but commits counted from nearest tag '{}'",
                    latest_tag, described_tag
                )
            }
            BoundaryWarning::LightweightTagsIgnored { tags } => {
                let shown: Vec<&str> = tags.iter().take(5).map(String::as_str).collect();
                write!(
                    f,
                    "Ignored {} lightweight tag(s): {}",
                    tags.len(),
                    shown.join(", ")
                )?;
                if tags.len() > 5 {
                    write!(f, ", ...")?;
                }
                Ok(())
            }
        }
    }
}
