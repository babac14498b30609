use crate::error::{BuildTasksError, Result};
use regex::Regex;

const DESCRIPTION_PATTERN: &str = r"(?P<tag>.*)-(?P<commits>\d+)-(?P<shasum>.*)";

/// Parsed long-format describe output (`<tag>-<commits>-<shasum>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// Nearest tag reachable from head
    pub tag: String,
    /// Commits between that tag and head; zero when head is the tagged commit
    pub commits: u64,
    /// Abbreviated object name of head exactly as describe printed it
    pub shasum: String,
}

impl Description {
    /// Parse a describe string such as `v1.2.0-3-gabc1234`.
    ///
    /// The tag part is greedy, so tags containing dashes are kept whole.
    pub fn parse(description: &str) -> Result<Self> {
        let re = Regex::new(DESCRIPTION_PATTERN)
            .map_err(|e| BuildTasksError::parse(format!("Invalid description pattern: {}", e)))?;

        let caps = re.captures(description).ok_or_else(|| {
            BuildTasksError::parse(format!(
                "Description '{}' does not match '<tag>-<commits>-<shasum>'",
                description
            ))
        })?;

        let commits = caps["commits"].parse::<u64>().map_err(|e| {
            BuildTasksError::parse(format!(
                "Invalid commit count in '{}': {}",
                description, e
            ))
        })?;

        Ok(Description {
            tag: caps["tag"].to_string(),
            commits,
            shasum: caps["shasum"].to_string(),
        })
    }

    /// Whether head is the tagged commit itself
    pub fn is_tagged_commit(&self) -> bool {
        self.commits == 0
    }
}
