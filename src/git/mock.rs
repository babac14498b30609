use crate::domain::TagRef;
use crate::error::{BuildTasksError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<TagRef>,
    description: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            description: None,
        }
    }

    /// Add an annotated tag
    pub fn add_annotated_tag(&mut self, name: impl Into<String>) {
        self.tags.push(TagRef::annotated(name));
    }

    /// Add a lightweight tag
    pub fn add_lightweight_tag(&mut self, name: impl Into<String>) {
        self.tags.push(TagRef::lightweight(name));
    }

    /// Set the string returned by `describe_head`
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn tags(&self) -> Result<Vec<TagRef>> {
        Ok(self.tags.clone())
    }

    fn describe_head(&self) -> Result<String> {
        self.description.clone().ok_or_else(|| {
            BuildTasksError::Git(git2::Error::from_str(
                "No annotated tags can describe head",
            ))
        })
    }
}
