use crate::domain::TagRef;
use crate::error::{BuildTasksError, Result};
use git2::{DescribeFormatOptions, DescribeOptions, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository rooted at `path`
    ///
    /// `path` may be the working tree root or the `.git` directory. Parent
    /// directories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let repo = Git2Repo::open(path).map_err(|e| match e.code() {
            git2::ErrorCode::NotFound => BuildTasksError::RepositoryNotFound {
                path: path.to_path_buf(),
                source: e,
            },
            _ => BuildTasksError::Git(e),
        })?;

        debug!(path = %path.display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn tags(&self) -> Result<Vec<TagRef>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;

            // Annotated tags point at a tag object, lightweight ones straight at a commit
            let annotated = reference
                .target()
                .map(|oid| self.repo.find_tag(oid).is_ok())
                .unwrap_or(false);

            tags.push(TagRef {
                name: name.to_string(),
                annotated,
            });
        }

        Ok(tags)
    }

    fn describe_head(&self) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;

        let describe = head.as_object().describe(&DescribeOptions::new())?;

        let mut format = DescribeFormatOptions::new();
        format.always_use_long_format(true);

        let description = describe.format(Some(&format))?;
        debug!(head = %head.id(), %description, "described head");

        Ok(description)
    }
}
