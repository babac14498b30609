//! Git access abstraction layer
//!
//! Version derivation only needs two things from a repository: the list of
//! tags and a long-format description of the head commit. Both are behind the
//! [Repository] trait so the derivation can run against a real repository or
//! a fake.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use build_tasks::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let annotated: Vec<_> = repo.tags()?.into_iter().filter(|t| t.annotated).collect();
//! let description = repo.describe_head()?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::TagRef;
use crate::error::Result;

/// Read-only repository queries used by version derivation
pub trait Repository {
    /// All tags in the repository with their annotated flag
    ///
    /// Order is unspecified; callers sort as needed.
    fn tags(&self) -> Result<Vec<TagRef>>;

    /// Describe the head commit against annotated tags
    ///
    /// Always returns the long form `<tag>-<commits>-<abbreviated id>`, even
    /// when head is the tagged commit (`<tag>-0-<abbreviated id>`).
    ///
    /// # Returns
    /// * `Ok(String)` - The description
    /// * `Err` - If head is unborn or no annotated tag is reachable
    fn describe_head(&self) -> Result<String>;
}
