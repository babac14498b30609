use crate::boundary::BoundaryWarning;
use crate::domain::{Description, GitTagVersion, TagRef, VersionComponents, VersionTag};
use crate::error::{BuildTasksError, Result};
use crate::git::{Git2Repository, Repository};
use std::path::Path;
use tracing::{debug, warn};

/// Components together with the non-fatal findings made while deriving them
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub components: VersionComponents,
    pub warnings: Vec<BoundaryWarning>,
}

/// Derives version numbers from the latest annotated `v` tag and the
/// distance of head from its nearest tag
pub struct GitVersionAnalyzer {
    build_number: u64,
}

impl GitVersionAnalyzer {
    /// Create a new analyzer; `build_number` goes into the long version
    pub fn new(build_number: u64) -> Self {
        GitVersionAnalyzer { build_number }
    }

    /// Pick the lexically greatest annotated tag starting with `v` or `V`.
    ///
    /// The comparison is ordinal, not version aware: `v1.9.0` sorts after
    /// `v1.10.0`.
    pub fn latest_version_tag(tags: &[TagRef]) -> Option<&str> {
        tags.iter()
            .filter(|tag| tag.annotated && tag.has_version_prefix())
            .map(|tag| tag.name.as_str())
            .max()
    }

    /// Query the repository and extract version components plus warnings
    ///
    /// The version numbers come from the lexically latest tag while the commit
    /// count comes from describe. When those two disagree on the tag the
    /// inconsistent result is kept and a
    /// [BoundaryWarning::LatestTagNotNearest] is attached.
    pub fn derive<R: Repository>(&self, repo: &R) -> Result<Derivation> {
        let tags = repo.tags()?;
        let mut warnings = Vec::new();

        let ignored: Vec<String> = tags
            .iter()
            .filter(|tag| !tag.annotated && tag.has_version_prefix())
            .map(|tag| tag.name.clone())
            .collect();
        if !ignored.is_empty() {
            warnings.push(BoundaryWarning::LightweightTagsIgnored { tags: ignored });
        }

        let latest_tag =
            Self::latest_version_tag(&tags).ok_or(BuildTasksError::NoMatchingTag)?;

        let description = repo.describe_head()?;
        debug!(latest_tag, %description, "resolved repository state");

        let version = VersionTag::parse(latest_tag)?;
        let description = Description::parse(&description)?;

        if description.tag != latest_tag {
            warnings.push(BoundaryWarning::LatestTagNotNearest {
                latest_tag: latest_tag.to_string(),
                described_tag: description.tag.clone(),
            });
        }

        for warning in &warnings {
            warn!("{}", warning);
        }

        Ok(Derivation {
            components: VersionComponents::new(latest_tag, version, description),
            warnings,
        })
    }

    /// Version components without warnings
    pub fn components<R: Repository>(&self, repo: &R) -> Result<VersionComponents> {
        Ok(self.derive(repo)?.components)
    }

    /// Short, long and semantic version strings for the repository
    pub fn analyze<R: Repository>(&self, repo: &R) -> Result<GitTagVersion> {
        let components = self.components(repo)?;
        Ok(GitTagVersion::from_components(&components, self.build_number))
    }
}

impl Default for GitVersionAnalyzer {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Open the repository at `path` and derive its version strings.
///
/// The repository handle is released before returning.
pub fn git_tag_version<P: AsRef<Path>>(path: P, build_number: u64) -> Result<GitTagVersion> {
    let repo = Git2Repository::open(path)?;
    GitVersionAnalyzer::new(build_number).analyze(&repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    fn repo_with(tags: &[&str], description: &str) -> MockRepository {
        let mut repo = MockRepository::new();
        for tag in tags {
            repo.add_annotated_tag(*tag);
        }
        repo.set_description(description);
        repo
    }

    #[test]
    fn test_analyze_dev_build() {
        let repo = repo_with(&["v1.2.0"], "v1.2.0-3-abc1234");
        let version = GitVersionAnalyzer::new(987).analyze(&repo).unwrap();

        assert_eq!(version.short, "1.2.0");
        assert_eq!(version.long, "1.2.987.0");
        assert_eq!(version.semantic, "1.2.0+dev3-abc1234");
    }

    #[test]
    fn test_analyze_tagged_commit() {
        let repo = repo_with(&["v1.2.0"], "v1.2.0-0-abc1234");
        let version = GitVersionAnalyzer::default().analyze(&repo).unwrap();

        assert_eq!(version.long, "1.2.0.0");
        assert_eq!(version.semantic, "1.2.0+abc1234");
    }

    #[test]
    fn test_latest_tag_is_lexical() {
        let tags = vec![
            TagRef::annotated("v1.9.0"),
            TagRef::annotated("v1.10.0"),
            TagRef::annotated("v1.2.0"),
        ];
        assert_eq!(GitVersionAnalyzer::latest_version_tag(&tags), Some("v1.9.0"));
    }

    #[test]
    fn test_latest_tag_skips_lightweight_and_unprefixed() {
        let tags = vec![
            TagRef::annotated("v1.0.0"),
            TagRef::lightweight("v9.0.0"),
            TagRef::annotated("release-5"),
        ];
        assert_eq!(GitVersionAnalyzer::latest_version_tag(&tags), Some("v1.0.0"));
    }

    #[test]
    fn test_uppercase_prefix_is_selected_then_fails_to_parse() {
        // 'V' passes the prefix filter but the version pattern needs 'v'
        let repo = repo_with(&["V2.0.0"], "V2.0.0-0-abc1234");
        let err = GitVersionAnalyzer::default().analyze(&repo).unwrap_err();
        assert!(matches!(err, BuildTasksError::Parse(_)));
    }

    #[test]
    fn test_no_matching_tag() {
        let mut repo = MockRepository::new();
        repo.add_lightweight_tag("v1.0.0");
        repo.add_annotated_tag("release-1");
        repo.set_description("release-1-0-abc1234");

        let err = GitVersionAnalyzer::default().analyze(&repo).unwrap_err();
        assert!(matches!(err, BuildTasksError::NoMatchingTag));
    }

    #[test]
    fn test_malformed_description() {
        let repo = repo_with(&["v1.0.0"], "abc1234");
        let err = GitVersionAnalyzer::default().analyze(&repo).unwrap_err();
        assert!(matches!(err, BuildTasksError::Parse(_)));
    }

    #[test]
    fn test_describe_failure_propagates() {
        let mut repo = MockRepository::new();
        repo.add_annotated_tag("v1.0.0");
        let err = GitVersionAnalyzer::default().analyze(&repo).unwrap_err();
        assert!(matches!(err, BuildTasksError::Git(_)));
    }

    #[test]
    fn test_components() {
        let repo = repo_with(&["v0.3.10"], "v0.3.10-4-gdeadbee");
        let c = GitVersionAnalyzer::default().components(&repo).unwrap();

        assert_eq!((c.major, c.minor, c.revision), (0, 3, 10));
        assert_eq!(c.commits, 4);
        assert_eq!(c.shasum, "gdeadbee");
        assert_eq!(c.latest_tag, "v0.3.10");
        assert_eq!(c.described_tag, "v0.3.10");
    }

    #[test]
    fn test_out_of_order_tags_keep_inconsistent_version() {
        // Lexical order picks v1.9.0 while describe counts from v1.10.0
        let repo = repo_with(&["v1.9.0", "v1.10.0"], "v1.10.0-2-gabc1234");
        let derivation = GitVersionAnalyzer::default().derive(&repo).unwrap();

        let version = GitTagVersion::from_components(&derivation.components, 0);
        assert_eq!(version.semantic, "1.9.0+dev2-gabc1234");
        assert_eq!(
            derivation.warnings,
            vec![BoundaryWarning::LatestTagNotNearest {
                latest_tag: "v1.9.0".to_string(),
                described_tag: "v1.10.0".to_string(),
            }]
        );
    }

    #[test]
    fn test_lightweight_tags_reported() {
        let mut repo = repo_with(&["v1.0.0"], "v1.0.0-1-gabc1234");
        repo.add_lightweight_tag("v2.0.0-local");

        let derivation = GitVersionAnalyzer::default().derive(&repo).unwrap();
        assert_eq!(
            derivation.warnings,
            vec![BoundaryWarning::LightweightTagsIgnored {
                tags: vec!["v2.0.0-local".to_string()],
            }]
        );
    }
}
