//! Version derivation from annotated tags

pub mod version_analyzer;

pub use version_analyzer::{git_tag_version, Derivation, GitVersionAnalyzer};
