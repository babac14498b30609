//! Domain logic - version tags, describe output and derived versions, independent of git access

pub mod description;
pub mod tag;
pub mod version;

pub use description::Description;
pub use tag::{TagRef, VersionTag};
pub use version::{GitTagVersion, VersionComponents, DEV_MARKER};
