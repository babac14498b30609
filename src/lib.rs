pub mod analyzer;
pub mod args;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod package;
pub mod platform;
pub mod text;
pub mod ui;

pub use analyzer::git_tag_version;
pub use error::{BuildTasksError, Result};
pub use package::{generate_binary_package_name, generate_package_name, generate_source_package_name};
pub use text::replace_in_file;
