//! Task dispatch
//!
//! Resolves each task's arguments against the configuration and runs the
//! matching library operation. Kept free of clap so tasks can be run
//! programmatically and tested without a process.

use std::path::PathBuf;

use crate::analyzer::GitVersionAnalyzer;
use crate::args::require;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::GitTagVersion;
use crate::error::Result;
use crate::git::Git2Repository;
use crate::package;
use crate::platform::{Architecture, OperatingSystem};
use crate::text;

/// A single build task with its raw, possibly absent, arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Version {
        repository: Option<PathBuf>,
        build_number: Option<u64>,
    },
    BinaryPackage {
        project: Option<String>,
        version: Option<String>,
        os: Option<OperatingSystem>,
        arch: Option<Architecture>,
    },
    SourcePackage {
        project: Option<String>,
        version: Option<String>,
    },
    Package {
        project: Option<String>,
        version: Option<String>,
        suffix: Option<String>,
    },
    Replace {
        path: Option<PathBuf>,
        replacements: Vec<(String, String)>,
    },
}

/// Result of a successful task
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutput {
    Version {
        version: GitTagVersion,
        warnings: Vec<BoundaryWarning>,
    },
    PackageName(String),
    Replaced {
        path: PathBuf,
        matched: usize,
    },
}

/// Run a task, filling absent arguments from `config`
///
/// # Returns
///
/// The task output, or the first error encountered. Arguments that are absent
/// both on the task and in the configuration are reported as missing.
pub fn run_task(task: Task, config: &Config) -> Result<TaskOutput> {
    match task {
        Task::Version {
            repository,
            build_number,
        } => {
            let build_number = match build_number {
                Some(n) => n,
                None => config.version.resolve_build_number()?,
            };
            let path = repository.unwrap_or_else(|| config.version.repository.clone());

            let repo = Git2Repository::open(&path)?;
            let derivation = GitVersionAnalyzer::new(build_number).derive(&repo)?;

            Ok(TaskOutput::Version {
                version: GitTagVersion::from_components(&derivation.components, build_number),
                warnings: derivation.warnings,
            })
        }
        Task::BinaryPackage {
            project,
            version,
            os,
            arch,
        } => {
            let (project, version) = resolve_name_parts(project, version, config)?;
            let os = os
                .or(config.package.os)
                .unwrap_or_else(OperatingSystem::current);
            let arch = arch
                .or(config.package.arch)
                .unwrap_or_else(Architecture::current);

            package::generate_binary_package_name(&project, &version, os, arch)
                .map(TaskOutput::PackageName)
        }
        Task::SourcePackage { project, version } => {
            let (project, version) = resolve_name_parts(project, version, config)?;

            package::generate_source_package_name(&project, &version).map(TaskOutput::PackageName)
        }
        Task::Package {
            project,
            version,
            suffix,
        } => {
            let (project, version) = resolve_name_parts(project, version, config)?;
            let suffix = require("suffix", suffix.or_else(|| config.package.suffix.clone()))?;

            package::generate_package_name(&project, &version, &suffix)
                .map(TaskOutput::PackageName)
        }
        Task::Replace { path, replacements } => {
            let path = require("file", path)?;
            let pairs: Vec<(&str, &str)> = replacements
                .iter()
                .map(|(search, replacement)| (search.as_str(), replacement.as_str()))
                .collect();

            let matched = text::replace_in_file(&path, &pairs)?;

            Ok(TaskOutput::Replaced { path, matched })
        }
    }
}

fn resolve_name_parts(
    project: Option<String>,
    version: Option<String>,
    config: &Config,
) -> Result<(String, String)> {
    let project = require(
        "project_name",
        project.or_else(|| config.project.name.clone()),
    )?;
    let version = require("version", version.or_else(|| config.package.version.clone()))?;
    Ok((project, version))
}
