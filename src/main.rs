use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use build_tasks::cli::{run_task, Task};
use build_tasks::config;
use build_tasks::platform::{Architecture, OperatingSystem};
use build_tasks::ui::{self, VersionFormat};

#[derive(clap::Parser)]
#[command(
    name = "build-tasks",
    about = "Build helpers: versions from git tags, package names and text replacement",
    version
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Derive version numbers from the latest annotated v<major>.<minor>.<revision> tag
    Version {
        #[arg(short, long, help = "Repository root (default: from config, then '.')")]
        repository: Option<PathBuf>,

        #[arg(short, long, help = "Build number for the long version")]
        build_number: Option<u64>,

        #[arg(short, long, value_enum, default_value_t = VersionFormat::All)]
        format: VersionFormat,
    },

    /// Generate a package file name
    Package {
        #[command(subcommand)]
        kind: PackageKind,
    },

    /// Replace literal text in a file, in order
    Replace {
        #[arg(help = "File to rewrite in place")]
        file: Option<PathBuf>,

        #[arg(
            short = 's',
            long = "set",
            value_name = "SEARCH=REPLACEMENT",
            value_parser = parse_replacement
        )]
        replacements: Vec<(String, String)>,
    },
}

#[derive(clap::Subcommand)]
enum PackageKind {
    /// {project}-{version}-{os}-{arch}
    Binary {
        #[arg(short, long)]
        project: Option<String>,
        #[arg(short, long)]
        version: Option<String>,
        #[arg(long, value_enum, help = "Target OS (default: from config, then host)")]
        os: Option<OperatingSystem>,
        #[arg(long, value_enum, help = "Target architecture (default: from config, then host)")]
        arch: Option<Architecture>,
    },
    /// {project}-{version}-src
    Source {
        #[arg(short, long)]
        project: Option<String>,
        #[arg(short, long)]
        version: Option<String>,
    },
    /// {project}-{version}-{suffix}
    Generic {
        #[arg(short, long)]
        project: Option<String>,
        #[arg(short, long)]
        version: Option<String>,
        #[arg(short, long)]
        suffix: Option<String>,
    },
}

/// Split `SEARCH=REPLACEMENT` at the first `=`.
fn parse_replacement(s: &str) -> std::result::Result<(String, String), String> {
    let (search, replacement) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SEARCH=REPLACEMENT, got '{}'", s))?;
    Ok((search.to_string(), replacement.to_string()))
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "build_tasks=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    let mut format = VersionFormat::All;

    let task = match args.command {
        Command::Version {
            repository,
            build_number,
            format: requested,
        } => {
            format = requested;
            Task::Version {
                repository,
                build_number,
            }
        }
        Command::Package { kind } => match kind {
            PackageKind::Binary {
                project,
                version,
                os,
                arch,
            } => Task::BinaryPackage {
                project,
                version,
                os,
                arch,
            },
            PackageKind::Source { project, version } => Task::SourcePackage { project, version },
            PackageKind::Generic {
                project,
                version,
                suffix,
            } => Task::Package {
                project,
                version,
                suffix,
            },
        },
        Command::Replace { file, replacements } => {
            if replacements.is_empty() {
                ui::display_status("No replacements given, file will be rewritten unchanged");
            }
            Task::Replace {
                path: file,
                replacements,
            }
        }
    };

    let output = run_task(task, &config)?;
    ui::display_output(&output, format);

    Ok(())
}
