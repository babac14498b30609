use crate::error::{BuildTasksError, Result};
use crate::platform::{Architecture, OperatingSystem};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "buildtasks.toml";

/// Represents the complete configuration for build-tasks.
///
/// Every value is a fallback for the matching command-line argument.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub package: PackageConfig,
}

/// Project identity used in package names.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: Option<String>,
}

/// Returns the default repository path.
fn default_repository() -> PathBuf {
    PathBuf::from(".")
}

/// Returns the default build number environment variable.
fn default_build_number_env() -> Option<String> {
    Some("BUILD_NUMBER".to_string())
}

/// Configuration for version derivation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_repository")]
    pub repository: PathBuf,

    #[serde(default)]
    pub build_number: u64,

    /// Environment variable consulted for the build number before `build_number`
    #[serde(default = "default_build_number_env")]
    pub build_number_env: Option<String>,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            repository: default_repository(),
            build_number: 0,
            build_number_env: default_build_number_env(),
        }
    }
}

impl VersionConfig {
    /// Resolve the build number from the environment or the configured value.
    ///
    /// An unset or empty variable falls back to `build_number`; a value that
    /// is not a non-negative integer is an error.
    pub fn resolve_build_number(&self) -> Result<u64> {
        let from_env = self
            .build_number_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok().map(|value| (name, value)))
            .filter(|(_, value)| !value.trim().is_empty());

        match from_env {
            Some((name, value)) => value.trim().parse::<u64>().map_err(|_| {
                BuildTasksError::config(format!(
                    "Environment variable {} is not a valid build number: '{}'",
                    name, value
                ))
            }),
            None => Ok(self.build_number),
        }
    }
}

/// Defaults for package name generation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PackageConfig {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub os: Option<OperatingSystem>,

    #[serde(default)]
    pub arch: Option<Architecture>,

    #[serde(default)]
    pub suffix: Option<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `buildtasks.toml` in current directory
/// 3. `buildtasks.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        if !path.is_file() {
            return Err(BuildTasksError::FileNotFound(path.to_path_buf()));
        }
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| BuildTasksError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version.repository, PathBuf::from("."));
        assert_eq!(config.version.build_number, 0);
        assert_eq!(
            config.version.build_number_env.as_deref(),
            Some("BUILD_NUMBER")
        );
        assert_eq!(config.project.name, None);
        assert_eq!(config.package, PackageConfig::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_platform_tokens() {
        let config = parse_config(
            r#"
[package]
os = "windows"
arch = "x64"
"#,
        )
        .unwrap();
        assert_eq!(config.package.os, Some(OperatingSystem::Windows));
        assert_eq!(config.package.arch, Some(Architecture::X64));
    }

    #[test]
    fn test_parse_unknown_arch_fails() {
        let err = parse_config("[package]\narch = \"sparc\"\n").unwrap_err();
        assert!(matches!(err, BuildTasksError::Config(_)));
    }

    #[test]
    fn test_build_number_without_env() {
        let config = VersionConfig {
            repository: default_repository(),
            build_number: 42,
            build_number_env: None,
        };
        assert_eq!(config.resolve_build_number().unwrap(), 42);
    }
}
