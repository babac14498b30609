//! Target platform vocabulary used in binary package names.
//!
//! Both enums map every variant to a fixed lowercase token which is written
//! verbatim into package file names.

use crate::error::{BuildTasksError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target operating system of a binary package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum OperatingSystem {
    #[serde(rename = "any")]
    #[value(name = "any")]
    Any,

    #[serde(rename = "windows", alias = "win")]
    #[value(name = "windows", alias = "win")]
    Windows,

    #[serde(rename = "linux")]
    #[value(name = "linux")]
    Linux,

    #[serde(rename = "macos", alias = "osx", alias = "darwin")]
    #[value(name = "macos", alias = "osx", alias = "darwin")]
    MacOs,
}

impl OperatingSystem {
    /// Canonical token used in package names
    pub fn token(&self) -> &'static str {
        match self {
            OperatingSystem::Any => "any",
            OperatingSystem::Windows => "windows",
            OperatingSystem::Linux => "linux",
            OperatingSystem::MacOs => "macos",
        }
    }

    /// The operating system this binary was compiled for
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => OperatingSystem::Windows,
            "linux" => OperatingSystem::Linux,
            "macos" => OperatingSystem::MacOs,
            _ => OperatingSystem::Any,
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for OperatingSystem {
    type Err = BuildTasksError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(OperatingSystem::Any),
            "windows" | "win" => Ok(OperatingSystem::Windows),
            "linux" => Ok(OperatingSystem::Linux),
            "macos" | "osx" | "darwin" => Ok(OperatingSystem::MacOs),
            other => Err(BuildTasksError::invalid(format!(
                "Unknown operating system '{}'",
                other
            ))),
        }
    }
}

/// Target processor architecture of a binary package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Architecture {
    #[serde(rename = "any", alias = "anycpu")]
    #[value(name = "any", alias = "anycpu")]
    AnyCpu,

    /// x86, i386
    #[serde(rename = "i386", alias = "x86")]
    #[value(name = "i386", alias = "x86")]
    X86,

    /// x64, amd64, x86_64
    #[serde(rename = "amd64", alias = "x64", alias = "x86_64")]
    #[value(name = "amd64", alias = "x64", alias = "x86_64")]
    X64,

    #[serde(rename = "ia64")]
    #[value(name = "ia64")]
    Ia64,
}

impl Architecture {
    /// Canonical token used in package names
    pub fn token(&self) -> &'static str {
        match self {
            Architecture::AnyCpu => "any",
            Architecture::X86 => "i386",
            Architecture::X64 => "amd64",
            Architecture::Ia64 => "ia64",
        }
    }

    /// The architecture this binary was compiled for
    pub fn current() -> Self {
        match std::env::consts::ARCH {
            "x86" => Architecture::X86,
            "x86_64" => Architecture::X64,
            _ => Architecture::AnyCpu,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Architecture {
    type Err = BuildTasksError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" | "anycpu" => Ok(Architecture::AnyCpu),
            "i386" | "x86" => Ok(Architecture::X86),
            "amd64" | "x64" | "x86_64" => Ok(Architecture::X64),
            "ia64" => Ok(Architecture::Ia64),
            other => Err(BuildTasksError::invalid(format!(
                "Unknown architecture '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_tokens() {
        assert_eq!(OperatingSystem::Any.token(), "any");
        assert_eq!(OperatingSystem::Windows.token(), "windows");
        assert_eq!(OperatingSystem::Linux.token(), "linux");
        assert_eq!(OperatingSystem::MacOs.token(), "macos");
    }

    #[test]
    fn test_arch_tokens() {
        assert_eq!(Architecture::AnyCpu.token(), "any");
        assert_eq!(Architecture::X86.token(), "i386");
        assert_eq!(Architecture::X64.token(), "amd64");
        assert_eq!(Architecture::Ia64.token(), "ia64");
    }

    #[test]
    fn test_display_matches_token() {
        assert_eq!(Architecture::X64.to_string(), "amd64");
        assert_eq!(OperatingSystem::Windows.to_string(), "windows");
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("x64".parse::<Architecture>().unwrap(), Architecture::X64);
        assert_eq!("X86_64".parse::<Architecture>().unwrap(), Architecture::X64);
        assert_eq!("x86".parse::<Architecture>().unwrap(), Architecture::X86);
        assert_eq!("osx".parse::<OperatingSystem>().unwrap(), OperatingSystem::MacOs);
        assert_eq!(
            " Windows ".parse::<OperatingSystem>().unwrap(),
            OperatingSystem::Windows
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "sparc".parse::<Architecture>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!("beos".parse::<OperatingSystem>().is_err());
    }

    #[test]
    fn test_token_round_trips_through_from_str() {
        for arch in [
            Architecture::AnyCpu,
            Architecture::X86,
            Architecture::X64,
            Architecture::Ia64,
        ] {
            assert_eq!(arch.token().parse::<Architecture>().unwrap(), arch);
        }
    }

    #[test]
    fn test_current_is_consistent() {
        #[cfg(target_os = "linux")]
        assert_eq!(OperatingSystem::current(), OperatingSystem::Linux);
        #[cfg(target_arch = "x86_64")]
        assert_eq!(Architecture::current(), Architecture::X64);
        let _ = (OperatingSystem::current(), Architecture::current());
    }
}
