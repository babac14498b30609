use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for build-tasks operations
#[derive(Error, Debug)]
pub enum BuildTasksError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Missing argument: '{0}' must be provided")]
    MissingArgument(String),

    #[error("Illegal character {character:?} in argument '{argument}': {value:?}")]
    IllegalCharacter {
        argument: String,
        value: String,
        character: char,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Repository not found at {}: {source}", .path.display())]
    RepositoryNotFound {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("No annotated tag matching 'v<major>.<minor>.<revision>' found")]
    NoMatchingTag,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in build-tasks
pub type Result<T> = std::result::Result<T, BuildTasksError>;

impl BuildTasksError {
    /// Create a missing argument error for the named argument
    pub fn missing(argument: impl Into<String>) -> Self {
        BuildTasksError::MissingArgument(argument.into())
    }

    /// Create a generic invalid argument error
    pub fn invalid(msg: impl Into<String>) -> Self {
        BuildTasksError::InvalidArgument(msg.into())
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        BuildTasksError::Parse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BuildTasksError::Config(msg.into())
    }

    /// True for every flavour of rejected caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            BuildTasksError::MissingArgument(_)
                | BuildTasksError::IllegalCharacter { .. }
                | BuildTasksError::InvalidArgument(_)
        )
    }

    /// True when a referenced file or repository does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BuildTasksError::FileNotFound(_) | BuildTasksError::RepositoryNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuildTasksError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BuildTasksError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_missing_argument_display() {
        let err = BuildTasksError::missing("project_name");
        assert_eq!(
            err.to_string(),
            "Missing argument: 'project_name' must be provided"
        );
    }

    #[test]
    fn test_illegal_character_display() {
        let err = BuildTasksError::IllegalCharacter {
            argument: "version".to_string(),
            value: "1/0".to_string(),
            character: '/',
        };
        let msg = err.to_string();
        assert!(msg.contains("'/'"));
        assert!(msg.contains("version"));
        assert!(msg.contains("\"1/0\""));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = BuildTasksError::FileNotFound(PathBuf::from("/tmp/missing.txt"));
        assert_eq!(err.to_string(), "File /tmp/missing.txt not found");
    }

    #[test]
    fn test_invalid_argument_kinds() {
        let invalid = vec![
            BuildTasksError::missing("x"),
            BuildTasksError::invalid("x"),
            BuildTasksError::IllegalCharacter {
                argument: "x".to_string(),
                value: "/".to_string(),
                character: '/',
            },
        ];

        for err in invalid {
            assert!(err.is_invalid_argument(), "{} should be invalid", err);
            assert!(!err.is_not_found());
        }

        assert!(!BuildTasksError::parse("x").is_invalid_argument());
        assert!(!BuildTasksError::NoMatchingTag.is_invalid_argument());
    }

    #[test]
    fn test_not_found_kinds() {
        assert!(BuildTasksError::FileNotFound(PathBuf::from("a")).is_not_found());

        let err = BuildTasksError::RepositoryNotFound {
            path: PathBuf::from("repo"),
            source: git2::Error::from_str("could not find repository"),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("repo"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BuildTasksError::config("x"), "Configuration error"),
            (BuildTasksError::parse("x"), "Parse error"),
            (BuildTasksError::invalid("x"), "Invalid argument"),
            (BuildTasksError::missing("x"), "Missing argument"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
