use std::io::ErrorKind;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The editor `{}` exited with non-success status: {}", .editor, .status)]
    SubProcessExit { editor: String, status: ExitStatus },

    #[error("Error launching editor `{}`: {}", .editor, .original)]
    SubProcess {
        editor: String,
        original: std::io::Error,
    },

    #[error("No {} found at `{}`", .description, .path)]
    NotFound { description: String, path: String },

    #[error("IO error with {} at path `{}`: {}", .description, .path, .original)]
    Io {
        description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error reading settings file at `{}`: {}", .path, .original)]
    Settings { path: String, original: ini::Error },

    #[error("Invalid input: {}", .0)]
    InvalidInput(String),

    #[error("Invalid name `{}`: names may not be empty, `.`, `..` or contain path separators", .0)]
    InvalidName(String),

    #[error("Usage: cher {}", .0)]
    Usage(String),

    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    /// Wraps a filesystem error, reporting a missing path as [`Error::NotFound`].
    pub fn io_error(description: &str, path: &str, original: std::io::Error) -> Self {
        if original.kind() == ErrorKind::NotFound {
            return Self::NotFound {
                description: description.to_string(),
                path: path.to_string(),
            };
        }

        Self::Io {
            description: description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn not_found(description: &str, path: &str) -> Self {
        Self::NotFound {
            description: description.to_string(),
            path: path.to_string(),
        }
    }

    pub fn settings_error(path: &str, original: ini::Error) -> Self {
        Self::Settings {
            path: path.to_string(),
            original,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_missing_path_to_not_found() {
        let original = std::io::Error::new(ErrorKind::NotFound, "gone");
        let error = Error::io_error("language directory", "/tmp/Cher/go", original);
        assert!(error.is_not_found());
        assert_eq!(
            error.to_string(),
            "No language directory found at `/tmp/Cher/go`"
        );
    }

    #[test]
    fn test_io_error_keeps_other_kinds() {
        let original = std::io::Error::new(ErrorKind::PermissionDenied, "nope");
        let error = Error::io_error("snippet", "/tmp/Cher/go/std.editorconfig", original);
        assert!(matches!(error, Error::Io { .. }));
    }
}
