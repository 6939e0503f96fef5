//! Error types for belgianlake.
//!
//! Errors raised while loading the record store are fatal and surface before the
//! interactive screen starts. Errors raised afterwards (a failed save, a terminal
//! hiccup) are recovered locally and shown as status feedback.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for belgianlake operations.
#[derive(Error, Debug)]
pub enum LakeError {
    /// A store line is not a well-formed record.
    #[error("Malformed record at line {line}: {message}")]
    FormatError {
        /// 1-based line number in the store file.
        line: usize,
        /// Human-readable error message.
        message: String,
        /// Underlying serde_json error, if available.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Store file not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Permission denied when accessing a file.
    #[error("Permission denied: {path}")]
    PermissionDenied {
        /// Path where access was denied.
        path: PathBuf,
    },

    /// I/O error.
    #[error("I/O error: {context}")]
    IoError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {context}")]
    SerializationError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Human-readable error message.
        message: String,
    },

    /// Invalid configuration file contents.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Human-readable error message.
        message: String,
    },

    /// Terminal front end error.
    #[error("TUI error: {message}")]
    TuiError {
        /// Human-readable error message.
        message: String,
    },
}

impl LakeError {
    /// Create a new format error with source.
    #[must_use]
    pub fn format_with_source(line: usize, message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::FormatError {
            line,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            context: context.into(),
            source,
        }
    }

    /// Create a new TUI error.
    #[must_use]
    pub fn tui(message: impl Into<String>) -> Self {
        Self::TuiError {
            message: message.into(),
        }
    }

    /// Map an `open`-style I/O failure on `path` to the most specific variant.
    #[must_use]
    pub fn from_open(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::io(format!("Failed to open {}", path.display()), err),
        }
    }

    /// Get the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::FormatError { .. } => exit_codes::EXIT_FORMAT_ERROR,
            Self::FileNotFound { .. } => exit_codes::EXIT_FILE_NOT_FOUND,
            Self::PermissionDenied { .. } => exit_codes::EXIT_PERMISSION_DENIED,
            Self::ConfigError { .. } | Self::InvalidConfig { .. } => exit_codes::EXIT_CONFIG_ERROR,
            Self::IoError { .. } => exit_codes::EXIT_IO_ERROR,
            _ => exit_codes::EXIT_GENERAL_ERROR,
        }
    }
}

/// Result type alias for belgianlake operations.
pub type Result<T> = std::result::Result<T, LakeError>;

impl From<std::io::Error> for LakeError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for LakeError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            context: "JSON operation failed".to_string(),
            source: err,
        }
    }
}

/// Exit codes for CLI operations.
pub mod exit_codes {
    /// General/unspecified error.
    pub const EXIT_GENERAL_ERROR: i32 = 1;
    /// A store line could not be parsed.
    pub const EXIT_FORMAT_ERROR: i32 = 2;
    /// Store file not found.
    pub const EXIT_FILE_NOT_FOUND: i32 = 3;
    /// Insufficient permissions.
    pub const EXIT_PERMISSION_DENIED: i32 = 4;
    /// Invalid configuration.
    pub const EXIT_CONFIG_ERROR: i32 = 5;
    /// I/O error (BSD standard).
    pub const EXIT_IO_ERROR: i32 = 74;
}
