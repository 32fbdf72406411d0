//! Shared CLI plumbing: error taxonomy and exit codes.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes for scripting.
///
/// 0 is success; 1 is reserved for unexpected panics; the codes below let
/// scripts distinguish user error from environment error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed.
    Success,
    /// Input failed validation before any work happened.
    Validation,
    /// File system or image I/O failed.
    Io,
    /// Input file was readable but malformed.
    Parse,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Validation => 2,
            Self::Io => 3,
            Self::Parse => 4,
        }
    }
}

/// Kind of CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    Validation,
    Io,
    Parse,
}

/// A CLI-level error with a user-facing message.
#[derive(Debug)]
pub struct CliError {
    kind: ErrorKind,
    message: String,
}

impl CliError {
    /// A validation failure: bad arguments, impossible request.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// An I/O failure: missing file, unwritable output.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
        }
    }

    /// A parse failure: unreadable image or stash file.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Parse,
            message: message.into(),
        }
    }

    /// The exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            ErrorKind::Validation => ExitCode::Validation,
            ErrorKind::Io => ExitCode::Io,
            ErrorKind::Parse => ExitCode::Parse,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}
