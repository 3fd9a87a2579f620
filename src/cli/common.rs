//! Shared CLI error and exit-code types.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Input could not be loaded or written.
    Io = 1,
    /// Input was loaded but failed validation.
    Validation = 2,
    /// Command line arguments were inconsistent.
    Usage = 3,
}

/// A CLI command failure with its exit code class.
#[derive(Debug)]
pub struct CliError {
    code: ExitCode,
    message: String,
}

impl CliError {
    /// I/O or load failure.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Validation failure.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Argument usage failure.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Usage,
            message: message.into(),
        }
    }

    /// The process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}
