//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

use miette::Diagnostic;
use proda_docker::DockerError;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// A container runtime invocation failed
    #[error("{message}")]
    #[diagnostic(code(proda::cli::docker))]
    Docker {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// IO error (async runtime setup, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(proda::cli::io))]
    Io { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Docker { .. } => exit_codes::DOCKER_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
        }
    }
}

impl From<DockerError> for CliError {
    fn from(err: DockerError) -> Self {
        let help = match &err {
            DockerError::Spawn { program, .. } => Some(format!(
                "Check that '{}' is installed and on your PATH",
                program
            )),
            _ => None,
        };
        CliError::Docker {
            message: err.to_string(),
            help,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
