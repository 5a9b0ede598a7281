//! Error types for proda-docker

use thiserror::Error;

/// Result type for proda-docker operations
pub type Result<T> = std::result::Result<T, DockerError>;

/// Errors that can occur while driving the container runtime CLI
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DockerError {
    /// The runtime binary could not be launched at all
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The runtime ran and reported a non-zero exit status
    #[error("`{command}` exited with status {code}")]
    CommandFailed { command: String, code: i32 },

    /// The runtime was killed by a signal before reporting a status
    #[error("`{command}` was terminated by a signal")]
    Terminated { command: String },
}

impl DockerError {
    /// Check if this is a plain non-zero exit from the runtime
    ///
    /// This is the one failure class callers may choose to tolerate
    /// (removing a container that does not exist).
    pub fn is_nonzero_exit(&self) -> bool {
        matches!(self, DockerError::CommandFailed { .. })
    }
}
