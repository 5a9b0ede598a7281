//! High-level client for container runtime operations
//!
//! This module wraps the runtime's command-line client behind typed
//! operations. Every method blocks until the underlying invocation exits;
//! state lives entirely in the external runtime.

use crate::actions::{BuildOptions, RunOptions};
use crate::error::Result;
use crate::invocation::{CommandRunner, ProcessRunner};

/// Default runtime binary
const DEFAULT_BINARY: &str = "docker";

/// High-level client for the container runtime CLI
pub struct DockerClient<R: CommandRunner> {
    /// Invocation backend
    runner: R,

    /// Runtime binary name (`docker` unless overridden)
    binary: String,
}

impl DockerClient<ProcessRunner> {
    /// Create a client backed by real subprocesses
    pub fn new() -> Self {
        Self::with_runner(ProcessRunner)
    }
}

impl Default for DockerClient<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> DockerClient<R> {
    /// Create a client with a custom invocation backend
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            binary: DEFAULT_BINARY.to_string(),
        }
    }

    /// Use a different runtime binary (e.g. `podman`)
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Build an image from a build file and context
    pub async fn build_image(&self, options: &BuildOptions) -> Result<()> {
        self.runner.run(&self.binary, &options.to_args()).await
    }

    /// Force-remove a container by name
    ///
    /// Returns `Ok(false)` when the runtime reports a non-zero exit, which
    /// on first deploy just means there was nothing to remove. Failing to
    /// launch the runtime at all still propagates.
    pub async fn remove_container(&self, name: &str) -> Result<bool> {
        let args = vec!["rm".to_string(), "-f".to_string(), name.to_string()];
        match self.runner.run(&self.binary, &args).await {
            Ok(()) => Ok(true),
            Err(err) if err.is_nonzero_exit() => {
                tracing::debug!("ignoring removal failure for '{}': {}", name, err);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Start a container detached from the calling process
    pub async fn run_container(&self, options: &RunOptions) -> Result<()> {
        self.runner.run(&self.binary, &options.to_args()).await
    }

    /// Follow a container's log stream
    ///
    /// Does not return until the stream ends or the child is interrupted.
    pub async fn follow_logs(&self, name: &str) -> Result<()> {
        let args = vec!["logs".to_string(), "-f".to_string(), name.to_string()];
        self.runner.run(&self.binary, &args).await
    }

    /// Restart a container by name
    pub async fn restart_container(&self, name: &str) -> Result<()> {
        let args = vec!["restart".to_string(), name.to_string()];
        self.runner.run(&self.binary, &args).await
    }
}
