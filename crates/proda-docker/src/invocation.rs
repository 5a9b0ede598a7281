//! Subprocess invocation layer
//!
//! Everything the client does ends up here: a [`CommandRunner`] receives a
//! program name and argv, runs it to completion with inherited stdio, and
//! reports the exit as a [`Result`]. The real [`ProcessRunner`] spawns
//! through `tokio::process`; the [`MockRunner`] records invocations in
//! memory so sequences can be asserted without a Docker daemon.

use async_trait::async_trait;
use console::style;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{DockerError, Result};

/// Render a program and argv as a single display line
pub fn command_line(program: &str, args: &[String]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Trait over subprocess execution
///
/// Implementations must be Send + Sync for use across async tasks.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the program to completion, blocking until it exits
    ///
    /// Child stdio is inherited, so build output and log streams land on
    /// the caller's terminal. A non-zero exit maps to
    /// [`DockerError::CommandFailed`].
    async fn run(&self, program: &str, args: &[String]) -> Result<()>;
}

/// Runner backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<()> {
        let line = command_line(program, args);
        println!("{} {}", style("Running:").dim(), style(&line).dim());

        let status = tokio::process::Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|source| DockerError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else if let Some(code) = status.code() {
            Err(DockerError::CommandFailed { command: line, code })
        } else {
            // Unix: killed by signal before exiting
            Err(DockerError::Terminated { command: line })
        }
    }
}

/// In-memory runner for testing
///
/// Records every invocation and can be scripted to fail specific runtime
/// subcommands, useful for asserting call order and fail-fast behavior
/// without touching a real daemon.
#[derive(Clone, Default)]
pub struct MockRunner {
    /// Recorded argv lists, program at index 0
    invocations: Arc<Mutex<Vec<Vec<String>>>>,
    /// Subcommand (first arg) -> exit code to simulate
    failures: Arc<Mutex<HashMap<String, i32>>>,
}

impl MockRunner {
    /// Create a new runner that succeeds on everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a non-zero exit for a given runtime subcommand
    pub fn fail_on(self, subcommand: impl Into<String>, code: i32) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(subcommand.into(), code);
        self
    }

    /// Get all recorded invocations (program at index 0)
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }

    /// Get the runtime subcommands invoked, in order
    pub fn subcommands(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .filter_map(|argv| argv.get(1).cloned())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<()> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(program.to_string());
        argv.extend(args.iter().cloned());
        self.invocations.lock().unwrap().push(argv);

        if let Some(subcommand) = args.first() {
            if let Some(code) = self.failures.lock().unwrap().get(subcommand).copied() {
                return Err(DockerError::CommandFailed {
                    command: command_line(program, args),
                    code,
                });
            }
        }

        Ok(())
    }
}
