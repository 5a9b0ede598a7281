//! Proda Docker - container runtime integration for Proda
//!
//! This crate provides:
//! - **DockerClient**: High-level operations against the `docker` CLI
//!   (build, remove, detached run, follow-mode logs, restart)
//! - **CommandRunner**: Trait seam over subprocess execution, with a real
//!   process-backed runner and an in-memory mock for tests
//! - **Options types**: Argument builders for build and run invocations

pub mod actions;
pub mod client;
pub mod error;
pub mod invocation;

pub use actions::{BuildOptions, RunOptions};
pub use client::DockerClient;
pub use error::{DockerError, Result};
pub use invocation::{CommandRunner, MockRunner, ProcessRunner, command_line};
