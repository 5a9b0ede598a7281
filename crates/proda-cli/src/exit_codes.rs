//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions where applicable.

/// Success - operation completed without errors (also the usage path)
pub const SUCCESS: i32 = 0;

/// Docker error - a runtime invocation reported a non-zero exit
pub const DOCKER_ERROR: i32 = 2;

/// IO error - the async runtime could not be set up
pub const IO_ERROR: i32 = 5;
