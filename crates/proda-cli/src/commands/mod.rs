//! CLI commands

pub mod deploy;
pub mod monitor;
pub mod restart;
