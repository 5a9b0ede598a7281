//! Integration tests for CLI commands
//!
//! Only the paths that never reach the Docker daemon are exercised here;
//! the deploy/monitor/restart sequences are covered by unit tests against
//! the mock runner.

use std::process::Command;

/// Helper to run proda command
fn proda(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_proda"))
        .args(args)
        .output()
        .expect("Failed to execute proda")
}

mod usage {
    use super::*;

    #[test]
    fn test_no_flags_prints_usage_and_exits_zero() {
        let output = proda(&[]);

        assert!(output.status.success(), "usage path must exit 0");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("--deploy | --monitor | --restart"));
    }

    #[test]
    fn test_flag_after_positional_skips_usage_path() {
        // The restart branch must be selected even when the flag follows an
        // unrecognized token. The status line precedes the runtime call, so
        // this holds whether or not a Docker daemon is around.
        let output = proda(&["junk", "--restart"]);

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.contains("Usage:"));
        assert!(stdout.contains("Restarting container"));
    }

    #[test]
    fn test_debug_alone_still_takes_usage_path() {
        let output = proda(&["--debug"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage: proda"));
    }
}

mod help_and_version {
    use super::*;

    #[test]
    fn test_help_lists_mode_flags() {
        let output = proda(&["--help"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("--deploy"));
        assert!(stdout.contains("--monitor"));
        assert!(stdout.contains("--restart"));
    }

    #[test]
    fn test_version() {
        let output = proda(&["--version"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("proda"));
    }
}
