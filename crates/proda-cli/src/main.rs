//! Proda CLI - deployment companion for the Proda server container

use clap::Parser;
use miette::Result;
use std::ffi::OsString;

mod commands;
mod config;
mod error;
mod exit_codes;

#[derive(Parser)]
#[command(name = "proda")]
#[command(author = "Proda Contributors")]
#[command(version)]
#[command(about = "Build, run, and watch the Proda server container", long_about = None)]
struct Cli {
    /// Build the image and replace the running container
    #[arg(long)]
    deploy: bool,

    /// Follow the running container's logs
    #[arg(long)]
    monitor: bool,

    /// Restart the running container
    #[arg(long)]
    restart: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Extra arguments are accepted and ignored; mode flags are still
    /// honored wherever they appear
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    extra: Vec<OsString>,
}

/// Selected mode, in flag-checking order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Deploy,
    Monitor,
    Restart,
}

impl Cli {
    /// Resolve the mode flags by membership; when several are set, the
    /// first in checking order wins
    ///
    /// The trailing catch-all can absorb a mode flag that appears after an
    /// unrecognized token, so presence is checked there as well.
    fn action(&self) -> Option<Action> {
        if self.deploy || self.extra_contains("--deploy") {
            Some(Action::Deploy)
        } else if self.monitor || self.extra_contains("--monitor") {
            Some(Action::Monitor)
        } else if self.restart || self.extra_contains("--restart") {
            Some(Action::Restart)
        } else {
            None
        }
    }

    fn extra_contains(&self, flag: &str) -> bool {
        self.extra.iter().any(|arg| arg == flag)
    }
}

fn main() -> Result<()> {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();

    // Set debug level
    if cli.debug {
        // SAFETY: We're the only thread at this point (start of main)
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    // No recognized mode flag is not an error: print usage and exit clean
    let Some(action) = cli.action() else {
        println!("Usage: proda --deploy | --monitor | --restart");
        std::process::exit(exit_codes::SUCCESS);
    };

    if let Err(err) = dispatch(action) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }

    Ok(())
}

/// Build the async runtime and run the selected command to completion
fn dispatch(action: Action) -> error::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        match action {
            Action::Deploy => commands::deploy::run().await,
            Action::Monitor => commands::monitor::run().await,
            Action::Restart => commands::restart::run().await,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_selects_nothing() {
        let cli = Cli::parse_from(["proda"]);
        assert_eq!(cli.action(), None);
    }

    #[test]
    fn test_single_flags() {
        assert_eq!(
            Cli::parse_from(["proda", "--deploy"]).action(),
            Some(Action::Deploy)
        );
        assert_eq!(
            Cli::parse_from(["proda", "--monitor"]).action(),
            Some(Action::Monitor)
        );
        assert_eq!(
            Cli::parse_from(["proda", "--restart"]).action(),
            Some(Action::Restart)
        );
    }

    #[test]
    fn test_multiple_flags_resolve_in_checking_order() {
        assert_eq!(
            Cli::parse_from(["proda", "--restart", "--deploy"]).action(),
            Some(Action::Deploy)
        );
        assert_eq!(
            Cli::parse_from(["proda", "--restart", "--monitor"]).action(),
            Some(Action::Monitor)
        );
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let cli = Cli::parse_from(["proda", "--restart", "leftover", "--unknown"]);
        assert_eq!(cli.action(), Some(Action::Restart));
        assert_eq!(cli.extra.len(), 2);
    }

    #[test]
    fn test_flag_after_positional_is_honored() {
        // Membership semantics: the flag counts even when the trailing
        // catch-all absorbed it
        let cli = Cli::parse_from(["proda", "junk", "--restart"]);
        assert_eq!(cli.action(), Some(Action::Restart));
    }

    #[test]
    fn test_checking_order_spans_catch_all() {
        let cli = Cli::parse_from(["proda", "junk", "--restart", "--deploy"]);
        assert_eq!(cli.action(), Some(Action::Deploy));
    }
}
