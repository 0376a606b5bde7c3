//! numtext - number-to-text conversion client
//!
//! CLI entry point: submits number lists to the conversion service and
//! prints the sorted, title-cased results.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use numtext::cli::TerminalPresenter;
use numtext::client::HttpConverter;
use numtext::config::{AppConfig, Overrides};
use numtext::session::{run_interactive, run_once, FailureKind, Phase};
use numtext::telemetry::init_tracing;

/// Number to text converter
///
/// Sends a comma-separated list of integers to the conversion service and
/// lists the spelled-out numbers within ±9000 in alphabetical order, with
/// counts of those outside the range.
#[derive(Parser, Debug)]
#[command(name = "numtext", version, about)]
struct Cli {
    /// Comma-separated numbers, e.g. "1,12,300,-5000"
    #[arg(required_unless_present = "interactive")]
    numbers: Option<String>,

    /// Read one list per line from stdin until end of input
    #[arg(long, short, conflicts_with = "numbers")]
    interactive: bool,

    /// Path to a numtext.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the conversion service (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long)]
    timeout: Option<u64>,

    /// Accept self-signed TLS certificates
    #[arg(long)]
    insecure: bool,

    /// Log requests and state changes to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.endpoint.clone(),
            timeout_secs: self.timeout,
            accept_invalid_certs: self.insecure,
        }
    }
}

/// Map the final phase of a one-shot run to a process exit code.
const fn exit_code(phase: Phase) -> i32 {
    match phase {
        Phase::Success => 0,
        Phase::Failure(FailureKind::Validation) | Phase::Idle => 2,
        Phase::Failure(FailureKind::Transport) | Phase::Fetching => 1,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = AppConfig::load(cli.config.as_deref(), &cwd, &cli.overrides())
        .context("Failed to load configuration")?;
    tracing::debug!(base_url = %config.endpoint.base_url, "configuration loaded");

    let converter = HttpConverter::new(&config.endpoint)?;

    if cli.interactive {
        let mut presenter = TerminalPresenter::new(true);
        presenter.print_banner();
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        run_interactive(Arc::new(converter), stdin, &mut presenter).await?;
        return Ok(());
    }

    let input = cli.numbers.unwrap_or_default();
    let mut presenter = TerminalPresenter::new(false);
    let session = run_once(&converter, &input, &mut presenter).await;

    match exit_code(session.phase()) {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_success() {
        assert_eq!(exit_code(Phase::Success), 0);
    }

    #[test]
    fn test_exit_code_validation_and_rejected_input() {
        assert_eq!(exit_code(Phase::Failure(FailureKind::Validation)), 2);
        assert_eq!(exit_code(Phase::Idle), 2);
    }

    #[test]
    fn test_exit_code_transport() {
        assert_eq!(exit_code(Phase::Failure(FailureKind::Transport)), 1);
    }

    #[test]
    fn test_cli_requires_numbers_or_interactive() {
        assert!(Cli::try_parse_from(["numtext"]).is_err());
        assert!(Cli::try_parse_from(["numtext", "1,2"]).is_ok());
        assert!(Cli::try_parse_from(["numtext", "--interactive"]).is_ok());
    }

    #[test]
    fn test_cli_interactive_conflicts_with_numbers() {
        assert!(Cli::try_parse_from(["numtext", "--interactive", "1,2"]).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "numtext",
            "--endpoint",
            "http://localhost:5000",
            "--timeout",
            "3",
            "--insecure",
            "1",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.base_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(overrides.timeout_secs, Some(3));
        assert!(overrides.accept_invalid_certs);
    }
}
