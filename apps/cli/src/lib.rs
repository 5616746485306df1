//! # Tip Time Terminal App
//!
//! Hosts the tip screen in a terminal.
//!
//! ## Module Organization
//! ```text
//! tiptime_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── cli.rs          ◄─── Command line flags (clap)
//! ├── config.rs       ◄─── TOML/env configuration and merged Settings
//! ├── screen.rs       ◄─── Tip screen state and the line-driven session
//! └── error.rs        ◄─── App error type
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, so stdout only carries results)
//! 2. Load config (file, then `TIPTIME_*` overrides)
//! 3. Merge flags, config and system locale into `Settings`
//! 4. One-shot (`--cost`) or interactive session

pub mod cli;
pub mod config;
pub mod error;
pub mod screen;

use std::io::{BufRead, Write};
use tiptime_core::{calculate, TipRequest};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{AppConfig, Settings};
use error::AppResult;
use screen::{run_session, TipScreen};

/// Runs the app against the process's stdin and stdout.
pub fn run(cli: Cli) -> AppResult<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(cli, stdin.lock(), stdout.lock())
}

/// Runs the app against any input and output.
pub fn run_with<R: BufRead, W: Write>(cli: Cli, input: R, mut output: W) -> AppResult<()> {
    let config = AppConfig::load(cli.config.clone())?;
    let settings = Settings::resolve(&cli, &config);

    match &cli.cost {
        Some(cost_text) => {
            let request = TipRequest::new(cost_text.as_str(), settings.rate, settings.round_up);
            let result = calculate(&request, &settings.format);
            info!(tip = %result.tip, rate = %request.rate, "One-shot calculation");

            if cli.json {
                writeln!(output, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                writeln!(output, "{}", result.display)?;
            }
        }
        None => {
            info!("Starting interactive session");
            let mut screen = TipScreen::new(settings);
            run_session(&mut screen, input, &mut output)?;
        }
    }

    output.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug for this app when `RUST_LOG` is unset
/// - Default: WARN level
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,tiptime_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn run_args(args: &[&str], input: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tiptime.toml");
        let config_arg = config_path.to_str().unwrap();

        let cli = Cli::parse_from(
            ["tiptime", "--config", config_arg, "--locale", "en-US"]
                .into_iter()
                .chain(args.iter().copied()),
        );
        let mut output = Vec::new();
        run_with(cli, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_one_shot_display() {
        assert_eq!(run_args(&["--cost", "50", "--rate", "20"], ""), "Tip Amount: $10.00\n");
        assert_eq!(
            run_args(&["--cost", "50", "--rate", "15", "--round-up"], ""),
            "Tip Amount: $8.00\n"
        );
        assert_eq!(run_args(&["--cost", "abc", "--rate", "20"], ""), "Tip Amount: $0.00\n");
    }

    #[test]
    fn test_one_shot_exact_costs() {
        assert_eq!(
            run_args(&["--cost", "6.6666", "--rate", "15", "--round-up"], ""),
            "Tip Amount: $1.00\n"
        );
        assert_eq!(run_args(&["--cost", "1e2", "--rate", "15"], ""), "Tip Amount: $15.00\n");
        assert_eq!(
            run_args(&["--cost", "2000000000", "--rate", "20"], ""),
            "Tip Amount: $400,000,000.00\n"
        );
    }

    #[test]
    fn test_one_shot_json() {
        let out = run_args(&["--cost", "50", "--rate", "18", "--json"], "");
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["tip"], 900);
        assert_eq!(json["display"], "Tip Amount: $9.00");
    }

    #[test]
    fn test_interactive_mode() {
        let out = run_args(&["--rate", "20"], "50\nquit\n");
        assert!(out.ends_with("Tip Amount: $10.00\n"));
    }

    #[test]
    fn test_config_file_sets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tiptime.toml");
        std::fs::write(&config_path, "locale = \"en-GB\"\ndefault_rate = 20\nround_up = true\n")
            .unwrap();

        let cli = Cli::parse_from([
            "tiptime",
            "--config",
            config_path.to_str().unwrap(),
            "--cost",
            "37",
        ]);
        let mut output = Vec::new();
        run_with(cli, Cursor::new(""), &mut output).unwrap();
        // $37.00 × 20% = $7.40, rounded up to £8.00
        assert_eq!(String::from_utf8(output).unwrap(), "Tip Amount: £8.00\n");
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tiptime.toml");
        std::fs::write(&config_path, "default_rate = 25\n").unwrap();

        let cli = Cli::parse_from(["tiptime", "--config", config_path.to_str().unwrap()]);
        let result = run_with(cli, Cursor::new(""), Vec::new());
        assert!(matches!(result, Err(error::AppError::InvalidConfig(_))));
    }
}
