//! # Command Line
//!
//! Flags for the `tiptime` binary.
//!
//! ## Modes
//! ```text
//! tiptime --cost 50 --rate 20            one-shot: prints "Tip Amount: $10.00"
//! tiptime --cost 50 --round-up --json    one-shot: prints the TipResult as JSON
//! tiptime                                 interactive tip screen on stdin/stdout
//! ```

use clap::Parser;
use std::path::PathBuf;
use tiptime_core::TipRate;

/// Calculate a tip from the cost of a service.
#[derive(Parser, Debug, Clone)]
#[command(name = "tiptime", version, about)]
pub struct Cli {
    /// Cost of service. Omit to start an interactive session
    #[arg(short, long, allow_hyphen_values = true)]
    pub cost: Option<String>,

    /// Tip percentage: 20, 18 or 15
    #[arg(short, long)]
    pub rate: Option<TipRate>,

    /// Round the tip up to a whole currency unit
    #[arg(long, conflicts_with = "no_round_up")]
    pub round_up: bool,

    /// Do not round the tip, even if the config says so
    #[arg(long)]
    pub no_round_up: bool,

    /// Locale for currency formatting (e.g. en-US, de_DE.UTF-8)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON (one-shot mode)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
