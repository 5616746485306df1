//! # tiptime-core: Pure Tip Calculation for Tip Time
//!
//! This crate is the **heart** of Tip Time. It turns the three inputs of the
//! tip screen into a tip, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tip Time Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host (terminal app, mobile shell)            │   │
//! │  │    Cost field ──► Tip options ──► Round-up switch ──► Result    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ TipRequest                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tiptime-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ validation│  │    tip    │  │   money   │  │  format   │  │   │
//! │  │   │ parse_cost│─►│compute_tip│─►│   Money   │─►│ Currency  │  │   │
//! │  │   │  → Cost   │  │ calculate │  │ apply_rate│  │  Format   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO STATE • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - TipRate, TipRequest, TipResult
//! - [`money`] - Money and exact Cost, integer arithmetic (no floating point!)
//! - [`validation`] - Strict cost parsing, exponents included
//! - [`tip`] - The tip computation itself
//! - [`format`] - Locale-aware currency text
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tiptime_core::{compute_tip, CurrencyFormat, TipRate};
//!
//! let tip = compute_tip("50", TipRate::Twenty, false);
//! assert_eq!(tip.cents(), 1000);
//!
//! let format = CurrencyFormat::for_locale("en_US.UTF-8");
//! assert_eq!(format.display_line(&format.format(tip)), "Tip Amount: $10.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod money;
pub mod tip;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{CurrencyFormat, SymbolPosition, DEFAULT_LOCALE};
pub use money::{Cost, Money};
pub use tip::{calculate, compute_tip};
pub use types::*;

