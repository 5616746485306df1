//! # Tip Calculator
//!
//! The whole computation behind the screen: cost text, tip option and
//! round-up switch in, tip out.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  cost_text ──► parse_cost() ──► Err or $0 ──────────────► $0.00         │
//! │                     │                                                   │
//! │                     ▼ Ok(cost > 0)                                      │
//! │              cost × rate                                                │
//! │                     │                                                   │
//! │        round_up? ───┼─── yes ──► ceiling to whole unit                  │
//! │                     │                                                   │
//! │                     └─── no ───► nearest cent (half-up)                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::format::CurrencyFormat;
use crate::money::Money;
use crate::types::{TipRate, TipRequest, TipResult};
use crate::validation::parse_cost;

/// Computes the tip for the three screen inputs.
///
/// Never fails: text that is not a valid cost, and a cost of zero, both
/// produce a zero tip. The cost keeps all its digits; rounding happens once,
/// on `cost × rate`.
///
/// ## Example
/// ```rust
/// use tiptime_core::tip::compute_tip;
/// use tiptime_core::types::TipRate;
///
/// assert_eq!(compute_tip("50", TipRate::Twenty, false).cents(), 1000);
/// assert_eq!(compute_tip("50", TipRate::Fifteen, true).cents(), 800);
/// assert!(compute_tip("abc", TipRate::Twenty, true).is_zero());
/// ```
pub fn compute_tip(cost_text: &str, rate: TipRate, round_up: bool) -> Money {
    let cost = match parse_cost(cost_text) {
        Ok(cost) if !cost.is_zero() => cost,
        _ => return Money::zero(),
    };

    if round_up {
        cost.apply_rate_ceil(rate)
    } else {
        cost.apply_rate(rate)
    }
}

/// Computes a request and renders it for display.
///
/// ## Example
/// ```rust
/// use tiptime_core::format::CurrencyFormat;
/// use tiptime_core::tip::calculate;
/// use tiptime_core::types::{TipRate, TipRequest};
///
/// let request = TipRequest::new("50", TipRate::Twenty, false);
/// let result = calculate(&request, &CurrencyFormat::en_us());
/// assert_eq!(result.display, "Tip Amount: $10.00");
/// ```
pub fn calculate(request: &TipRequest, format: &CurrencyFormat) -> TipResult {
    let tip = compute_tip(&request.cost_text, request.rate, request.round_up);
    let formatted = format.format(tip);

    TipResult {
        tip,
        display: format.display_line(&formatted),
        formatted,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_zero_tip() {
        for text in ["", "abc", "0", "0.00", "-5", "   "] {
            for rate in TipRate::ALL {
                for round_up in [false, true] {
                    assert!(
                        compute_tip(text, rate, round_up).is_zero(),
                        "{text:?} at {rate} round_up={round_up}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_fifty_dollars_each_rate() {
        assert_eq!(compute_tip("50", TipRate::Twenty, false).cents(), 1000);
        assert_eq!(compute_tip("50", TipRate::Eighteen, false).cents(), 900);
        assert_eq!(compute_tip("50", TipRate::Fifteen, false).cents(), 750);
    }

    #[test]
    fn test_round_up_takes_ceiling() {
        assert_eq!(compute_tip("50", TipRate::Fifteen, true).cents(), 800);
        assert_eq!(compute_tip("50", TipRate::Twenty, true).cents(), 1000);
        assert_eq!(compute_tip("0.01", TipRate::Fifteen, true).cents(), 100);
    }

    #[test]
    fn test_round_up_uses_the_exact_cost() {
        // 6.6666 × 15% = 0.99999, one whole unit
        assert_eq!(compute_tip("6.6666", TipRate::Fifteen, true).cents(), 100);
        // 0.004 is not zero, so its tip rounds up to one unit
        assert_eq!(compute_tip("0.004", TipRate::Fifteen, true).cents(), 100);
        assert_eq!(compute_tip("0.004", TipRate::Fifteen, false).cents(), 0);
        // 0.0334 × 15% = 0.00501 → $0.01
        assert_eq!(compute_tip("0.0334", TipRate::Fifteen, false).cents(), 1);
    }

    #[test]
    fn test_large_costs_are_tipped() {
        assert_eq!(compute_tip("2000000000", TipRate::Twenty, false).cents(), 40_000_000_000);
        assert_eq!(compute_tip("2000000000.5", TipRate::Twenty, true).cents(), 40_000_000_100);
        assert!(compute_tip("1e400", TipRate::Twenty, false).is_zero());
    }

    #[test]
    fn test_exponent_costs() {
        assert_eq!(compute_tip("1e2", TipRate::Fifteen, false).cents(), 1500);
        assert_eq!(compute_tip("5E1", TipRate::Fifteen, true).cents(), 800);
        assert_eq!(compute_tip("2.5e-1", TipRate::Twenty, false).cents(), 5);
    }

    #[test]
    fn test_round_up_never_lowers_the_tip() {
        for text in [
            "0.01", "1", "9.99", "12.34", "19.99", "33.33", "50", "87.65", "1234.56", "0.004",
            "0.0049", "6.6666", "12.345", "33.335", "99.9999", "1e-7", "2.5e1",
        ] {
            for rate in TipRate::ALL {
                let plain = compute_tip(text, rate, false);
                let rounded = compute_tip(text, rate, true);
                assert!(rounded >= plain, "{text} at {rate}");
                assert!(rounded.is_whole_units(), "{text} at {rate}");
            }
        }
    }

    #[test]
    fn test_calculate_renders_display_line() {
        let format = CurrencyFormat::en_us();

        let result = calculate(&TipRequest::new("50", TipRate::Twenty, false), &format);
        assert_eq!(result.tip.cents(), 1000);
        assert_eq!(result.formatted, "$10.00");
        assert_eq!(result.display, "Tip Amount: $10.00");

        let result = calculate(&TipRequest::new("", TipRate::Twenty, true), &format);
        assert_eq!(result.display, "Tip Amount: $0.00");
    }

    #[test]
    fn test_result_serializes_for_hosts() {
        let result = calculate(
            &TipRequest::new("50", TipRate::Fifteen, true),
            &CurrencyFormat::en_us(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["tip"], 800);
        assert_eq!(json["formatted"], "$8.00");
        assert_eq!(json["display"], "Tip Amount: $8.00");
    }
}
