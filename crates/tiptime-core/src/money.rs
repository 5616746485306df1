//! # Money Module
//!
//! Provides `Money` for tip amounts and `Cost` for the exact cost the tip
//! is computed from.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.15 × 19.99 = 2.9984999999999995  ❌ rounds the wrong way          │
//! │                                                                         │
//! │  OUR SOLUTION: Scaled Integer Cost × Basis Points                       │
//! │    1999 (scale 2) × 1500 bps = 2_998_500 (exact, scale 6)               │
//! │    Round half-up to the cent  → 300 cents = $3.00                       │
//! │    Ceiling to a whole unit    → 3 × 100 cents = $3.00                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cost keeps every digit the user typed, so `6.6666` at 15% is
//! `0.99999` before any rounding and rounds up to `$1.00`, not `$2.00`.
//!
//! ## Usage
//! ```rust
//! use tiptime_core::types::TipRate;
//! use tiptime_core::validation::parse_cost;
//!
//! let cost = parse_cost("50").unwrap();
//!
//! assert_eq!(cost.apply_rate(TipRate::Fifteen).cents(), 750);      // $7.50
//! assert_eq!(cost.apply_rate_ceil(TipRate::Fifteen).cents(), 800); // $8.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::TipRate;

/// Minor units (cents) per major unit (dollar).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Most fraction digits a [`Cost`] keeps. Digits past this are dropped, but a
/// dropped non-zero digit still marks the cost as above its kept value.
pub const MAX_COST_SCALE: u32 = 18;

/// Basis points in 100%.
const BPS_SCALE: u128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  "50.00" ──► parse_cost() ──► Cost { units: 5000, scale: 2 }            │
/// │                                  │                                      │
/// │                                  ▼                                      │
/// │                 apply_rate() / apply_rate_ceil()                        │
/// │                                  │                                      │
/// │                                  ▼                                      │
/// │                  Money(1000) ──► CurrencyFormat ──► "$10.00"            │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::money::Money;
    ///
    /// let tip = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(tip.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checks if the value has no fractional minor units ($8.00 yes, $7.50 no).
    #[inline]
    pub const fn is_whole_units(&self) -> bool {
        self.0 % MINOR_PER_MAJOR == 0
    }
}

// =============================================================================
// Cost Type
// =============================================================================

/// A non-negative cost held exactly as `units / 10^scale`.
///
/// Built by [`crate::validation::parse_cost`], which also guarantees the
/// cost fits in `i64` cents. `inexact` is set when non-zero digits beyond
/// [`MAX_COST_SCALE`] were dropped, so the true value is slightly above
/// `units / 10^scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cost {
    units: u128,
    scale: u32,
    inexact: bool,
}

impl Cost {
    /// Builds a cost, dropping trailing fraction zeros so equal values
    /// compare equal.
    pub(crate) fn new(mut units: u128, mut scale: u32, inexact: bool) -> Self {
        while scale > 0 && units % 10 == 0 {
            units /= 10;
            scale -= 1;
        }
        Cost {
            units,
            scale,
            inexact,
        }
    }

    /// True only when every digit of the cost is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && !self.inexact
    }

    /// Applies a tip rate, rounding the exact product half-up to the cent.
    ///
    /// ## Implementation
    /// `units × bps` is the tip at scale `10^(scale + 4)` dollars. Dividing
    /// by `10^scale × 100` with a half-divisor bias gives cents.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::types::TipRate;
    /// use tiptime_core::validation::parse_cost;
    ///
    /// // $19.99 × 15% = $2.9985 → $3.00
    /// let tip = parse_cost("19.99").unwrap().apply_rate(TipRate::Fifteen);
    /// assert_eq!(tip.cents(), 300);
    /// ```
    pub fn apply_rate(&self, rate: TipRate) -> Money {
        let product = self.units * u128::from(rate.bps());
        // per_cent is a multiple of 100, so the half is exact
        let per_cent = self.pow10() * MINOR_PER_MAJOR as u128;
        Money::from_cents(((product + per_cent / 2) / per_cent) as i64)
    }

    /// Applies a tip rate and rounds the exact product UP to the next whole
    /// currency unit.
    ///
    /// The ceiling is taken on `cost × rate` itself, so `0.004` at 15%
    /// (`0.0006`) becomes $1.00 rather than $0.00.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::types::TipRate;
    /// use tiptime_core::validation::parse_cost;
    ///
    /// // $50.00 × 15% = $7.50 → $8.00
    /// let tip = parse_cost("50").unwrap().apply_rate_ceil(TipRate::Fifteen);
    /// assert_eq!(tip.cents(), 800);
    ///
    /// // 6.6666 × 15% = 0.99999 → $1.00
    /// let tip = parse_cost("6.6666").unwrap().apply_rate_ceil(TipRate::Fifteen);
    /// assert_eq!(tip.cents(), 100);
    /// ```
    pub fn apply_rate_ceil(&self, rate: TipRate) -> Money {
        let product = self.units * u128::from(rate.bps());
        let per_unit = self.pow10() * BPS_SCALE;

        let mut whole = product / per_unit;
        if product % per_unit != 0 || self.inexact {
            whole += 1;
        }
        Money::from_cents(whole as i64 * MINOR_PER_MAJOR)
    }

    fn pow10(&self) -> u128 {
        10u128.pow(self.scale)
    }

}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a fixed `$d.cc` form.
///
/// ## Note
/// This is for debugging and logs. Use [`crate::format::CurrencyFormat`]
/// for text shown to the user.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cost(units: u128, scale: u32) -> Cost {
        Cost::new(units, scale, false)
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_cost_drops_trailing_zeros() {
        assert_eq!(cost(5000, 2), cost(50, 0));
        assert_eq!(cost(1230, 3), cost(123, 2));
        assert_eq!(cost(0, 4), cost(0, 0));
        assert!(cost(0, 4).is_zero());
        assert!(!Cost::new(0, MAX_COST_SCALE, true).is_zero());
    }

    #[test]
    fn test_apply_rate_each_option() {
        let cost = cost(50, 0);
        assert_eq!(cost.apply_rate(TipRate::Twenty).cents(), 1000);
        assert_eq!(cost.apply_rate(TipRate::Eighteen).cents(), 900);
        assert_eq!(cost.apply_rate(TipRate::Fifteen).cents(), 750);
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // $0.10 × 15% = $0.015 → $0.02
        assert_eq!(cost(10, 2).apply_rate(TipRate::Fifteen).cents(), 2);
        // $0.03 × 15% = $0.0045 → $0.00
        assert_eq!(cost(3, 2).apply_rate(TipRate::Fifteen).cents(), 0);
        // $12.34 × 18% = $2.2212 → $2.22
        assert_eq!(cost(1234, 2).apply_rate(TipRate::Eighteen).cents(), 222);
        // 0.0334 × 15% = 0.00501 → $0.01, though 0.0334 alone rounds to $0.03
        assert_eq!(cost(334, 4).apply_rate(TipRate::Fifteen).cents(), 1);
    }

    #[test]
    fn test_apply_rate_ceil() {
        // $7.50 → $8.00
        assert_eq!(cost(50, 0).apply_rate_ceil(TipRate::Fifteen).cents(), 800);
        // $10.00 is already whole
        assert_eq!(cost(50, 0).apply_rate_ceil(TipRate::Twenty).cents(), 1000);
        // $0.0045 → $1.00 (ceiling of the exact product, not of $0.00)
        assert_eq!(cost(3, 2).apply_rate_ceil(TipRate::Fifteen).cents(), 100);
        // $100.01 × 20% = $20.002 → $21.00
        assert_eq!(cost(10001, 2).apply_rate_ceil(TipRate::Twenty).cents(), 2100);
        assert!(cost(0, 0).apply_rate_ceil(TipRate::Twenty).is_zero());
    }

    #[test]
    fn test_apply_rate_ceil_uses_every_digit() {
        // 6.6666 × 15% = 0.99999 → $1.00
        assert_eq!(cost(66666, 4).apply_rate_ceil(TipRate::Fifteen).cents(), 100);
        // 0.004 × 15% = 0.0006 → $1.00
        assert_eq!(cost(4, 3).apply_rate_ceil(TipRate::Fifteen).cents(), 100);
        // 100.005 × 20% = 20.001 → $21.00
        assert_eq!(cost(100005, 3).apply_rate_ceil(TipRate::Twenty).cents(), 2100);
        // 5 × 20% is whole until a dropped digit says otherwise
        assert_eq!(Cost::new(5, 0, true).apply_rate_ceil(TipRate::Twenty).cents(), 200);
    }

    #[test]
    fn test_ceil_never_below_rounded() {
        let costs = [
            (1, 2),
            (7, 2),
            (99, 2),
            (1, 0),
            (4, 3),
            (66666, 4),
            (1999, 2),
            (12345, 3),
            (123_456, 2),
        ];
        for (units, scale) in costs {
            let cost = cost(units, scale);
            for rate in TipRate::ALL {
                let plain = cost.apply_rate(rate);
                let rounded = cost.apply_rate_ceil(rate);
                assert!(rounded >= plain, "{:?} at {}", cost, rate);
                assert!(rounded.is_whole_units());
            }
        }
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(zero.is_whole_units());

        assert!(Money::from_cents(-100).is_negative());
        assert!(!Money::from_cents(750).is_whole_units());
    }
}
