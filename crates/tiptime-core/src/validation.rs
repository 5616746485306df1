//! # Validation Module
//!
//! Strict parsing of the cost field.
//!
//! ## Where This Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Cost field text ──► parse_cost() ──┬── Ok(Cost)   ──► tip math         │
//! │                                     │                                   │
//! │                                     └── Err(ValidationError)            │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                          compute_tip() shows a $0.00 tip instead        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Accepted Input
//! - Optional surrounding whitespace
//! - Optional leading `+`
//! - Digits with at most one `.` (`50`, `50.`, `.5`, `12.345`)
//! - Optional exponent (`1e2`, `2.5E-1`, `3e+0`)
//!
//! Anything else (signs other than `+`, `NaN`, `Infinity`, grouping
//! separators) is rejected. Every fraction digit is kept up to
//! [`MAX_COST_SCALE`]; the tip math rounds, the parser never does.

use crate::error::ValidationError;
use crate::money::{Cost, MAX_COST_SCALE, MINOR_PER_MAJOR};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const FIELD: &str = "cost";

fn invalid(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: FIELD.to_string(),
        reason: reason.to_string(),
    }
}

fn too_large() -> ValidationError {
    ValidationError::OutOfRange {
        field: FIELD.to_string(),
        min: 0,
        max: i64::MAX,
    }
}

/// Parses the cost field into an exact [`Cost`].
///
/// ## Example
/// ```rust
/// use tiptime_core::types::TipRate;
/// use tiptime_core::validation::parse_cost;
///
/// let cost = parse_cost(" 12.345 ").unwrap();
/// assert_eq!(cost.apply_rate(TipRate::Twenty).cents(), 247); // $2.469
///
/// assert!(parse_cost("1e2").is_ok());
/// assert!(parse_cost("abc").is_err());
/// assert!(parse_cost("").is_err());
/// ```
pub fn parse_cost(text: &str) -> ValidationResult<Cost> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: FIELD.to_string(),
        });
    }

    let unsigned = text.strip_prefix('+').unwrap_or(text);
    if unsigned.starts_with('-') {
        return Err(invalid("must not be negative"));
    }

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, parse_exponent(exponent)?),
        None => (unsigned, 0),
    };

    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (mantissa, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("must contain at least one digit"));
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid("must be a plain decimal number"));
    }

    // value = digits / 10^scale, where scale may still be negative
    let digits = [whole.as_bytes(), fraction.as_bytes()].concat();
    let scale = i64::try_from(fraction.len())
        .ok()
        .and_then(|len| len.checked_sub(exponent))
        .ok_or_else(too_large)?;

    let dropped = usize::try_from(scale.saturating_sub(i64::from(MAX_COST_SCALE)))
        .unwrap_or(0)
        .min(digits.len());
    let (kept, rest) = digits.split_at(digits.len() - dropped);
    let inexact = rest.iter().any(|&b| b != b'0');

    let mut units: u128 = 0;
    for &digit in kept {
        units = units
            .checked_mul(10)
            .and_then(|u| u.checked_add(u128::from(digit - b'0')))
            .ok_or_else(too_large)?;
    }

    let scale = if scale < 0 {
        if units != 0 {
            let shift = u32::try_from(-scale).map_err(|_| too_large())?;
            units = 10u128
                .checked_pow(shift)
                .and_then(|p| units.checked_mul(p))
                .ok_or_else(too_large)?;
        }
        0
    } else {
        scale.min(i64::from(MAX_COST_SCALE)) as u32
    };

    check_fits_in_cents(units, scale)?;
    Ok(Cost::new(units, scale, inexact))
}

/// Reads the part after `e`/`E`: an optional sign and at least one digit.
fn parse_exponent(text: &str) -> ValidationResult<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("exponent must be digits"));
    }
    // only overflow is left once the digits are checked
    text.parse::<i64>().map_err(|_| too_large())
}

/// The cost in cents must fit in `i64`; then every tip does too.
fn check_fits_in_cents(units: u128, scale: u32) -> ValidationResult<()> {
    let limit = (i64::MAX as u128) * 10u128.pow(scale);
    match units.checked_mul(MINOR_PER_MAJOR as u128) {
        Some(cents) if cents <= limit => Ok(()),
        _ => Err(too_large()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
