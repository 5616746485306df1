//! # Currency Formatting
//!
//! Renders a [`Money`] value the way the user's locale writes currency.
//!
//! ## Built-in Locales
//! ```text
//! ┌──────────┬──────────────────┬─────────────────────────────────────────┐
//! │  Tag     │  1234.5 renders  │  Notes                                  │
//! ├──────────┼──────────────────┼─────────────────────────────────────────┤
//! │  en-US   │  $1,234.50       │  fallback for unknown tags              │
//! │  en-GB   │  £1,234.50       │                                         │
//! │  en-IN   │  ₹1,234.50       │  plain thousands grouping               │
//! │  de-DE   │  1.234,50 €      │  NBSP before the symbol                 │
//! │  fr-FR   │  1 234,50 €      │  NNBSP grouping, NBSP before symbol     │
//! │  es-ES   │  1.234,50 €      │                                         │
//! │  pt-BR   │  R$ 1.234,50     │  NBSP after the symbol                  │
//! │  ja-JP   │  ￥1,234          │  no minor units, half-even to the yen   │
//! └──────────┴──────────────────┴─────────────────────────────────────────┘
//! ```
//!
//! Tags are matched loosely: `en_US.UTF-8`, `de_DE@euro` and bare `de`
//! all resolve. `C` and `POSIX` mean en-US.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, MINOR_PER_MAJOR};

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Label of the result line on the screen.
pub const TIP_AMOUNT_LABEL: &str = "Tip Amount";

const NBSP: char = '\u{a0}';
const NNBSP: char = '\u{202f}';

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SymbolPosition {
    /// `$10.00`
    Prefix,

    /// `10,00 €`
    Suffix,
}

/// How one locale writes a currency amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CurrencyFormat {
    /// Normalized locale tag (e.g. "de-DE").
    pub locale: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub symbol: String,

    pub symbol_position: SymbolPosition,

    /// Separator between symbol and amount, if any.
    pub symbol_separator: Option<char>,

    pub decimal_separator: char,

    /// Thousands separator, if the locale groups digits.
    pub grouping_separator: Option<char>,

    /// Number of decimal places shown (2 for USD, 0 for JPY).
    pub minor_digits: u8,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::en_us()
    }
}

impl CurrencyFormat {
    /// US dollars, `$1,234.50`.
    pub fn en_us() -> Self {
        CurrencyFormat {
            locale: "en-US".to_string(),
            currency_code: "USD".to_string(),
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Prefix,
            symbol_separator: None,
            decimal_separator: '.',
            grouping_separator: Some(','),
            minor_digits: 2,
        }
    }

    fn prefixed(locale: &str, code: &str, symbol: &str, separator: Option<char>) -> Self {
        CurrencyFormat {
            locale: locale.to_string(),
            currency_code: code.to_string(),
            symbol: symbol.to_string(),
            symbol_separator: separator,
            ..CurrencyFormat::en_us()
        }
    }

    fn euro_suffixed(locale: &str, grouping: char) -> Self {
        CurrencyFormat {
            locale: locale.to_string(),
            currency_code: "EUR".to_string(),
            symbol: "€".to_string(),
            symbol_position: SymbolPosition::Suffix,
            symbol_separator: Some(NBSP),
            decimal_separator: ',',
            grouping_separator: Some(grouping),
            minor_digits: 2,
        }
    }

    /// Resolves a locale tag, failing on tags outside the built-in table.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::format::CurrencyFormat;
    ///
    /// let format = CurrencyFormat::try_for_locale("en_GB.UTF-8").unwrap();
    /// assert_eq!(format.symbol, "£");
    /// assert!(CurrencyFormat::try_for_locale("xx-YY").is_err());
    /// ```
    pub fn try_for_locale(tag: &str) -> CoreResult<Self> {
        let normalized = normalize_tag(tag);

        let format = match normalized.as_str() {
            "c" | "posix" | "en" | "en-us" => CurrencyFormat::en_us(),
            "en-gb" => CurrencyFormat::prefixed("en-GB", "GBP", "£", None),
            "en-in" => CurrencyFormat::prefixed("en-IN", "INR", "₹", None),
            "de" | "de-de" => CurrencyFormat::euro_suffixed("de-DE", '.'),
            "fr" | "fr-fr" => CurrencyFormat::euro_suffixed("fr-FR", NNBSP),
            "es" | "es-es" => CurrencyFormat::euro_suffixed("es-ES", '.'),
            "pt" | "pt-br" => CurrencyFormat {
                decimal_separator: ',',
                grouping_separator: Some('.'),
                ..CurrencyFormat::prefixed("pt-BR", "BRL", "R$", Some(NBSP))
            },
            "ja" | "ja-jp" => CurrencyFormat {
                minor_digits: 0,
                ..CurrencyFormat::prefixed("ja-JP", "JPY", "￥", None)
            },
            _ => return Err(CoreError::UnknownLocale(tag.to_string())),
        };

        Ok(format)
    }

    /// Resolves a locale tag, falling back to en-US for unknown tags.
    pub fn for_locale(tag: &str) -> Self {
        CurrencyFormat::try_for_locale(tag).unwrap_or_default()
    }

    /// Formats an amount as currency text.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::format::CurrencyFormat;
    /// use tiptime_core::money::Money;
    ///
    /// let format = CurrencyFormat::en_us();
    /// assert_eq!(format.format(Money::from_cents(123450)), "$1,234.50");
    /// assert_eq!(format.format(Money::zero()), "$0.00");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let cents = amount.cents().unsigned_abs();
        let per_unit = MINOR_PER_MAJOR as u64;

        let number = match self.minor_digits {
            0 => self.group(round_half_even(cents, per_unit)),
            _ => format!(
                "{}{}{:02}",
                self.group(cents / per_unit),
                self.decimal_separator,
                cents % per_unit
            ),
        };

        let separator = self.symbol_separator.map(String::from).unwrap_or_default();
        let body = match self.symbol_position {
            SymbolPosition::Prefix => format!("{}{}{}", self.symbol, separator, number),
            SymbolPosition::Suffix => format!("{}{}{}", number, separator, self.symbol),
        };

        if amount.is_negative() {
            format!("-{}", body)
        } else {
            body
        }
    }

    /// Builds the text of the result line from an already formatted tip.
    pub fn display_line(&self, formatted: &str) -> String {
        format!("{}: {}", TIP_AMOUNT_LABEL, formatted)
    }

    fn group(&self, units: u64) -> String {
        let digits = units.to_string();
        let Some(separator) = self.grouping_separator else {
            return digits;
        };

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

/// `en_US.UTF-8` → `en-us`, `de_DE@euro` → `de-de`.
fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    let tag = tag.split(['.', '@']).next().unwrap_or(tag);
    tag.replace('_', "-").to_lowercase()
}

/// Whole units of `cents`, ties going to the even unit (`8.5 → 8`, `9.5 → 10`).
fn round_half_even(cents: u64, per_unit: u64) -> u64 {
    let units = cents / per_unit;
    let rest = cents % per_unit;
    if rest * 2 > per_unit || (rest * 2 == per_unit && units % 2 == 1) {
        units + 1
    } else {
        units
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
