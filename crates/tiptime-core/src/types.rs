//! # Domain Types
//!
//! The inputs and outputs of one tip computation.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   TipRequest    │   │    TipRate      │   │   TipResult     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  cost_text      │   │  Twenty  (20%)  │   │  tip (Money)    │       │
//! │  │  rate ──────────┼──►│  Eighteen (18%) │   │  formatted      │       │
//! │  │  round_up       │   │  Fifteen (15%)* │   │  display        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  * default: the option used when nothing else is selected              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Tip Rate
// =============================================================================

/// The three tip options offered on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TipRate {
    /// 20% ("Amazing")
    Twenty,

    /// 18% ("Good")
    Eighteen,

    /// 15% ("OK"), selected when no other option is.
    #[default]
    Fifteen,
}

impl TipRate {
    /// All options in the order they are shown.
    pub const ALL: [TipRate; 3] = [TipRate::Twenty, TipRate::Eighteen, TipRate::Fifteen];

    /// Returns the rate in basis points (1500 = 15%).
    #[inline]
    pub const fn bps(&self) -> u32 {
        match self {
            TipRate::Twenty => 2000,
            TipRate::Eighteen => 1800,
            TipRate::Fifteen => 1500,
        }
    }

    /// Returns the rate as a whole percentage.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.bps() / 100
    }

    /// Looks up the option for a whole percentage.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::types::TipRate;
    ///
    /// assert_eq!(TipRate::from_percent(18).unwrap(), TipRate::Eighteen);
    /// assert!(TipRate::from_percent(25).is_err());
    /// ```
    pub fn from_percent(percent: u32) -> CoreResult<Self> {
        TipRate::ALL
            .into_iter()
            .find(|rate| rate.percent() == percent)
            .ok_or(CoreError::UnsupportedRate(percent))
    }
}

impl fmt::Display for TipRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl FromStr for TipRate {
    type Err = CoreError;

    /// Accepts `20`, `20%`, `twenty` (and the same for 18 and 15).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "twenty" => return Ok(TipRate::Twenty),
            "eighteen" => return Ok(TipRate::Eighteen),
            "fifteen" => return Ok(TipRate::Fifteen),
            _ => {}
        }

        let digits = s.strip_suffix('%').unwrap_or(&s).trim();
        let percent: u32 = digits.parse().map_err(|_| ValidationError::NotAllowed {
            field: "tip rate".to_string(),
            allowed: TipRate::ALL.iter().map(|r| r.percent().to_string()).collect(),
        })?;

        TipRate::from_percent(percent)
    }
}

// =============================================================================
// Request / Result
// =============================================================================

/// One tip computation as the host collects it from the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TipRequest {
    /// Raw text of the cost field; may be empty or not a number.
    pub cost_text: String,

    /// Selected tip option.
    #[serde(default)]
    pub rate: TipRate,

    /// Round-up switch.
    #[serde(default)]
    pub round_up: bool,
}

impl TipRequest {
    /// Creates a request from the three screen inputs.
    pub fn new(cost_text: impl Into<String>, rate: TipRate, round_up: bool) -> Self {
        TipRequest {
            cost_text: cost_text.into(),
            rate,
            round_up,
        }
    }
}

/// The outcome of one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TipResult {
    /// Numeric tip, always >= 0.
    pub tip: Money,

    /// Tip as localized currency text ("$10.00").
    pub formatted: String,

    /// Full display line ("Tip Amount: $10.00").
    pub display: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_is_fifteen() {
        assert_eq!(TipRate::default(), TipRate::Fifteen);
    }

    #[test]
    fn test_bps_and_percent() {
        assert_eq!(TipRate::Twenty.bps(), 2000);
        assert_eq!(TipRate::Eighteen.bps(), 1800);
        assert_eq!(TipRate::Fifteen.bps(), 1500);
        assert_eq!(TipRate::Eighteen.percent(), 18);
    }

    #[test]
    fn test_rate_parsing() {
        assert_eq!("20".parse::<TipRate>().unwrap(), TipRate::Twenty);
        assert_eq!("18%".parse::<TipRate>().unwrap(), TipRate::Eighteen);
        assert_eq!(" Fifteen ".parse::<TipRate>().unwrap(), TipRate::Fifteen);

        assert!(matches!(
            "25".parse::<TipRate>(),
            Err(CoreError::UnsupportedRate(25))
        ));
        assert!(matches!(
            "lots".parse::<TipRate>(),
            Err(CoreError::Validation(ValidationError::NotAllowed { .. }))
        ));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(TipRate::Twenty.to_string(), "20%");
        assert_eq!(TipRate::Fifteen.to_string(), "15%");
    }

    #[test]
    fn test_request_json_defaults() {
        let request: TipRequest = serde_json::from_str(r#"{"costText":"50"}"#).unwrap();
        assert_eq!(request, TipRequest::new("50", TipRate::Fifteen, false));

        let request: TipRequest =
            serde_json::from_str(r#"{"costText":"50","rate":"twenty","roundUp":true}"#).unwrap();
        assert_eq!(request.rate, TipRate::Twenty);
        assert!(request.round_up);
    }
}
