//! # Error Types
//!
//! Domain-specific error types for tiptime-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tiptime-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tiptime-cli errors (host app)                                         │
//! │  └── AppError         - Config, terminal and output failures           │
//! │                                                                         │
//! │  NOTE: compute_tip() never returns these. A bad cost is a zero tip.    │
//! │  They exist for the strict helpers (parse_cost, TipRate::from_percent) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field and value in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core tip-calculation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Tip percentage is not one of the offered options.
    #[error("Unsupported tip rate: {0}%")]
    UnsupportedRate(u32),

    /// Locale tag could not be understood.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced by the strict parsers before any tip math runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., letters in a cost, an exponent).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnsupportedRate(25);
        assert_eq!(err.to_string(), "Unsupported tip rate: 25%");

        let err = CoreError::UnknownLocale("xx".to_string());
        assert_eq!(err.to_string(), "Unknown locale: xx");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "cost".to_string(),
        };
        assert_eq!(err.to_string(), "cost is required");

        let err = ValidationError::InvalidFormat {
            field: "cost".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "cost has invalid format: not a number");

        let err = ValidationError::NotAllowed {
            field: "tip rate".to_string(),
            allowed: vec!["20".to_string(), "18".to_string()],
        };
        assert_eq!(err.to_string(), "tip rate must be one of: [\"20\", \"18\"]");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "cost".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
