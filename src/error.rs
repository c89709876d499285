//! Error kinds reported by the quadrature engine.

use thiserror::Error;

/// Errors that can occur while validating or evaluating an integral
#[derive(Debug, Error)]
pub enum QuadratureError {
    /// Lower and upper limits are equal
    #[error("Limits must differ: both bounds equal {limit}")]
    DegenerateInterval {
        /// The shared value of both limits
        limit: f64,
    },
    /// Method selector did not name a known rule
    #[error("Unknown integration method '{0}'")]
    UnknownMethod(String),
    /// Step-halving ran out of refinements before the residual met the tolerance
    #[error("No convergence after {refinements} refinements (residual = {residual:e})")]
    DidNotConverge {
        /// Number of refinement levels evaluated
        refinements: u32,
        /// Last residual between successive estimates
        residual: f64,
    },
    /// An adaptive estimate became NaN or infinite
    #[error("Non-finite estimate after {refinements} refinements")]
    NonFiniteEstimate {
        /// Refinement level at which the estimate stopped being finite
        refinements: u32,
    },
    /// Invalid request or configuration parameters
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the invalid input
        message: String,
    },
    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration JSON could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuadratureError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        QuadratureError::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = QuadratureError::DegenerateInterval { limit: 2.0 };
        assert_eq!(err.to_string(), "Limits must differ: both bounds equal 2");

        let err = QuadratureError::UnknownMethod("midpoint".to_string());
        assert_eq!(err.to_string(), "Unknown integration method 'midpoint'");

        let err = QuadratureError::invalid("n_splits must be at least 1");
        assert_eq!(err.to_string(), "Invalid input: n_splits must be at least 1");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{ not json");
        let err: QuadratureError = parse.unwrap_err().into();
        assert!(matches!(err, QuadratureError::Json(_)));
    }
}
