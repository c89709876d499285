//! Integrator configuration
//!
//! Holds the named defaults for the step-halving rules and the sample
//! boundary policy of the fixed-step rules. Configurations can be built in
//! code or loaded from JSON; missing JSON fields fall back to the defaults.
//!
//! ```json
//! {
//!     "left_tolerance": 1e-6,
//!     "max_refinements": 24,
//!     "boundary": "closed"
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::QuadratureError;
use crate::rules::{Boundary, Side};

/// Default convergence tolerance of the step-halving left rectangle rule
pub const DEFAULT_LEFT_TOLERANCE: f64 = 1e-4;

/// Default convergence tolerance of the step-halving right rectangle rule
pub const DEFAULT_RIGHT_TOLERANCE: f64 = 1e-3;

/// Default cap on step-halving levels
///
/// Level `k` evaluates `n * 2^k` samples, so the cap also bounds the
/// evaluation count at roughly `n * 2^max_refinements`.
pub const DEFAULT_MAX_REFINEMENTS: u32 = 20;

/// Integrator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureConfig {
    /// Tolerance for the left rule when a request carries no precision
    pub left_tolerance: f64,
    /// Tolerance for the right rule when a request carries no precision
    pub right_tolerance: f64,
    /// Maximum number of step-halving levels before giving up
    pub max_refinements: u32,
    /// Sample boundary policy of the fixed-step rectangle, trapezoidal and
    /// double-integral rules
    pub boundary: Boundary,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            left_tolerance: DEFAULT_LEFT_TOLERANCE,
            right_tolerance: DEFAULT_RIGHT_TOLERANCE,
            max_refinements: DEFAULT_MAX_REFINEMENTS,
            boundary: Boundary::default(),
        }
    }
}

impl QuadratureConfig {
    /// Parse and validate a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, QuadratureError> {
        let config: QuadratureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, QuadratureError> {
        let reader = BufReader::new(File::open(path)?);
        let config: QuadratureConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Default tolerance for the given rectangle side
    pub fn tolerance_for(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left_tolerance,
            Side::Right => self.right_tolerance,
        }
    }

    /// Check that tolerances are positive and finite and that at least one
    /// refinement level is allowed
    pub fn validate(&self) -> Result<(), QuadratureError> {
        for (name, tol) in [
            ("left_tolerance", self.left_tolerance),
            ("right_tolerance", self.right_tolerance),
        ] {
            if !tol.is_finite() || tol <= 0.0 {
                return Err(QuadratureError::invalid(format!(
                    "{} must be positive and finite, got {}",
                    name, tol
                )));
            }
        }
        if self.max_refinements == 0 {
            return Err(QuadratureError::invalid("max_refinements must be at least 1"));
        }
        Ok(())
    }
}
