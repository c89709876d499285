//! Quadrature integrator and method dispatcher
//!
//! [`Integrator`] owns a [`QuadratureConfig`] and evaluation statistics and
//! exposes every rule as a method. [`Integrator::evaluate`] validates a
//! request and routes it to the selected rule; [`Integrator::integral_value`]
//! wraps it for callers that want a plain `Option<f64>`.

use log::{error, warn};

use crate::adaptive::{refine_rectangle, Refinement};
use crate::config::QuadratureConfig;
use crate::double::double_rectangle;
use crate::error::QuadratureError;
use crate::method::Method;
use crate::request::{DoubleIntegralRequest, Integrand, Integrand2, IntegrationRequest};
use crate::rules::{self, Side};

/// Evaluation statistics for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Total number of integrand evaluations
    pub fn_evals: u64,
    /// Step-halving levels evaluated by the adaptive rules
    pub refinements: u64,
}

/// Quadrature integrator
///
/// # Example
/// ```
/// use quadrules::{Integrator, IntegrationRequest, Method};
///
/// let mut integrator = Integrator::default();
/// let request = IntegrationRequest::new(0.0, 2.0, 100, |x: f64| x * x);
///
/// let area = integrator.evaluate(&request, Method::Simpson, false).unwrap();
/// assert!((area - 8.0 / 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Integrator {
    config: QuadratureConfig,
    /// Evaluation statistics accumulated since creation or the last reset
    pub stats: Stats,
}

impl Integrator {
    /// Create an integrator with the given configuration
    pub fn new(config: QuadratureConfig) -> Self {
        Self {
            config,
            stats: Stats::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &QuadratureConfig {
        &self.config
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    /// Fixed-step left rectangle rule, approximating `∫|f|`
    pub fn left_rectangle<F: Integrand>(&mut self, request: &IntegrationRequest<F>) -> f64 {
        let boundary = self.config.boundary;
        let mut evals = 0u64;
        let value = rules::left_rectangle(
            request.limit_a,
            request.limit_b,
            request.n_splits,
            boundary,
            counted(&request.integrand, &mut evals),
        );
        self.stats.fn_evals += evals;
        value
    }

    /// Fixed-step right rectangle rule, approximating `∫|f|`
    pub fn right_rectangle<F: Integrand>(&mut self, request: &IntegrationRequest<F>) -> f64 {
        let boundary = self.config.boundary;
        let mut evals = 0u64;
        let value = rules::right_rectangle(
            request.limit_a,
            request.limit_b,
            request.n_splits,
            boundary,
            counted(&request.integrand, &mut evals),
        );
        self.stats.fn_evals += evals;
        value
    }

    /// Trapezoidal rule with signed endpoints and absolute interior samples
    pub fn trapezoid<F: Integrand>(&mut self, request: &IntegrationRequest<F>) -> f64 {
        let boundary = self.config.boundary;
        let mut evals = 0u64;
        let value = rules::trapezoid(
            request.limit_a,
            request.limit_b,
            request.n_splits,
            boundary,
            counted(&request.integrand, &mut evals),
        );
        self.stats.fn_evals += evals;
        value
    }

    /// Simpson's rule with signed endpoints and absolute interior samples
    pub fn simpson<F: Integrand>(&mut self, request: &IntegrationRequest<F>) -> f64 {
        let mut evals = 0u64;
        let value = rules::simpson(
            request.limit_a,
            request.limit_b,
            request.n_splits,
            counted(&request.integrand, &mut evals),
        );
        self.stats.fn_evals += evals;
        value
    }

    /// Step-halving left rectangle rule
    ///
    /// Uses `request.precision`, or `left_tolerance` from the configuration.
    pub fn adaptive_left<F: Integrand>(
        &mut self,
        request: &IntegrationRequest<F>,
    ) -> Result<f64, QuadratureError> {
        self.refine(request, Side::Left).map(|r| r.value)
    }

    /// Step-halving right rectangle rule
    ///
    /// Uses `request.precision`, or `right_tolerance` from the configuration.
    pub fn adaptive_right<F: Integrand>(
        &mut self,
        request: &IntegrationRequest<F>,
    ) -> Result<f64, QuadratureError> {
        self.refine(request, Side::Right).map(|r| r.value)
    }

    /// Run a step-halving rectangle rule and return its full outcome
    ///
    /// # Errors
    /// * [`QuadratureError::InvalidInput`] if `request.precision` is set but
    ///   not positive and finite
    /// * [`QuadratureError::DidNotConverge`] / [`QuadratureError::NonFiniteEstimate`]
    ///   from the refinement loop
    pub fn refine<F: Integrand>(
        &mut self,
        request: &IntegrationRequest<F>,
        side: Side,
    ) -> Result<Refinement, QuadratureError> {
        let tolerance = match request.precision {
            Some(precision) => validate_precision(precision)?,
            None => self.config.tolerance_for(side),
        };

        let mut evals = 0u64;
        let result = refine_rectangle(
            request.limit_a,
            request.limit_b,
            request.n_splits,
            side,
            tolerance,
            self.config.max_refinements,
            counted(&request.integrand, &mut evals),
        );
        self.stats.fn_evals += evals;

        match &result {
            Ok(refinement) => self.stats.refinements += u64::from(refinement.refinements),
            Err(QuadratureError::DidNotConverge { refinements, .. })
            | Err(QuadratureError::NonFiniteEstimate { refinements }) => {
                self.stats.refinements += u64::from(*refinements)
            }
            Err(_) => {}
        }
        result
    }

    /// Left-rectangle double integral over a rectangle
    ///
    /// # Errors
    /// * [`QuadratureError::DegenerateInterval`] if either axis has equal limits
    /// * [`QuadratureError::InvalidInput`] for non-finite limits or zero splits
    pub fn double_integral<G: Integrand2>(
        &mut self,
        request: &DoubleIntegralRequest<G>,
    ) -> Result<f64, QuadratureError> {
        validate_axis("x", request.limit_a, request.limit_b, request.n_splits_x)?;
        validate_axis("y", request.limit_c, request.limit_d, request.n_splits_y)?;

        let mut evals = 0u64;
        let value = double_rectangle(
            (request.limit_a, request.limit_b, request.n_splits_x),
            (request.limit_c, request.limit_d, request.n_splits_y),
            self.config.boundary,
            |x, y| {
                evals += 1;
                Integrand2::eval(&request.integrand, x, y)
            },
        );
        self.stats.fn_evals += evals;
        Ok(value)
    }

    /// Validate a request and evaluate it with `method`
    ///
    /// With `use_precision` the rectangle rules run in step-halving mode.
    /// The trapezoidal and Simpson rules have no step-halving form and
    /// ignore the flag.
    ///
    /// # Errors
    /// * [`QuadratureError::DegenerateInterval`] if `limit_a == limit_b`
    /// * [`QuadratureError::InvalidInput`] for non-finite limits or zero
    ///   splits, and in step-halving mode for a non-positive precision
    /// * [`QuadratureError::DidNotConverge`] / [`QuadratureError::NonFiniteEstimate`]
    ///   from the step-halving rules
    pub fn evaluate<F: Integrand>(
        &mut self,
        request: &IntegrationRequest<F>,
        method: Method,
        use_precision: bool,
    ) -> Result<f64, QuadratureError> {
        validate_request(request)?;

        match (method, use_precision) {
            (Method::LeftSquare, true) => self.adaptive_left(request),
            (Method::LeftSquare, false) => Ok(self.left_rectangle(request)),
            (Method::RightSquare, true) => self.adaptive_right(request),
            (Method::RightSquare, false) => Ok(self.right_rectangle(request)),
            (Method::Trapezoidal, _) => Ok(self.trapezoid(request)),
            (Method::Simpson, _) => Ok(self.simpson(request)),
        }
    }

    /// Evaluate with a method selector, returning `None` when no value can
    /// be produced
    ///
    /// Equal limits and other invalid input are logged at error level and
    /// yield `None`, whatever the selector. An unknown selector on a valid
    /// request yields `None` without a diagnostic. Non-convergence of a
    /// step-halving rule is logged as a warning.
    pub fn integral_value<F: Integrand>(
        &mut self,
        request: &IntegrationRequest<F>,
        method: &str,
        use_precision: bool,
    ) -> Option<f64> {
        if let Err(err) = validate_request(request) {
            error!("{}", err);
            return None;
        }
        let method: Method = method.parse().ok()?;

        match self.evaluate(request, method, use_precision) {
            Ok(value) => Some(value),
            Err(err @ QuadratureError::DidNotConverge { .. })
            | Err(err @ QuadratureError::NonFiniteEstimate { .. }) => {
                warn!("{} integration failed: {}", method, err);
                None
            }
            Err(err) => {
                error!("{}", err);
                None
            }
        }
    }
}

/// Evaluate with a method selector using the default configuration
///
/// ```
/// use quadrules::{integral_value, IntegrationRequest};
///
/// let request = IntegrationRequest::new(0.0, 1.0, 1000, |x: f64| x);
/// let value = integral_value(&request, "trapezoidal", false).unwrap();
/// assert!((value - 0.5).abs() < 1e-3);
///
/// let degenerate = IntegrationRequest::new(1.0, 1.0, 1000, |x: f64| x);
/// assert_eq!(integral_value(&degenerate, "simpson", false), None);
/// ```
pub fn integral_value<F: Integrand>(
    request: &IntegrationRequest<F>,
    method: &str,
    use_precision: bool,
) -> Option<f64> {
    Integrator::default().integral_value(request, method, use_precision)
}

/// Wrap an integrand so every evaluation increments `counter`
fn counted<'a, F: Integrand>(f: &'a F, counter: &'a mut u64) -> impl FnMut(f64) -> f64 + 'a {
    move |x| {
        *counter += 1;
        Integrand::eval(f, x)
    }
}

fn validate_request<F>(request: &IntegrationRequest<F>) -> Result<(), QuadratureError> {
    validate_axis("", request.limit_a, request.limit_b, request.n_splits)
}

/// Precision is only meaningful to the step-halving rules
fn validate_precision(precision: f64) -> Result<f64, QuadratureError> {
    if !precision.is_finite() || precision <= 0.0 {
        return Err(QuadratureError::invalid(format!(
            "precision must be positive and finite, got {}",
            precision
        )));
    }
    Ok(precision)
}

fn validate_axis(axis: &str, lower: f64, upper: f64, n_splits: usize) -> Result<(), QuadratureError> {
    let prefix = if axis.is_empty() {
        String::new()
    } else {
        format!("{} axis: ", axis)
    };
    if !lower.is_finite() || !upper.is_finite() {
        return Err(QuadratureError::invalid(format!(
            "{}limits must be finite, got {} and {}",
            prefix, lower, upper
        )));
    }
    if lower == upper {
        return Err(QuadratureError::DegenerateInterval { limit: lower });
    }
    if n_splits == 0 {
        return Err(QuadratureError::invalid(format!(
            "{}n_splits must be at least 1",
            prefix
        )));
    }
    Ok(())
}
