//! Step-halving rectangle rules
//!
//! Repeats a rectangle-rule estimate with the step size halved each time
//! until two successive estimates differ by no more than the tolerance.
//! Convergence is judged against the previous estimate only, never against
//! a known exact value.
//!
//! Every refinement level evaluates the integrand on its whole sample grid
//! again, so points shared with coarser levels are evaluated more than once.

use log::debug;

use crate::error::QuadratureError;
use crate::rules::{rectangle_indices, sample_sum, step, Boundary, SampleTransform, Side};

/// Outcome of a converged step-halving run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refinement {
    /// Estimate at the finest level evaluated
    pub value: f64,
    /// `|value - previous estimate|` at the final level
    pub residual: f64,
    /// Number of levels evaluated (at least one)
    pub refinements: u32,
    /// Integrand evaluations across all levels
    pub fn_evals: u64,
}

/// Refine a rectangle rule by halving `h` until the residual is `<= tolerance`
///
/// The first level uses `n` subintervals. The residual starts at `1.0`
/// and the previous estimate at `0.0`, so at least one level is always
/// evaluated. The left variant samples `a + i*h` for `i` in `0..N`, the
/// right variant for `i` in `1..=N`, where `N = n * 2^k` at level `k`.
///
/// # Errors
/// * [`QuadratureError::DidNotConverge`] once `max_refinements` levels have
///   been evaluated without meeting the tolerance, or when the split count
///   would overflow
/// * [`QuadratureError::NonFiniteEstimate`] if an estimate is NaN or infinite
pub fn refine_rectangle<F>(
    a: f64,
    b: f64,
    n: usize,
    side: Side,
    tolerance: f64,
    max_refinements: u32,
    mut f: F,
) -> Result<Refinement, QuadratureError>
where
    F: FnMut(f64) -> f64,
{
    let mut previous = 0.0;
    let mut current = 0.0;
    let mut residual = 1.0;
    let mut h = step(a, b, n);
    let mut splits = n;
    let mut refinements = 0u32;
    let mut fn_evals = 0u64;

    while residual > tolerance {
        if refinements >= max_refinements {
            return Err(QuadratureError::DidNotConverge {
                refinements,
                residual,
            });
        }
        if refinements > 0 {
            splits = splits
                .checked_mul(2)
                .ok_or(QuadratureError::DidNotConverge {
                    refinements,
                    residual,
                })?;
            h /= 2.0;
        }

        let indices = rectangle_indices(side, splits, Boundary::HalfOpen);
        fn_evals += indices.len() as u64;
        let sum = sample_sum(a, h, indices, SampleTransform::Absolute, &mut f);

        current = h * sum;
        refinements += 1;
        if !current.is_finite() {
            return Err(QuadratureError::NonFiniteEstimate { refinements });
        }

        residual = (current - previous).abs();
        previous = current;

        debug!(
            "{:?} rectangle level {}: splits = {}, estimate = {}, residual = {:e}",
            side, refinements, splits, current, residual
        );
    }

    Ok(Refinement {
        value: current,
        residual,
        refinements,
        fn_evals,
    })
}
