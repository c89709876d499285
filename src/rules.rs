//! Fixed-step quadrature rules
//!
//! Left/right rectangle, trapezoidal and Simpson rules over `n` equal
//! subintervals of width `h = (b - a) / n`.
//!
//! Sample points are always generated from an integer index as
//! `x_i = a + i * h`, never by accumulating `x += h`, so which samples a
//! rule includes does not depend on floating-point drift.
//!
//! The rectangle rules absolute-value every sample and therefore
//! approximate `∫|f(x)| dx`. The trapezoidal and Simpson rules keep the two
//! endpoint samples signed and absolute-value the interior ones. The
//! rectangle rules have no separate endpoint terms and use the single
//! [`RECTANGLE_TRANSFORM`]; the other two rules use a [`SamplePolicy`].

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// How a single function sample enters a weighted sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleTransform {
    /// Use `|f(x)|`
    Absolute,
    /// Use `f(x)` unchanged
    Signed,
}

impl SampleTransform {
    /// Apply the transform to a sample value
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            SampleTransform::Absolute => value.abs(),
            SampleTransform::Signed => value,
        }
    }
}

/// Transforms applied to the endpoint and interior samples of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePolicy {
    /// Transform for `f(a)` and `f(b)` in rules that weight endpoints separately
    pub endpoints: SampleTransform,
    /// Transform for every other sample
    pub interior: SampleTransform,
}

/// Rectangle rules: every sample absolute-valued
pub const RECTANGLE_TRANSFORM: SampleTransform = SampleTransform::Absolute;

/// Trapezoidal rule: signed endpoints, absolute interior
pub const TRAPEZOID_POLICY: SamplePolicy = SamplePolicy {
    endpoints: SampleTransform::Signed,
    interior: SampleTransform::Absolute,
};

/// Simpson's rule: signed endpoints, absolute interior
pub const SIMPSON_POLICY: SamplePolicy = SamplePolicy {
    endpoints: SampleTransform::Signed,
    interior: SampleTransform::Absolute,
};

/// Which sample indices the rectangle and trapezoidal rules visit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Boundary {
    /// Exactly `n` rectangle samples: left `0..n`, right `1..=n`.
    /// Trapezoidal interior samples are `1..n`.
    #[default]
    HalfOpen,
    /// One extra sample past the last subinterval: left `0..=n`
    /// (`x <= b`), right `1..=n+1` (`x <= b + h`).
    /// Trapezoidal interior samples are `1..=n`.
    Closed,
}

/// Which endpoint of each subinterval a rectangle rule samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Sample at `a + i*h`, starting from `i = 0`
    Left,
    /// Sample at `a + i*h`, starting from `i = 1`
    Right,
}

/// Step size for `n` subintervals of `[a, b]`
#[inline]
pub fn step(a: f64, b: f64, n: usize) -> f64 {
    (b - a) / n as f64
}

/// Sample indices visited by a rectangle rule over `n` subintervals
pub fn rectangle_indices(side: Side, n: usize, boundary: Boundary) -> Range<usize> {
    match (side, boundary) {
        (Side::Left, Boundary::HalfOpen) => 0..n,
        (Side::Left, Boundary::Closed) => 0..n.saturating_add(1),
        (Side::Right, Boundary::HalfOpen) => 1..n.saturating_add(1),
        (Side::Right, Boundary::Closed) => 1..n.saturating_add(2),
    }
}

/// Sum `transform(f(a + i*h))` over `indices`, in increasing index order
pub fn sample_sum<F>(
    a: f64,
    h: f64,
    indices: Range<usize>,
    transform: SampleTransform,
    f: &mut F,
) -> f64
where
    F: FnMut(f64) -> f64,
{
    let mut sum = 0.0;
    for i in indices {
        sum += transform.apply(f(a + i as f64 * h));
    }
    sum
}

/// Rectangle rule with an explicit sample transform
///
/// This is the primitive shared by the 1D rectangle rules and both axes of
/// the double integral.
pub fn rectangle_with<F>(
    a: f64,
    b: f64,
    n: usize,
    side: Side,
    boundary: Boundary,
    transform: SampleTransform,
    mut f: F,
) -> f64
where
    F: FnMut(f64) -> f64,
{
    let h = step(a, b, n);
    let sum = sample_sum(a, h, rectangle_indices(side, n, boundary), transform, &mut f);
    sum * h
}

/// Left rectangle rule: `h * Σ |f(a + i*h)|` starting from `i = 0`
pub fn left_rectangle<F>(a: f64, b: f64, n: usize, boundary: Boundary, f: F) -> f64
where
    F: FnMut(f64) -> f64,
{
    rectangle_with(a, b, n, Side::Left, boundary, RECTANGLE_TRANSFORM, f)
}

/// Right rectangle rule: `h * Σ |f(a + i*h)|` starting from `i = 1`
pub fn right_rectangle<F>(a: f64, b: f64, n: usize, boundary: Boundary, f: F) -> f64
where
    F: FnMut(f64) -> f64,
{
    rectangle_with(a, b, n, Side::Right, boundary, RECTANGLE_TRANSFORM, f)
}

/// Trapezoidal rule
///
/// `h * ((f(a) + f(b)) / 2 + Σ |f(a + i*h)|)`, endpoints signed.
pub fn trapezoid<F>(a: f64, b: f64, n: usize, boundary: Boundary, mut f: F) -> f64
where
    F: FnMut(f64) -> f64,
{
    let h = step(a, b, n);
    let policy = TRAPEZOID_POLICY;

    let fa = policy.endpoints.apply(f(a));
    let fb = policy.endpoints.apply(f(b));
    let mut sum = (fa + fb) / 2.0;

    let interior = match boundary {
        Boundary::HalfOpen => 1..n,
        Boundary::Closed => 1..n.saturating_add(1),
    };
    sum += sample_sum(a, h, interior, policy.interior, &mut f);

    sum * h
}

/// Composite Simpson rule
///
/// Odd interior samples (`i <= n`) are weighted 4, even interior samples
/// (`2 <= i <= n - 1`) are weighted 2, endpoints are signed:
/// `(h/3) * (f(a) + f(b) + 4*Σodd + 2*Σeven)`.
///
/// For even `n` this is the textbook composite rule and is exact for
/// polynomials up to degree three (on intervals where the integrand does
/// not change sign).
pub fn simpson<F>(a: f64, b: f64, n: usize, mut f: F) -> f64
where
    F: FnMut(f64) -> f64,
{
    let h = step(a, b, n);
    let policy = SIMPSON_POLICY;

    let mut odd = 0.0;
    for i in (1..n.saturating_add(1)).step_by(2) {
        odd += policy.interior.apply(f(a + i as f64 * h));
    }

    let mut even = 0.0;
    for i in (2..n).step_by(2) {
        even += policy.interior.apply(f(a + i as f64 * h));
    }

    let fa = policy.endpoints.apply(f(a));
    let fb = policy.endpoints.apply(f(b));

    (h / 3.0) * (fa + fb + 4.0 * odd + 2.0 * even)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rectangle_indices() {
        assert_eq!(rectangle_indices(Side::Left, 4, Boundary::HalfOpen), 0..4);
        assert_eq!(rectangle_indices(Side::Left, 4, Boundary::Closed), 0..5);
        assert_eq!(rectangle_indices(Side::Right, 4, Boundary::HalfOpen), 1..5);
        assert_eq!(rectangle_indices(Side::Right, 4, Boundary::Closed), 1..6);
    }

    #[test]
    fn test_rectangle_indices_saturate_at_usize_max() {
        let n = usize::MAX;
        assert_eq!(rectangle_indices(Side::Left, n, Boundary::HalfOpen), 0..n);
        assert_eq!(rectangle_indices(Side::Left, n, Boundary::Closed), 0..n);
        assert_eq!(rectangle_indices(Side::Right, n, Boundary::HalfOpen), 1..n);
        assert_eq!(rectangle_indices(Side::Right, n, Boundary::Closed), 1..n);
    }

    #[test]
    fn test_constant_rectangles_use_magnitude() {
        for &c in &[3.0, -3.0] {
            let left = left_rectangle(1.0, 5.0, 8, Boundary::HalfOpen, |_| c);
            let right = right_rectangle(1.0, 5.0, 8, Boundary::HalfOpen, |_| c);
            assert_abs_diff_eq!(left, 12.0, epsilon = 1e-12);
            assert_abs_diff_eq!(right, 12.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_closed_boundary_adds_one_sample() {
        // n + 1 samples of width h
        let left = left_rectangle(0.0, 1.0, 4, Boundary::Closed, |_| 1.0);
        let right = right_rectangle(0.0, 1.0, 4, Boundary::Closed, |_| 1.0);
        assert_abs_diff_eq!(left, 1.25, epsilon = 1e-12);
        assert_abs_diff_eq!(right, 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_closed_boundary_is_deterministic() {
        // 0.1 accumulated ten times overshoots 1.0; indexed samples must
        // still reach exactly eleven points.
        let mut count = 0;
        left_rectangle(0.0, 1.0, 10, Boundary::Closed, |_| {
            count += 1;
            1.0
        });
        assert_eq!(count, 11);
    }

    #[test]
    fn test_right_rectangle_samples_right_endpoints() {
        let mut seen = Vec::new();
        right_rectangle(0.0, 1.0, 4, Boundary::HalfOpen, |x| {
            seen.push(x);
            x
        });
        assert_eq!(seen, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_trapezoid_constant_sign_asymmetry() {
        let positive = trapezoid(0.0, 1.0, 4, Boundary::HalfOpen, |_| 2.0);
        assert_abs_diff_eq!(positive, 2.0, epsilon = 1e-12);

        // Endpoints contribute -2 * h, three interior samples +2 * h each
        let negative = trapezoid(0.0, 1.0, 4, Boundary::HalfOpen, |_| -2.0);
        assert_abs_diff_eq!(negative, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_closed_includes_upper_limit_in_interior() {
        let value = trapezoid(0.0, 1.0, 4, Boundary::Closed, |_| 2.0);
        assert_abs_diff_eq!(value, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_single_split() {
        let value = trapezoid(0.0, 2.0, 1, Boundary::HalfOpen, |x| x * x);
        assert_abs_diff_eq!(value, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_constant_sign_asymmetry() {
        let positive = simpson(0.0, 2.0, 6, |_| 1.5);
        assert_abs_diff_eq!(positive, 3.0, epsilon = 1e-12);

        // (h/3) * (-1.5 - 1.5 + 4*3*1.5 + 2*2*1.5) with h = 1/3
        let negative = simpson(0.0, 2.0, 6, |_| -1.5);
        assert_abs_diff_eq!(negative, 7.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_exact_on_cubic() {
        // ∫₀² x³ + x² + 1 dx = 4 + 8/3 + 2
        let value = simpson(0.0, 2.0, 10, |x| x * x * x + x * x + 1.0);
        assert_abs_diff_eq!(value, 26.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_odd_splits_weights_upper_limit() {
        // n = 3: odd indices 1 and 3, even index 2
        let mut seen = Vec::new();
        simpson(0.0, 3.0, 3, |x| {
            seen.push(x);
            1.0
        });
        assert_eq!(seen, vec![1.0, 3.0, 2.0, 0.0, 3.0]);
    }

    #[test]
    fn test_reversed_limits_flip_sign() {
        let forward = left_rectangle(0.0, 2.0, 100, Boundary::HalfOpen, |x| x);
        let backward = left_rectangle(2.0, 0.0, 100, Boundary::HalfOpen, |x| x);
        assert!(forward > 0.0);
        assert!(backward < 0.0);
    }

    #[test]
    fn test_signed_transform_keeps_sign() {
        let value = rectangle_with(
            0.0,
            1.0,
            4,
            Side::Left,
            Boundary::HalfOpen,
            SampleTransform::Signed,
            |_| -1.0,
        );
        assert_abs_diff_eq!(value, -1.0, epsilon = 1e-12);
    }
}
