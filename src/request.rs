//! Integrands and integration requests

/// Real function of one variable to integrate
///
/// Implemented for every `Fn(f64) -> f64`, so closures and function items
/// can be passed directly. Implementations should be pure: rules call
/// `eval` many times and may repeat points.
pub trait Integrand {
    /// Evaluate the function at `x`
    fn eval(&self, x: f64) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Real function of two variables to integrate over a rectangle
pub trait Integrand2 {
    /// Evaluate the function at `(x, y)`
    fn eval(&self, x: f64, y: f64) -> f64;
}

impl<F> Integrand2 for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// One-dimensional integral of `integrand` from `limit_a` to `limit_b`
///
/// The limits need not be ordered; `limit_a > limit_b` gives a negative
/// step. `n_splits` must be at least 1.
#[derive(Debug, Clone)]
pub struct IntegrationRequest<F> {
    /// First limit
    pub limit_a: f64,
    /// Second limit
    pub limit_b: f64,
    /// Number of subintervals (seed count for step-halving rules)
    pub n_splits: usize,
    /// Function to integrate
    pub integrand: F,
    /// Convergence tolerance for step-halving rules; the configured
    /// per-rule default applies when `None`
    pub precision: Option<f64>,
}

impl<F: Integrand> IntegrationRequest<F> {
    /// Create a request without an explicit precision
    pub fn new(limit_a: f64, limit_b: f64, n_splits: usize, integrand: F) -> Self {
        Self {
            limit_a,
            limit_b,
            n_splits,
            integrand,
            precision: None,
        }
    }

    /// Set the convergence tolerance for step-halving rules
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = Some(precision);
        self
    }
}

/// Double integral of `integrand` over `[limit_a, limit_b] x [limit_c, limit_d]`
///
/// Both axes step from their first limit towards their second:
/// `HX = (limit_b - limit_a) / n_splits_x`, `HY = (limit_d - limit_c) / n_splits_y`.
/// Swapping the limits of one axis therefore flips the sign of the result.
#[derive(Debug, Clone)]
pub struct DoubleIntegralRequest<G> {
    /// First limit of the `x` axis
    pub limit_a: f64,
    /// Second limit of the `x` axis
    pub limit_b: f64,
    /// Subintervals along `x`
    pub n_splits_x: usize,
    /// First limit of the `y` axis
    pub limit_c: f64,
    /// Second limit of the `y` axis
    pub limit_d: f64,
    /// Subintervals along `y`
    pub n_splits_y: usize,
    /// Function to integrate
    pub integrand: G,
}

impl<G: Integrand2> DoubleIntegralRequest<G> {
    /// Create a request over `x` in `(limit_a, limit_b)` and `y` in `(limit_c, limit_d)`
    pub fn new(
        (limit_a, limit_b, n_splits_x): (f64, f64, usize),
        (limit_c, limit_d, n_splits_y): (f64, f64, usize),
        integrand: G,
    ) -> Self {
        Self {
            limit_a,
            limit_b,
            n_splits_x,
            limit_c,
            limit_d,
            n_splits_y,
            integrand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn test_closures_and_fn_items_are_integrands() {
        let offset = 2.0;
        let shifted = move |x: f64| x + offset;
        assert_eq!(Integrand::eval(&shifted, 1.0), 3.0);
        assert_eq!(Integrand::eval(&square, 3.0), 9.0);

        let product = |x: f64, y: f64| x * y;
        assert_eq!(Integrand2::eval(&product, 2.0, 4.0), 8.0);
    }

    #[test]
    fn test_request_builder() {
        let request = IntegrationRequest::new(0.0, 1.0, 10, square);
        assert!(request.precision.is_none());

        let request = request.with_precision(1e-6);
        assert_eq!(request.precision, Some(1e-6));
        assert_eq!(request.n_splits, 10);
    }

    #[test]
    fn test_double_request_axes() {
        let request = DoubleIntegralRequest::new((0.0, 2.0, 4), (1.0, 3.0, 8), |x: f64, y: f64| x + y);
        assert_eq!(request.limit_b, 2.0);
        assert_eq!(request.limit_c, 1.0);
        assert_eq!(request.n_splits_y, 8);
    }
}
