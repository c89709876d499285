//! # quadrules: Classical Quadrature Rules
//!
//! Approximates definite integrals of one- and two-variable real functions
//! over bounded intervals and rectangles.
//!
//! ## Features
//!
//! - Fixed-step left rectangle, right rectangle, trapezoidal and Simpson rules
//! - Step-halving left/right rectangle rules that refine until successive
//!   estimates agree within a tolerance, with a bounded number of levels
//! - Left-rectangle double integral over a rectangle
//! - A dispatcher that validates requests and selects a rule by name
//! - JSON-loadable configuration with named defaults
//!
//! ## Basic Usage
//!
//! ```rust
//! use quadrules::{Integrator, IntegrationRequest, Method};
//!
//! let mut integrator = Integrator::default();
//! let request = IntegrationRequest::new(0.0, 1.0, 1_000, |x: f64| x * x);
//!
//! let value = integrator.evaluate(&request, Method::Trapezoidal, false).unwrap();
//! assert!((value - 1.0 / 3.0).abs() < 1e-3);
//! ```
//!
//! Callers that only need a value or nothing can use the selector form:
//!
//! ```rust
//! use quadrules::{integral_value, IntegrationRequest};
//!
//! let request = IntegrationRequest::new(0.0, 1.0, 100, |x: f64| x).with_precision(1e-5);
//! let value = integral_value(&request, "right-square", true);
//! assert!(value.is_some());
//!
//! assert_eq!(integral_value(&request, "gauss", false), None);
//! ```
//!
//! ## Sample Conventions
//!
//! The rectangle rules and the double integral use `|f(x)|` for every
//! sample and therefore approximate `∫|f|`. The trapezoidal and Simpson
//! rules use `|f(x)|` for interior samples but keep `f(a)` and `f(b)`
//! signed. For non-negative integrands all rules approximate the ordinary
//! integral.
//!
//! ## Step-Halving Rules
//!
//! Starting from `n` subintervals, the estimate is recomputed with `h`
//! halved until `|I(h) - I(2h)| <= tolerance`. Default tolerances are
//! `1e-4` for the left rule and `1e-3` for the right rule. The number of
//! levels is capped by [`QuadratureConfig::max_refinements`]; exceeding it
//! returns [`QuadratureError::DidNotConverge`].

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod adaptive;
pub mod config;
pub mod double;
pub mod error;
pub mod integrator;
pub mod method;
pub mod request;
pub mod rules;

pub use adaptive::Refinement;
pub use config::{
    QuadratureConfig, DEFAULT_LEFT_TOLERANCE, DEFAULT_MAX_REFINEMENTS, DEFAULT_RIGHT_TOLERANCE,
};
pub use error::QuadratureError;
pub use integrator::{integral_value, Integrator, Stats};
pub use method::Method;
pub use request::{DoubleIntegralRequest, Integrand, Integrand2, IntegrationRequest};
pub use rules::{Boundary, SamplePolicy, SampleTransform, Side, RECTANGLE_TRANSFORM};
