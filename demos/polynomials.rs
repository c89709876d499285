//! Basic quadrules usage: polynomials with known integrals.
//!
//! Integrates a few non-negative polynomials with every rule and compares
//! against the closed form, then runs the step-halving rules.
//!
//! Run with:
//!   cargo run --example polynomials

use quadrules::{DoubleIntegralRequest, IntegrationRequest, Integrator, Method, Side};

fn main() {
    let mut integrator = Integrator::default();

    // ∫₀² x² + 1 dx = 8/3 + 2
    let exact = 8.0 / 3.0 + 2.0;
    let request = IntegrationRequest::new(0.0, 2.0, 100, |x: f64| x * x + 1.0);

    println!("∫₀² x² + 1 dx  (exact: {exact:.12})");
    for method in Method::ALL {
        match integrator.evaluate(&request, method, false) {
            Ok(value) => println!(
                "  {:<13} {:.12}   error: {:.2e}",
                method.as_str(),
                value,
                (value - exact).abs()
            ),
            Err(e) => eprintln!("  {:<13} failed: {}", method.as_str(), e),
        }
    }
    println!();

    // Step-halving rules
    for side in [Side::Left, Side::Right] {
        match integrator.refine(&request, side) {
            Ok(r) => println!(
                "  {:?} step-halving: {:.12}   residual: {:.2e}   levels: {}   evals: {}",
                side, r.value, r.residual, r.refinements, r.fn_evals
            ),
            Err(e) => eprintln!("  {:?} step-halving failed: {}", side, e),
        }
    }
    println!();

    // ∫₀¹∫₀² x·y dy dx = 1
    let double = DoubleIntegralRequest::new((0.0, 1.0, 200), (0.0, 2.0, 200), |x: f64, y: f64| x * y);
    match integrator.double_integral(&double) {
        Ok(value) => println!("∫₀¹∫₀² x·y dy dx ≈ {value:.8}   (exact: 1)"),
        Err(e) => eprintln!("double integral failed: {e}"),
    }
    println!();

    println!("  Function evals: {}", integrator.stats.fn_evals);
    println!("  Refinements:    {}", integrator.stats.refinements);
}
