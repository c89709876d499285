//! Double integral over a rectangle
//!
//! Applies the left rectangle rule along each axis. The inner integral over
//! `y` absolute-values every sample, like the 1D rectangle rules; the outer
//! sum over `x` keeps the sign of each inner integral, so the sign of the
//! result follows the orientation of both axes.

use crate::rules::{rectangle_with, Boundary, SampleTransform, Side};

/// Left-rectangle double integral of `f` over `x` from `a` to `b` and `y`
/// from `c` to `d`
///
/// `HX = (b - a) / nx` and `HY = (d - c) / ny`. For each outer sample `x`
/// the inner integral is `IY(x) = HY * Σ |f(x, y_j)|`, and the result is
/// `HX * Σ IY(x_i)`.
pub fn double_rectangle<G>(
    (a, b, nx): (f64, f64, usize),
    (c, d, ny): (f64, f64, usize),
    boundary: Boundary,
    mut f: G,
) -> f64
where
    G: FnMut(f64, f64) -> f64,
{
    rectangle_with(a, b, nx, Side::Left, boundary, SampleTransform::Signed, |x| {
        rectangle_with(
            c,
            d,
            ny,
            Side::Left,
            boundary,
            SampleTransform::Absolute,
            |y| f(x, y),
        )
    })
}
