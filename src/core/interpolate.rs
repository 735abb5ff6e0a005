//! Interpolation trait for dense output

use crate::Float;

/// Continuous extension of the solution over one accepted step.
pub trait Interpolate {
    /// Interpolate the solution at the given abscissa `xi`.
    fn interpolate(&self, xi: Float, yi: &mut [Float]);

    /// Interval `(xold, xold + h)` the interpolant is valid on.
    fn span(&self) -> (Float, Float);
}
