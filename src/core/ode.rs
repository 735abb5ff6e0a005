//! User-supplied differential equations.

use crate::{Error, Float, Result};

/// First-order vector system `Y' = F(t, Y)`.
///
/// Implement this trait for your problem to provide the right-hand side. The
/// step schemes call `ode` with the current time `t` and state `y` and expect
/// a derivative with exactly `y.len()` components; any other length aborts
/// the integration with [`Error::DimensionMismatch`]. Returning `Err` aborts
/// the integration and hands the error back to the caller unchanged.
///
/// Closures `Fn(Float, &[Float]) -> Result<Vec<Float>>` implement `ODE`.
///
/// # Example
///
/// ```
/// use fixstep::{Float, Result, core::ode::ODE};
///
/// struct VanDerPol { eps: Float }
///
/// impl ODE for VanDerPol {
///     fn ode(&self, _t: Float, y: &[Float]) -> Result<Vec<Float>> {
///         Ok(vec![y[1], ((1.0 - y[0] * y[0]) * y[1] - y[0]) / self.eps])
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, t: Float, y: &[Float]) -> Result<Vec<Float>>;
}

impl<F> ODE for F
where
    F: Fn(Float, &[Float]) -> Result<Vec<Float>>,
{
    fn ode(&self, t: Float, y: &[Float]) -> Result<Vec<Float>> {
        self(t, y)
    }
}

/// Scalar Cauchy problem of order `n`: `y^(n) = g(t, y, y', ..., y^(n-1))`.
///
/// `order` is the number of state arguments `g` reads, which must match the
/// number of initial conditions handed to the integrator. The slice passed
/// to `g` always has exactly `order` entries.
pub trait NthOrderODE {
    /// Number of state arguments `(y, y', ..., y^(n-1))`.
    fn order(&self) -> usize;

    /// Value of the n-th derivative at `t` for the state `y`.
    fn g(&self, t: Float, y: &[Float]) -> Result<Float>;
}

/// An n-th order problem built from a closure and an explicit order.
///
/// ```
/// use fixstep::core::ode::{Nth, NthOrderODE};
///
/// // y''' = (cos(t y'') - atan(y')) / 4
/// let g = Nth::new(3, |t, y| Ok(0.25 * ((t * y[2]).cos() - y[1].atan())));
/// assert_eq!(g.order(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Nth<G> {
    order: usize,
    g: G,
}

impl<G> Nth<G>
where
    G: Fn(Float, &[Float]) -> Result<Float>,
{
    pub fn new(order: usize, g: G) -> Self {
        Self { order, g }
    }
}

impl<G> NthOrderODE for Nth<G>
where
    G: Fn(Float, &[Float]) -> Result<Float>,
{
    fn order(&self) -> usize {
        self.order
    }

    fn g(&self, t: Float, y: &[Float]) -> Result<Float> {
        (self.g)(t, y)
    }
}

/// Second-order problem `y'' = g(t, y, y')` given as a three-argument closure.
#[derive(Clone, Debug)]
pub struct SecondOrder<G>(pub G);

impl<G> NthOrderODE for SecondOrder<G>
where
    G: Fn(Float, Float, Float) -> Result<Float>,
{
    fn order(&self) -> usize {
        2
    }

    fn g(&self, t: Float, y: &[Float]) -> Result<Float> {
        match y {
            [y, yp] => (self.0)(t, *y, *yp),
            _ => Err(Error::DimensionMismatch {
                expected: 2,
                got: y.len(),
            }),
        }
    }
}
