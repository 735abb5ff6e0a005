//! Reduction of an n-th order scalar problem to a first-order system.

use crate::{
    Error, Float, Result,
    core::ode::{NthOrderODE, ODE},
};

/// Companion-form right-hand side of an n-th order scalar problem.
///
/// For `y^(n) = g(t, y, y', ..., y^(n-1))` the state is
/// `Y = (y, y', ..., y^(n-1))` and
///
/// ```text
/// F(t, Y) = (Y[1], ..., Y[n-1], g(t, Y[0], ..., Y[n-1]))
/// ```
///
/// so every component moves one derivative order down and the last one is
/// the n-th derivative evaluated at the current state.
#[derive(Clone, Debug)]
pub struct Companion<G> {
    g: G,
    order: usize,
}

impl<G> Companion<G>
where
    G: NthOrderODE,
{
    /// Lift `g` for a problem with initial conditions `y0`.
    ///
    /// The order declared by `g` must match `y0.len()`; both are checked
    /// here, before anything is evaluated.
    pub fn new(g: G, y0: &[Float]) -> Result<Self> {
        let order = g.order();
        if order == 0 {
            return Err(Error::ZeroOrder);
        }
        if order != y0.len() {
            return Err(Error::OrderMismatch {
                order,
                initial: y0.len(),
            });
        }
        Ok(Self { g, order })
    }

    /// Dimension of the first-order system.
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn into_inner(self) -> G {
        self.g
    }
}

impl<G> ODE for Companion<G>
where
    G: NthOrderODE,
{
    fn ode(&self, t: Float, y: &[Float]) -> Result<Vec<Float>> {
        if y.len() != self.order {
            return Err(Error::DimensionMismatch {
                expected: self.order,
                got: y.len(),
            });
        }
        let mut dydt = Vec::with_capacity(self.order);
        dydt.extend_from_slice(&y[1..]);
        dydt.push(self.g.g(t, y)?);
        Ok(dydt)
    }
}
