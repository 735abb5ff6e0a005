//! Fixed-step drivers: order-1 scalar, first-order vector and n-th order problems.

use log::debug;

use crate::{
    Float, Result,
    core::{
        grid::time_grid,
        ode::{NthOrderODE, ODE, SecondOrder},
        trajectory::{Trajectory, VectorTrajectory},
    },
    methods::{Companion, IntoMethod},
};

/// Integrate the scalar problem `y' = f(t, y)`, `y(t0) = y0` on `[t0, t_end]`
/// with fixed step `h`.
///
/// The method is resolved before anything is evaluated: an unknown name
/// fails with [`Error::UnrecognizedMethod`](crate::Error::UnrecognizedMethod).
/// Time is advanced by `h` first and the step is then taken from the
/// advanced time, so `y[i + 1]` is computed with `f` evaluated from `t[i + 1]`.
/// Stepping continues while the time is strictly below `t_end`, so the last
/// sample may lie past `t_end` by less than `h` (see [`time_grid`]).
///
/// ```
/// use fixstep::prelude::*;
///
/// let traj = integrate_scalar(|_t, y| Ok(-y), 1.0, 0.0, 1.0, 0.5, "rk4").unwrap();
/// assert!((traj.y[1] - (-0.5_f64).exp()).abs() < 1e-3);
/// ```
pub fn integrate_scalar<F, M>(
    f: F,
    y0: Float,
    t0: Float,
    t_end: Float,
    h: Float,
    method: M,
) -> Result<Trajectory>
where
    F: Fn(Float, Float) -> Result<Float>,
    M: IntoMethod,
{
    let method = method.into_method()?;
    let t = time_grid(t0, t_end, h)?;
    debug!(
        "integrate_scalar: {} on [{}, {}] with h = {} ({} samples)",
        method,
        t0,
        t_end,
        h,
        t.len()
    );

    let mut y = Vec::with_capacity(t.len());
    let mut yi = y0;
    y.push(yi);
    for &ti in &t[1..] {
        yi = method.step_scalar(&f, ti, yi, h)?;
        y.push(yi);
    }

    Ok(Trajectory::new(t, y))
}

/// Integrate the first-order system `Y' = F(t, Y)`, `Y(t0) = y0` and keep
/// the full state at every sample.
///
/// Steps are taken from the advanced time as in [`integrate_scalar`].
/// Every derivative must have `y0.len()` components; the first one that does
/// not aborts with [`Error::DimensionMismatch`](crate::Error::DimensionMismatch).
pub fn integrate_vector<F, M>(
    f: F,
    y0: &[Float],
    t0: Float,
    t_end: Float,
    h: Float,
    method: M,
) -> Result<VectorTrajectory>
where
    F: ODE,
    M: IntoMethod,
{
    let method = method.into_method()?;
    let t = time_grid(t0, t_end, h)?;
    debug!(
        "integrate_vector: {} on [{}, {}] with h = {}, dim = {} ({} samples)",
        method,
        t0,
        t_end,
        h,
        y0.len(),
        t.len()
    );

    let mut y: Vec<Vec<Float>> = Vec::with_capacity(t.len());
    y.push(y0.to_vec());
    for (i, &ti) in t[1..].iter().enumerate() {
        let next = method.step_vector(&f, ti, &y[i], h)?;
        y.push(next);
    }

    Ok(VectorTrajectory::new(t, y))
}

/// Integrate the n-th order problem `y^(n) = g(t, y, ..., y^(n-1))` with
/// initial conditions `y0 = [y(t0), y'(t0), ..., y^(n-1)(t0)]` and return
/// the trajectory of `y` alone.
///
/// The order declared by `g` must equal `y0.len()`; a mismatch fails with
/// [`Error::OrderMismatch`](crate::Error::OrderMismatch) before stepping.
///
/// ```
/// use fixstep::prelude::*;
///
/// // y'' = -y, y(0) = 1, y'(0) = 0
/// let g = Nth::new(2, |_t, y| Ok(-y[0]));
/// let traj = integrate_order_n(g, &[1.0, 0.0], 0.0, 1.0, 1e-3, Method::RK4).unwrap();
/// let (t, y) = traj.last().unwrap();
/// assert!((y - t.cos()).abs() < 1e-9);
/// ```
pub fn integrate_order_n<G, M>(
    g: G,
    y0: &[Float],
    t0: Float,
    t_end: Float,
    h: Float,
    method: M,
) -> Result<Trajectory>
where
    G: NthOrderODE,
    M: IntoMethod,
{
    Ok(integrate_order_n_states(g, y0, t0, t_end, h, method)?.into_first_component())
}

/// Same as [`integrate_order_n`] but keeps every derivative `(y, ..., y^(n-1))`.
pub fn integrate_order_n_states<G, M>(
    g: G,
    y0: &[Float],
    t0: Float,
    t_end: Float,
    h: Float,
    method: M,
) -> Result<VectorTrajectory>
where
    G: NthOrderODE,
    M: IntoMethod,
{
    let method = method.into_method()?;
    let f = Companion::new(g, y0)?;
    integrate_vector(f, y0, t0, t_end, h, method)
}

/// Integrate `y'' = g(t, y, y')` with `y(t0) = y0`, `y'(t0) = yp0`.
pub fn integrate_order_2<G, M>(
    g: G,
    y0: Float,
    yp0: Float,
    t0: Float,
    t_end: Float,
    h: Float,
    method: M,
) -> Result<Trajectory>
where
    G: Fn(Float, Float, Float) -> Result<Float>,
    M: IntoMethod,
{
    integrate_order_n(SecondOrder(g), &[y0, yp0], t0, t_end, h, method)
}
