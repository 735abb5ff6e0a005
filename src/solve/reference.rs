//! Reference trajectories from the adaptive Dormand-Prince integrator.
//!
//! The fixed-step schemes are judged against these samples. Sampling happens
//! through the dense output of the adaptive solver, so the reference can be
//! taken on exactly the grid a fixed-step run produced.

use log::debug;

use crate::{
    Float, Result,
    core::{
        grid::time_grid,
        ode::{NthOrderODE, ODE},
        trajectory::{Trajectory, VectorTrajectory},
    },
    methods::{Companion, dp::dopri5, settings::Settings},
};

/// Reference solution of the n-th order problem `g` with initial conditions
/// `y0`, sampled on the fixed-step grid `time_grid(t0, t_end, h)`.
///
/// A fixed-step run over the same `(t0, t_end, h)` produces the same grid,
/// so the two value sequences can be compared index by index.
pub fn reference_solution<G>(
    g: G,
    y0: &[Float],
    t0: Float,
    t_end: Float,
    h: Float,
) -> Result<Trajectory>
where
    G: NthOrderODE,
{
    reference_solution_with(g, y0, t0, t_end, h, &Settings::default())
}

/// [`reference_solution`] with explicit solver settings.
pub fn reference_solution_with<G>(
    g: G,
    y0: &[Float],
    t0: Float,
    t_end: Float,
    h: Float,
    settings: &Settings,
) -> Result<Trajectory>
where
    G: NthOrderODE,
{
    let f = Companion::new(g, y0)?;
    let times = time_grid(t0, t_end, h)?;
    Ok(reference_at(f, y0, t0, &times, settings)?.into_first_component())
}

/// Reference solution of the order-1 scalar problem `y' = f(t, y)` on the
/// fixed-step grid `time_grid(t0, t_end, h)`.
pub fn reference_scalar<F>(f: F, y0: Float, t0: Float, t_end: Float, h: Float) -> Result<Trajectory>
where
    F: Fn(Float, Float) -> Result<Float>,
{
    let system = |t: Float, y: &[Float]| -> Result<Vec<Float>> { Ok(vec![f(t, y[0])?]) };
    let times = time_grid(t0, t_end, h)?;
    Ok(reference_at(system, &[y0], t0, &times, &Settings::default())?.into_first_component())
}

/// Full reference states of the first-order system `f` at arbitrary query
/// `times`, which must be non-decreasing and start no earlier than `t0`.
pub fn reference_at<F>(
    f: F,
    y0: &[Float],
    t0: Float,
    times: &[Float],
    settings: &Settings,
) -> Result<VectorTrajectory>
where
    F: ODE,
{
    let (y, stats) = dopri5(&f, t0, y0, times, settings)?;
    debug!(
        "reference: {} samples on [{}, {}], nfev = {}, accepted = {}, rejected = {}",
        times.len(),
        t0,
        times.last().copied().unwrap_or(t0),
        stats.nfev,
        stats.naccpt,
        stats.nrejct
    );
    Ok(VectorTrajectory::new(times.to_vec(), y))
}
