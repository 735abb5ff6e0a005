//! Classical explicit Runge-Kutta 4 (RK4) step.

use crate::{Float, Result, core::ode::ODE};

use super::check_dim;

/// One classical RK4 step for a scalar problem.
///
/// ```
/// use fixstep::methods::rk4;
///
/// let y1 = rk4::step(&|_t, y| Ok(-y), 0.0, 1.0, 0.01).unwrap();
/// assert!((y1 - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn step<F>(f: &F, t: Float, y: Float, h: Float) -> Result<Float>
where
    F: Fn(Float, Float) -> Result<Float>,
{
    let k1 = f(t, y)?;
    let k2 = f(t + C2 * h, y + h * A21 * k1)?;
    let k3 = f(t + C3 * h, y + h * A32 * k2)?;
    let k4 = f(t + C4 * h, y + h * A43 * k3)?;

    Ok(y + h * (B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4))
}

/// One classical RK4 step for a vector problem.
///
/// Every stage derivative must have the length of `y`; the first stage that
/// does not aborts the step with a dimension mismatch.
pub fn step_vec<F>(f: &F, t: Float, y: &[Float], h: Float) -> Result<Vec<Float>>
where
    F: ODE,
{
    let n = y.len();
    let mut yt = vec![0.0; n];

    // Stage computations
    let k1 = f.ode(t, y)?;
    check_dim(n, &k1)?;

    for i in 0..n {
        yt[i] = y[i] + h * A21 * k1[i];
    }
    let k2 = f.ode(t + C2 * h, &yt)?;
    check_dim(n, &k2)?;

    for i in 0..n {
        yt[i] = y[i] + h * A32 * k2[i];
    }
    let k3 = f.ode(t + C3 * h, &yt)?;
    check_dim(n, &k3)?;

    for i in 0..n {
        yt[i] = y[i] + h * A43 * k3[i];
    }
    let k4 = f.ode(t + C4 * h, &yt)?;
    check_dim(n, &k4)?;

    // Update state
    for i in 0..n {
        yt[i] = y[i] + h * (B1 * k1[i] + B2 * k2[i] + B3 * k3[i] + B4 * k4[i]);
    }
    Ok(yt)
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
