//! Compute an initial step size guess

use crate::{Float, Result, core::ode::ODE};

/// Compute an initial step size guess for the adaptive reference solver.
///
/// `f0` is the derivative at `(x, y)`; one extra evaluation of `f` is made
/// after an explicit Euler trial step. `iord` is the order of the method.
pub(crate) fn hinit<F>(
    f: &F,
    x: Float,
    y: &[Float],
    posneg: Float,
    f0: &[Float],
    iord: i32,
    hmax: Float,
    atol: Float,
    rtol: Float,
) -> Result<Float>
where
    F: ODE,
{
    let mut dnf: Float = 0.0;
    let mut dny: Float = 0.0;
    for (yi, fi) in y.iter().zip(f0) {
        let sk = atol + rtol * yi.abs();
        dnf += (fi / sk) * (fi / sk);
        dny += (yi / sk) * (yi / sk);
    }

    let mut h: Float = if dnf <= 1e-10 || dny <= 1e-10 {
        1.0e-6
    } else {
        (dny / dnf).sqrt() * 0.01
    };
    h = h.min(hmax.abs()) * posneg.signum();

    // Explicit Euler step: y1 = y + h * f0
    let y1: Vec<Float> = y.iter().zip(f0).map(|(yi, fi)| yi + h * fi).collect();
    let f1 = f.ode(x + h, &y1)?;

    // Estimate second derivative
    let mut der2: Float = 0.0;
    for ((yi, fi), f1i) in y.iter().zip(f0).zip(&f1) {
        let sk = atol + rtol * yi.abs();
        let df = (f1i - fi) / sk;
        der2 += df * df;
    }
    der2 = der2.sqrt() / h.abs();

    let der12 = der2.abs().max(dnf.sqrt());
    let h1 = if der12 <= 1.0e-15 {
        (1.0e-6 as Float).max(h.abs() * 1.0e-3)
    } else {
        (0.01 / der12).powf(1.0 / iord as Float)
    };

    Ok((100.0 * h.abs()).min(h1).min(hmax.abs()) * posneg.signum())
}
