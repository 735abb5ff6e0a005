//! DOPRI5 - Dormand–Prince 5(4) explicit Runge–Kutta integrator
//!
//! Reference
//! - E. Hairer, S. P. Nørsett, and G. Wanner, "Solving Ordinary Differential
//!   Equations I. Nonstiff Problems", 2nd ed., Springer (1993).

use log::{trace, warn};

use crate::{
    Error, Float, Result,
    core::{interpolate::Interpolate, ode::ODE, status::Status},
    methods::{check_dim, hinit::hinit, settings::Settings},
};

/// Counters gathered during one adaptive run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of derivative evaluations
    pub nfev: usize,
    /// Number of attempted steps
    pub nstep: usize,
    /// Number of accepted steps
    pub naccpt: usize,
    /// Number of rejected steps
    pub nrejct: usize,
}

/// Dormand–Prince DOPRI5 with adaptive step-size control, sampled through
/// its dense output at the requested `times`.
///
/// Integrates `y' = f(x, y)` forward from `(x, y0)` to the last entry of
/// `times`. `times` must be non-empty, non-decreasing and not start before
/// `x`. The returned states are in the order of `times`.
///
/// Errors from `f` abort the run unchanged. A run that exhausts `nmax`,
/// underflows the step size or detects stiffness fails with
/// [`Error::ReferenceFailed`].
pub fn dopri5<F>(
    f: &F,
    mut x: Float,
    y0: &[Float],
    times: &[Float],
    settings: &Settings,
) -> Result<(Vec<Vec<Float>>, Stats)>
where
    F: ODE,
{
    // --- Input Validation ---
    settings.validate()?;
    let Some(&xend) = times.last() else {
        return Err(Error::InvalidQueryTimes);
    };
    if !x.is_finite() {
        return Err(Error::NonFiniteBound(x));
    }
    if times[0] < x || times.iter().any(|t| !t.is_finite()) || times.windows(2).any(|w| w[1] < w[0]) {
        return Err(Error::InvalidQueryTimes);
    }

    let Settings {
        rtol,
        atol,
        uround,
        safety_factor,
        scale_min,
        scale_max,
        beta,
        hmax,
        h0,
        nmax,
        nstiff,
    } = *settings;

    // Parameters for step size selection
    let facc1 = scale_min.map_or(5.0, |f| 1.0 / f);
    let facc2 = scale_max.map_or(1.0 / 10.0, |f| 1.0 / f);
    let h_max = hmax.map_or((xend - x).abs(), Float::abs);

    // --- Declarations ---
    let n = y0.len();
    let mut y = y0.to_vec();
    let mut y1 = vec![0.0; n];
    let mut out: Vec<Vec<Float>> = Vec::with_capacity(times.len());
    let mut stats = Stats::default();
    let mut dense = DenseOutput::new(n);
    let mut facold: Float = 1e-4;
    let mut last = false;
    let mut reject = false;
    let mut nonstiff = 0;
    let mut hlamb: Float = 0.0;
    let mut iasti = 0;
    let expo1 = 0.2 - beta * 0.75;
    let posneg: Float = 1.0;

    // Query times sitting on the initial point
    while out.len() < times.len() && times[out.len()] <= x {
        out.push(y.clone());
    }
    if out.len() == times.len() {
        return Ok((out, stats));
    }

    // --- Initializations ---
    let mut k1 = f.ode(x, &y)?;
    check_dim(n, &k1)?;
    stats.nfev += 1;
    let mut h = match h0 {
        Some(h0) => h0.abs().min(h_max) * posneg,
        None => {
            stats.nfev += 1;
            hinit(f, x, &y, posneg, &k1, 5, h_max, atol, rtol)?
        }
    };

    // --- Main integration loop ---
    let status = loop {
        // Check for maximum number of steps
        if stats.nstep >= nmax {
            break Status::NeedLargerNMax;
        }

        // Check for underflow due to machine rounding
        if 0.1 * h.abs() <= x.abs() * uround {
            break Status::StepSizeTooSmall;
        }

        // Adjust last step to land on xend
        if (x + 1.01 * h - xend) * posneg > 0.0 {
            h = xend - x;
            last = true;
        }

        stats.nstep += 1;

        // Stage 2
        for i in 0..n {
            y1[i] = y[i] + h * A21 * k1[i];
        }
        let k2 = f.ode(x + C2 * h, &y1)?;
        check_dim(n, &k2)?;

        // Stage 3
        for i in 0..n {
            y1[i] = y[i] + h * (A31 * k1[i] + A32 * k2[i]);
        }
        let k3 = f.ode(x + C3 * h, &y1)?;
        check_dim(n, &k3)?;

        // Stage 4
        for i in 0..n {
            y1[i] = y[i] + h * (A41 * k1[i] + A42 * k2[i] + A43 * k3[i]);
        }
        let k4 = f.ode(x + C4 * h, &y1)?;
        check_dim(n, &k4)?;

        // Stage 5
        for i in 0..n {
            y1[i] = y[i] + h * (A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]);
        }
        let k5 = f.ode(x + C5 * h, &y1)?;
        check_dim(n, &k5)?;

        // Stage 6 (ysti)
        for i in 0..n {
            y1[i] =
                y[i] + h * (A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i]);
        }
        let ysti = y1.clone();
        let xph = x + h;
        let k6 = f.ode(xph, &y1)?;
        check_dim(n, &k6)?;

        // Final stage
        for i in 0..n {
            y1[i] =
                y[i] + h * (A71 * k1[i] + A73 * k3[i] + A74 * k4[i] + A75 * k5[i] + A76 * k6[i]);
        }
        let k7 = f.ode(xph, &y1)?;
        check_dim(n, &k7)?;
        stats.nfev += 6;

        // Error estimation
        let mut err: Float = 0.0;
        for i in 0..n {
            let e = (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i] + E7 * k7[i]) * h;
            let sk = atol + rtol * y[i].abs().max(y1[i].abs());
            err += (e / sk) * (e / sk);
        }
        err = (err / n.max(1) as Float).sqrt();

        // Computation of hnew
        let fac11 = err.powf(expo1);
        // Lund-Stabilization
        let mut fac = fac11 / facold.powf(beta);
        // We require fac1 <= hnew/h <= fac2
        fac = facc2.max(facc1.min(fac / safety_factor));
        let mut hnew = h / fac;

        if err <= 1.0 {
            // Step accepted
            facold = err.max(1.0e-4);
            stats.naccpt += 1;

            // Stiffness detection
            if stats.naccpt % nstiff == 0 || iasti > 0 {
                let mut stnum: Float = 0.0;
                let mut stden: Float = 0.0;
                for i in 0..n {
                    let d1 = k7[i] - k6[i];
                    let d2 = y1[i] - ysti[i];
                    stnum += d1 * d1;
                    stden += d2 * d2;
                }
                if stden > 0.0 {
                    hlamb = h.abs() * (stnum / stden).sqrt();
                }
                if hlamb > 3.25 {
                    nonstiff = 0;
                    iasti += 1;
                    if iasti == 15 {
                        break Status::ProbablyStiff;
                    }
                } else {
                    nonstiff += 1;
                    if nonstiff == 6 {
                        iasti = 0;
                    }
                }
            }

            // Dense output over [x, x + h]
            dense.update(x, h, &y, &y1, &k1, &k3, &k4, &k5, &k6, &k7);
            trace!("dopri5 accepted x = {} h = {} err = {:.3e}", xph, h, err);

            // Update state variables
            k1 = k7;
            std::mem::swap(&mut y, &mut y1);
            x = xph;

            // Sample query times covered by this step
            while out.len() < times.len() && (times[out.len()] <= x || last) {
                let ti = times[out.len()];
                debug_assert!(ti >= dense.span().0);
                let mut yi = vec![0.0; n];
                dense.interpolate(ti, &mut yi);
                out.push(yi);
            }

            // Normal exit
            if last {
                break Status::Success;
            }

            // Check for step size limits
            if hnew.abs() > h_max {
                hnew = posneg * h_max;
            }

            // Prevent oscillations due to previous rejected step
            if reject {
                hnew = posneg * hnew.abs().min(h.abs());
                reject = false;
            }
        } else {
            // Step rejected
            hnew = h / facc1.min(fac11 / safety_factor);
            reject = true;
            if stats.naccpt >= 1 {
                stats.nrejct += 1;
            }
            last = false;
        }
        h = hnew;
    };

    if status != Status::Success {
        warn!("dopri5 stopped at x = {} before {}: {:?}", x, xend, status);
        return Err(Error::ReferenceFailed(status));
    }
    Ok((out, stats))
}

/// Continuous output function for DOPRI5
pub fn contdp5(xi: Float, yi: &mut [Float], cont: &[Float], xold: Float, h: Float) {
    let n = cont.len() / 5;
    let theta = (xi - xold) / h;
    let theta1 = 1.0 - theta;
    for i in 0..n {
        yi[i] = cont[i]
            + theta
                * (cont[n + i]
                    + theta1
                        * (cont[2 * n + i] + theta * (cont[3 * n + i] + theta1 * cont[4 * n + i])));
    }
}

/// Dense output coefficients of the last accepted DOPRI5 step.
struct DenseOutput {
    cont: Vec<Float>,
    xold: Float,
    h: Float,
}

impl DenseOutput {
    fn new(n: usize) -> Self {
        Self {
            cont: vec![0.0; 5 * n],
            xold: 0.0,
            h: 0.0,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn update(
        &mut self,
        xold: Float,
        h: Float,
        y: &[Float],
        y1: &[Float],
        k1: &[Float],
        k3: &[Float],
        k4: &[Float],
        k5: &[Float],
        k6: &[Float],
        k7: &[Float],
    ) {
        let n = y.len();
        let cont = &mut self.cont;
        for i in 0..n {
            let ydiff = y1[i] - y[i];
            let bspl = h * k1[i] - ydiff;
            cont[i] = y[i];
            cont[n + i] = ydiff;
            cont[2 * n + i] = bspl;
            cont[3 * n + i] = -h * k7[i] + ydiff - bspl;
            cont[4 * n + i] =
                h * (D1 * k1[i] + D3 * k3[i] + D4 * k4[i] + D5 * k5[i] + D6 * k6[i] + D7 * k7[i]);
        }
        self.xold = xold;
        self.h = h;
    }
}

impl Interpolate for DenseOutput {
    fn interpolate(&self, xi: Float, yi: &mut [Float]) {
        contdp5(xi, yi, &self.cont, self.xold, self.h);
    }

    fn span(&self) -> (Float, Float) {
        (self.xold, self.xold + self.h)
    }
}

// DOPRI5 Butcher tableau coefficients
const C2: Float = 0.2;
const C3: Float = 0.3;
const C4: Float = 0.8;
const C5: Float = 8.0 / 9.0;

const A21: Float = 0.2;
const A31: Float = 3.0 / 40.0;
const A32: Float = 9.0 / 40.0;
const A41: Float = 44.0 / 45.0;
const A42: Float = -56.0 / 15.0;
const A43: Float = 32.0 / 9.0;
const A51: Float = 19372.0 / 6561.0;
const A52: Float = -25360.0 / 2187.0;
const A53: Float = 64448.0 / 6561.0;
const A54: Float = -212.0 / 729.0;
const A61: Float = 9017.0 / 3168.0;
const A62: Float = -355.0 / 33.0;
const A63: Float = 46732.0 / 5247.0;
const A64: Float = 49.0 / 176.0;
const A65: Float = -5103.0 / 18656.0;
const A71: Float = 35.0 / 384.0;
const A73: Float = 500.0 / 1113.0;
const A74: Float = 125.0 / 192.0;
const A75: Float = -2187.0 / 6784.0;
const A76: Float = 11.0 / 84.0;

const E1: Float = 71.0 / 57600.0;
const E3: Float = -71.0 / 16695.0;
const E4: Float = 71.0 / 1920.0;
const E5: Float = -17253.0 / 339200.0;
const E6: Float = 22.0 / 525.0;
const E7: Float = -1.0 / 40.0;

const D1: Float = -12715105075.0 / 11282082432.0;
const D3: Float = 87487479700.0 / 32700410799.0;
const D4: Float = -10690763975.0 / 1880347072.0;
const D5: Float = 701980252875.0 / 199316789632.0;
const D6: Float = -1453857185.0 / 822651844.0;
const D7: Float = 69997945.0 / 29380423.0;
