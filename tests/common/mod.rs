#![allow(dead_code)]

use fixstep::prelude::*;
use simplelog::{Config, LevelFilter, TestLogger};

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

/// Simple harmonic oscillator `x'' = -x` as a first-order system.
pub struct SHO;

impl ODE for SHO {
    fn ode(&self, _t: Float, y: &[Float]) -> Result<Vec<Float>> {
        Ok(vec![y[1], -y[0]])
    }
}

/// Damped pendulum `theta'' = -2 zeta omega theta' - omega^2 sin(theta)`.
pub struct Pendulum {
    pub zeta: Float,
    pub omega: Float,
}

impl Default for Pendulum {
    fn default() -> Self {
        Self {
            zeta: 0.22,
            omega: 4.0,
        }
    }
}

impl NthOrderODE for Pendulum {
    fn order(&self) -> usize {
        2
    }

    fn g(&self, _t: Float, y: &[Float]) -> Result<Float> {
        Ok(-2.0 * self.zeta * self.omega * y[1] - self.omega * self.omega * y[0].sin())
    }
}

/// Linear test equation `y' = k y`.
pub fn linear(k: Float) -> impl Fn(Float, Float) -> Result<Float> {
    move |_t, y| Ok(k * y)
}

/// Exact solution of `y' = k y`, `y(t0) = y0`.
pub fn linear_exact(k: Float, y0: Float, t0: Float, t: Float) -> Float {
    y0 * (k * (t - t0)).exp()
}
