//! Settings for the adaptive reference integrator

use bon::Builder;

use crate::{Error, Float, Result};

#[derive(Builder, Clone, Debug)]
/// Settings for the adaptive Dormand-Prince reference integrator.
///
/// The defaults ask for far tighter accuracy than any fixed-step run can
/// reach, which is what a reference trajectory is for.
///
/// ```
/// use fixstep::methods::settings::Settings;
///
/// let settings = Settings::builder().rtol(1e-8).atol(1e-10).build();
/// assert_eq!(settings.nmax, 100_000);
/// ```
pub struct Settings {
    /// Relative tolerance for error estimation.
    #[builder(default = 1e-10)]
    pub rtol: Float,
    /// Absolute tolerance for error estimation.
    #[builder(default = 1e-12)]
    pub atol: Float,
    /// The rounding unit, typically machine epsilon
    #[builder(default = 2.3e-16)]
    pub uround: Float,
    /// safety factor in step-size prediction.
    #[builder(default = 0.9)]
    pub safety_factor: Float,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max
    pub scale_min: Option<Float>,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max
    pub scale_max: Option<Float>,
    /// Beta factor for stabilized step size control. Positive values of Beta
    /// ( <= 0.04 ) make the step size control more stable.
    #[builder(default = 0.04)]
    pub beta: Float,
    /// Maximal step size. Defaults to the length of the integration interval.
    pub hmax: Option<Float>,
    /// Initial step size. None will result in an initial guess
    /// provided by the `hinit` heuristic.
    pub h0: Option<Float>,
    /// Maximum number of allowed steps.
    #[builder(default = 100_000)]
    pub nmax: usize,
    /// Number of accepted steps between stiffness tests.
    #[builder(default = 1000)]
    pub nstiff: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::builder().build()
    }
}

impl Settings {
    /// Check every knob before integration starts.
    pub fn validate(&self) -> Result<()> {
        for tol in [self.rtol, self.atol] {
            if !(tol > 0.0) {
                return Err(Error::InvalidTolerance(tol));
            }
        }
        if self.uround <= 1e-35 || self.uround >= 1.0 {
            return Err(Error::URoundOutOfRange(self.uround));
        }
        if self.safety_factor >= 1.0 || self.safety_factor <= 1e-4 {
            return Err(Error::SafetyFactorOutOfRange(self.safety_factor));
        }
        if self.beta > 0.2 {
            return Err(Error::BetaTooLarge(self.beta));
        }
        if self.nmax == 0 {
            return Err(Error::NMaxMustBePositive(self.nmax));
        }
        if self.nstiff == 0 {
            return Err(Error::NStiffMustBePositive(self.nstiff));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_knobs() {
        let s = Settings::builder().rtol(0.0).build();
        assert!(matches!(s.validate(), Err(Error::InvalidTolerance(_))));
        let s = Settings::builder().safety_factor(1.5).build();
        assert!(matches!(s.validate(), Err(Error::SafetyFactorOutOfRange(_))));
        let s = Settings::builder().beta(0.3).build();
        assert!(matches!(s.validate(), Err(Error::BetaTooLarge(_))));
        let s = Settings::builder().nmax(0).build();
        assert!(matches!(s.validate(), Err(Error::NMaxMustBePositive(0))));
    }
}
