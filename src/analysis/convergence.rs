//! Observed order of convergence from errors at successive step sizes.

use crate::{Error, Float, Result};

/// Observed order between two refinements: `ln(e1 / e2) / ln(h1 / h2)`.
///
/// Halving `h` divides the error of a method of order `p` by about `2^p`,
/// which gives back `p`. The two steps must differ.
pub fn observed_order(h1: Float, e1: Float, h2: Float, e2: Float) -> Result<Float> {
    for v in [h1, e1, h2, e2] {
        if !(v > 0.0) {
            return Err(Error::NonPositiveError(v));
        }
    }
    if h1 == h2 {
        return Err(Error::EqualSteps(h1));
    }
    Ok((e1 / e2).ln() / (h1 / h2).ln())
}

/// Error of one method at several step sizes.
///
/// ```
/// use fixstep::analysis::ConvergenceStudy;
///
/// let mut study = ConvergenceStudy::new();
/// study.push(0.1, 4.0e-3);
/// study.push(0.05, 1.0e-3);
/// study.push(0.025, 2.5e-4);
/// let p = study.mean_order().unwrap();
/// assert!((p - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceStudy {
    samples: Vec<(Float, Float)>,
}

impl ConvergenceStudy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the error measured with step `h`.
    pub fn push(&mut self, h: Float, error: Float) {
        self.samples.push((h, error));
    }

    /// Recorded `(h, error)` pairs in insertion order.
    pub fn samples(&self) -> &[(Float, Float)] {
        &self.samples
    }

    /// Ratio `e_i / e_{i+1}` between consecutive refinements.
    pub fn ratios(&self) -> Result<Vec<Float>> {
        self.check_len()?;
        self.samples
            .windows(2)
            .map(|w| {
                if !(w[1].1 > 0.0) {
                    return Err(Error::NonPositiveError(w[1].1));
                }
                Ok(w[0].1 / w[1].1)
            })
            .collect()
    }

    /// Observed order between consecutive refinements.
    pub fn observed_orders(&self) -> Result<Vec<Float>> {
        self.check_len()?;
        self.samples
            .windows(2)
            .map(|w| observed_order(w[0].0, w[0].1, w[1].0, w[1].1))
            .collect()
    }

    /// Mean of [`observed_orders`](Self::observed_orders).
    pub fn mean_order(&self) -> Result<Float> {
        let orders = self.observed_orders()?;
        Ok(orders.iter().sum::<Float>() / orders.len() as Float)
    }

    fn check_len(&self) -> Result<()> {
        if self.samples.len() < 2 {
            return Err(Error::NotEnoughSamples(self.samples.len()));
        }
        Ok(())
    }
}

impl FromIterator<(Float, Float)> for ConvergenceStudy {
    fn from_iter<I: IntoIterator<Item = (Float, Float)>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fourth_order_ratio() {
        let p = observed_order(0.2, 16.0e-6, 0.1, 1.0e-6).unwrap();
        assert_relative_eq!(p, 4.0, max_relative = 1e-12);
    }

    #[test]
    fn needs_two_samples() {
        let study: ConvergenceStudy = [(0.1, 1e-3)].into_iter().collect();
        assert!(matches!(study.observed_orders(), Err(Error::NotEnoughSamples(1))));
    }

    #[test]
    fn repeated_step_has_no_order() {
        assert!(matches!(
            observed_order(0.1, 1e-3, 0.1, 5e-4),
            Err(Error::EqualSteps(h)) if h == 0.1
        ));
        let study: ConvergenceStudy = [(0.1, 1e-3), (0.1, 5e-4)].into_iter().collect();
        assert!(matches!(study.observed_orders(), Err(Error::EqualSteps(_))));
    }

    #[test]
    fn zero_error_has_no_order() {
        assert!(matches!(
            observed_order(0.1, 1e-3, 0.05, 0.0),
            Err(Error::NonPositiveError(_))
        ));
        let study: ConvergenceStudy = [(0.1, 1e-3), (0.05, 0.0)].into_iter().collect();
        assert!(study.ratios().is_err());
    }
}
