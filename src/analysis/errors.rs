//! Pointwise error between a computed and a reference value sequence.

use crate::{Error, Float, Result};

/// Absolute error `|computed[i] - reference[i]|` at every index.
///
/// Both sequences must come from the same time grid; nothing is resampled or
/// interpolated. Sequences of different lengths fail with
/// [`Error::LengthMismatch`] and no partial output.
///
/// ```
/// use fixstep::analysis::compute_errors;
///
/// let e = compute_errors(&[1.0, 0.5, 0.25], &[1.0, 0.6, 0.4]).unwrap();
/// assert_eq!(e.len(), 3);
/// assert!((e[2] - 0.15).abs() < 1e-15);
/// ```
pub fn compute_errors(computed: &[Float], reference: &[Float]) -> Result<Vec<Float>> {
    if computed.len() != reference.len() {
        return Err(Error::LengthMismatch {
            computed: computed.len(),
            reference: reference.len(),
        });
    }
    Ok(computed
        .iter()
        .zip(reference)
        .map(|(c, r)| (c - r).abs())
        .collect())
}

/// Largest entry of an error series; `None` when it is empty.
///
/// A NaN entry (a diverged run) makes the result NaN.
pub fn max_error(errors: &[Float]) -> Option<Float> {
    errors
        .iter()
        .copied()
        .reduce(|acc, e| if acc.is_nan() || e.is_nan() { Float::NAN } else { acc.max(e) })
}
