//! Fixed-step time grid shared by the integrators and the reference sampler.

use crate::{Error, Float, Result};

/// Build the time grid `t0, t0 + h, t0 + 2h, ...` used by the fixed-step
/// integrators.
///
/// Times are accumulated by repeated addition of `h`, and a new time is
/// generated while the last one is still strictly below `t_end`. The last
/// entry can therefore overshoot `t_end` by less than `h`. When
/// `t_end <= t0` the grid holds `t0` alone.
///
/// ```
/// use fixstep::core::grid::time_grid;
///
/// assert_eq!(time_grid(0.0, 1.0, 0.5).unwrap(), vec![0.0, 0.5, 1.0]);
/// assert_eq!(time_grid(0.0, 1.0, 0.4).unwrap().len(), 4); // ends at 1.2
/// ```
pub fn time_grid(t0: Float, t_end: Float, h: Float) -> Result<Vec<Float>> {
    validate(t0, t_end, h)?;

    let mut grid = Vec::with_capacity(expected_len(t0, t_end, h));
    let mut t = t0;
    grid.push(t);
    while t < t_end {
        let next = t + h;
        // h below the spacing of floats around t would never reach t_end
        if next <= t {
            return Err(Error::InvalidStepSize(h));
        }
        t = next;
        grid.push(t);
    }
    Ok(grid)
}

/// Check bounds and step before anything is evaluated.
pub(crate) fn validate(t0: Float, t_end: Float, h: Float) -> Result<()> {
    if !h.is_finite() || h <= 0.0 {
        return Err(Error::InvalidStepSize(h));
    }
    for bound in [t0, t_end] {
        if !bound.is_finite() {
            return Err(Error::NonFiniteBound(bound));
        }
    }
    Ok(())
}

/// Capacity hint, capped so a hopeless step does not allocate up front.
fn expected_len(t0: Float, t_end: Float, h: Float) -> usize {
    const MAX_HINT: usize = 1 << 20;
    if t_end <= t0 {
        1
    } else {
        (((t_end - t0) / h).ceil() as usize)
            .saturating_add(2)
            .min(MAX_HINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_has_floor_plus_one_points() {
        let grid = time_grid(0.0, 2.0, 0.25).unwrap();
        assert_eq!(grid.len(), 9);
        assert_eq!(grid[0], 0.0);
        assert_eq!(*grid.last().unwrap(), 2.0);
    }

    #[test]
    fn overshoot_is_less_than_one_step() {
        let grid = time_grid(1.0, 2.0, 0.3).unwrap();
        let last = *grid.last().unwrap();
        assert!(last >= 2.0);
        assert!(last - 2.0 < 0.3);
        assert!(grid[grid.len() - 2] < 2.0);
    }

    #[test]
    fn strictly_increasing() {
        let grid = time_grid(-1.0, 3.0, 0.01).unwrap();
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn empty_interval_keeps_initial_point() {
        assert_eq!(time_grid(1.0, 1.0, 0.1).unwrap(), vec![1.0]);
        assert_eq!(time_grid(1.0, 0.0, 0.1).unwrap(), vec![1.0]);
    }

    #[test]
    fn rejects_bad_step() {
        assert!(matches!(time_grid(0.0, 1.0, 0.0), Err(Error::InvalidStepSize(_))));
        assert!(matches!(time_grid(0.0, 1.0, -0.1), Err(Error::InvalidStepSize(_))));
        assert!(matches!(time_grid(0.0, 1.0, Float::NAN), Err(Error::InvalidStepSize(_))));
        assert!(matches!(time_grid(1e20, 2e20, 1e-10), Err(Error::InvalidStepSize(_))));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            time_grid(0.0, Float::INFINITY, 0.1),
            Err(Error::NonFiniteBound(_))
        ));
    }
}
