//! Trajectories produced by one integration run.

use crate::Float;

/// Sampled scalar trajectory: the time grid and the value of `y` at each time.
///
/// `t` and `y` always have the same length; `y[i]` is the value at `t[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub t: Vec<Float>,
    pub y: Vec<Float>,
}

impl Trajectory {
    pub(crate) fn new(t: Vec<Float>, y: Vec<Float>) -> Self {
        debug_assert_eq!(t.len(), y.len());
        Self { t, y }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Final sample `(t, y)`.
    pub fn last(&self) -> Option<(Float, Float)> {
        Some((*self.t.last()?, *self.y.last()?))
    }

    /// Iterate over stored sample pairs `(t_i, y_i)`.
    pub fn iter(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.t.iter().copied().zip(self.y.iter().copied())
    }
}

/// Sampled vector trajectory: the time grid and the full state at each time.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorTrajectory {
    pub t: Vec<Float>,
    pub y: Vec<Vec<Float>>,
}

impl VectorTrajectory {
    pub(crate) fn new(t: Vec<Float>, y: Vec<Vec<Float>>) -> Self {
        debug_assert_eq!(t.len(), y.len());
        Self { t, y }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Dimension of the state, or `None` for an empty trajectory.
    pub fn dim(&self) -> Option<usize> {
        self.y.first().map(Vec::len)
    }

    /// Project every state onto its component `i`.
    ///
    /// Returns `None` when `i` is out of range for the state dimension.
    pub fn component(&self, i: usize) -> Option<Trajectory> {
        let y = self
            .y
            .iter()
            .map(|state| state.get(i).copied())
            .collect::<Option<Vec<_>>>()?;
        Some(Trajectory::new(self.t.clone(), y))
    }

    /// Project onto the zeroth derivative `y`, dropping the higher derivatives.
    pub fn into_first_component(self) -> Trajectory {
        let y = self
            .y
            .into_iter()
            .map(|state| state.first().copied().unwrap_or(Float::NAN))
            .collect();
        Trajectory::new(self.t, y)
    }

    /// Iterate over stored sample pairs `(t_i, Y_i)`.
    pub fn iter(&self) -> impl Iterator<Item = (Float, &[Float])> + '_ {
        self.t.iter().copied().zip(self.y.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VectorTrajectory {
        VectorTrajectory::new(
            vec![0.0, 0.5, 1.0],
            vec![vec![1.0, 0.0], vec![0.9, -0.4], vec![0.6, -0.8]],
        )
    }

    #[test]
    fn first_component_keeps_grid() {
        let traj = sample().into_first_component();
        assert_eq!(traj.t, vec![0.0, 0.5, 1.0]);
        assert_eq!(traj.y, vec![1.0, 0.9, 0.6]);
        assert_eq!(traj.last(), Some((1.0, 0.6)));
    }

    #[test]
    fn component_out_of_range() {
        let traj = sample();
        assert_eq!(traj.dim(), Some(2));
        assert_eq!(traj.component(1).unwrap().y, vec![0.0, -0.4, -0.8]);
        assert!(traj.component(2).is_none());
    }

    #[test]
    fn iter_pairs() {
        let traj = sample();
        let pairs: Vec<_> = traj.iter().map(|(t, y)| (t, y[1])).collect();
        assert_eq!(pairs, vec![(0.0, 0.0), (0.5, -0.4), (1.0, -0.8)]);
    }
}
