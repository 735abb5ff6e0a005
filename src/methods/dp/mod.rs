//! Dormand-Prince Runge Kutta method used to build reference trajectories

mod dopri5;

pub use dopri5::{Stats, contdp5, dopri5};
