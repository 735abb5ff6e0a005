//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use fixstep::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `NthOrderODE`, `Nth`, `SecondOrder`, `Trajectory`, `VectorTrajectory`.
//! - Methods: `Method`, `IntoMethod`, `Settings` for the reference integrator.
//! - Entry points: `integrate_*`, `reference_*`, `compute_errors`, `ConvergenceStudy`.
//!

pub use crate::{
    Error, Float, Result,
    analysis::{ConvergenceStudy, compute_errors, max_error, observed_order},
    core::{
        grid::time_grid,
        ode::{NthOrderODE, Nth, ODE, SecondOrder},
        trajectory::{Trajectory, VectorTrajectory},
    },
    methods::{IntoMethod, Method, settings::Settings},
    plot::{Curve, Figure, PlotOptions},
    solve::{
        integrate_order_2, integrate_order_n, integrate_order_n_states, integrate_scalar,
        integrate_vector, reference_at, reference_scalar, reference_solution,
        reference_solution_with,
    },
};
