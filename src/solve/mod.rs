//! High-level entry points: fixed-step integration and reference trajectories.

pub mod integrate;
pub mod reference;

pub use integrate::{
    integrate_order_2, integrate_order_n, integrate_order_n_states, integrate_scalar,
    integrate_vector,
};
pub use reference::{reference_at, reference_scalar, reference_solution, reference_solution_with};
