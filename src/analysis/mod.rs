//! Discretization error against a reference and observed convergence order.

mod convergence;
mod errors;

pub use convergence::{ConvergenceStudy, observed_order};
pub use errors::{compute_errors, max_error};
