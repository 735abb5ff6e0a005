//! Fixed-step explicit integration (forward Euler and classical RK4) of
//! ordinary differential equations of any order, with tools to measure the
//! discretization error against an accurate reference trajectory.
//!
//! An n-th order scalar problem `y^(n) = g(t, y, y', ..., y^(n-1))` is lifted
//! into companion form and driven by the vector schemes; order-1 scalar
//! problems use the scalar schemes directly.
//!
//! ```
//! use fixstep::prelude::*;
//!
//! // y' = -y, y(0) = 1
//! let traj = integrate_scalar(|_t, y| Ok(-y), 1.0, 0.0, 1.0, 0.5, Method::Euler).unwrap();
//! assert_eq!(traj.t, vec![0.0, 0.5, 1.0]);
//! assert_eq!(traj.y, vec![1.0, 0.5, 0.25]);
//! ```

mod error;

pub mod analysis;
pub mod core;
pub mod methods;
pub mod plot;
pub mod prelude;
pub mod solve;

#[cfg(feature = "python")]
mod python;

pub use error::{BoxError, Error, Result};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f128, f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
