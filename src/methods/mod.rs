// Numerical methods

mod hinit;

pub mod companion;
pub mod dp;
pub mod euler;
pub mod method;
pub mod rk4;
pub mod settings;

pub use companion::Companion;
pub use method::{IntoMethod, Method};

use crate::{Error, Float, Result};

/// A derivative must have as many components as the state it was evaluated at.
fn check_dim(expected: usize, dydt: &[Float]) -> Result<()> {
    if dydt.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            got: dydt.len(),
        });
    }
    Ok(())
}
