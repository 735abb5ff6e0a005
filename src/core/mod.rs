//! Core traits and types used throughout the library.

pub mod grid;
pub mod interpolate;
pub mod ode;
pub mod status;
pub mod trajectory;
