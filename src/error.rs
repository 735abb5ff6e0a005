//! Errors for integration, reference generation, and error analysis

use thiserror::Error;

use crate::{Float, core::status::Status};

/// Boxed error raised by user derivative code.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by every fallible entry point of the crate.
///
/// Configuration errors (`UnrecognizedMethod`, `OrderMismatch`, `ZeroOrder`,
/// `InvalidStepSize`, `NonFiniteBound`) are raised before the first
/// derivative evaluation. `DimensionMismatch` and `Evaluation` abort an
/// integration that is already running.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unrecognized method {0:?}; recognized methods are \"euler\" and \"rk4\"")]
    UnrecognizedMethod(String),
    #[error("derivative function has order {order} but {initial} initial conditions were given")]
    OrderMismatch { order: usize, initial: usize },
    #[error("problem order must be at least 1")]
    ZeroOrder,
    #[error("step size h must be finite and positive (got {0})")]
    InvalidStepSize(Float),
    #[error("integration bound must be finite (got {0})")]
    NonFiniteBound(Float),

    #[error("derivative has {got} components but the state has {expected}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("computed and reference sequences differ in length ({computed} vs {reference})")]
    LengthMismatch { computed: usize, reference: usize },
    #[error("derivative evaluation failed: {0}")]
    Evaluation(#[source] BoxError),

    #[error("reference integrator stopped early: {0:?}")]
    ReferenceFailed(Status),
    #[error("query times must be non-empty and non-decreasing")]
    InvalidQueryTimes,
    #[error("tolerance must be positive (got {0})")]
    InvalidTolerance(Float),
    #[error("nmax must be positive (got {0})")]
    NMaxMustBePositive(usize),
    #[error("nstiff must be positive (got {0})")]
    NStiffMustBePositive(usize),
    #[error("uround must be in (1e-35, 1.0) (got {0})")]
    URoundOutOfRange(Float),
    #[error("safety_factor must be in (1e-4, 1.0) (got {0})")]
    SafetyFactorOutOfRange(Float),
    #[error("beta must be <= 0.2 (got {0})")]
    BetaTooLarge(Float),

    #[error("convergence study needs at least two refinements (got {0})")]
    NotEnoughSamples(usize),
    #[error("observed order is undefined for a non-positive error or step ({0})")]
    NonPositiveError(Float),
    #[error("observed order needs two different step sizes (both are {0})")]
    EqualSteps(Float),

    #[error("cannot draw more than 6 curves on one figure (got {0})")]
    TooManyCurves(usize),
    #[error("plotting backend failed: {0}")]
    Plot(String),
}

impl Error {
    /// Wrap an arbitrary failure raised inside a derivative function.
    pub fn evaluation<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Evaluation(err.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
