//! Status codes for the adaptive reference integrator

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    NeedLargerNMax,
    StepSizeTooSmall,
    ProbablyStiff,
}
