//! Selection of the fixed-step scheme.

use std::{fmt, str::FromStr};

use crate::{
    Error, Float, Result,
    core::ode::ODE,
    methods::{euler, rk4},
};

/// Fixed-step explicit scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Forward Euler, first order
    Euler,
    /// Classical 4th-order Runge-Kutta
    RK4,
}

impl Method {
    /// Advance the scalar state `y` from `t` to `t + h`.
    pub fn step_scalar<F>(self, f: &F, t: Float, y: Float, h: Float) -> Result<Float>
    where
        F: Fn(Float, Float) -> Result<Float>,
    {
        match self {
            Method::Euler => euler::step(f, t, y, h),
            Method::RK4 => rk4::step(f, t, y, h),
        }
    }

    /// Advance the vector state `y` from `t` to `t + h`.
    pub fn step_vector<F>(self, f: &F, t: Float, y: &[Float], h: Float) -> Result<Vec<Float>>
    where
        F: ODE,
    {
        match self {
            Method::Euler => euler::step_vec(f, t, y, h),
            Method::RK4 => rk4::step_vec(f, t, y, h),
        }
    }

    /// Convergence order of the scheme.
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::RK4 => 4,
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "rk4" => Ok(Method::RK4),
            _ => Err(Error::UnrecognizedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Euler => f.write_str("euler"),
            Method::RK4 => f.write_str("rk4"),
        }
    }
}

/// Anything the integration entry points accept as a method selector.
///
/// Strings are parsed once, before any stepping, so an unknown name fails
/// with [`Error::UnrecognizedMethod`] without evaluating the derivative.
pub trait IntoMethod {
    fn into_method(self) -> Result<Method>;
}

impl IntoMethod for Method {
    fn into_method(self) -> Result<Method> {
        Ok(self)
    }
}

impl IntoMethod for &str {
    fn into_method(self) -> Result<Method> {
        self.parse()
    }
}

impl IntoMethod for String {
    fn into_method(self) -> Result<Method> {
        self.parse()
    }
}

impl IntoMethod for &String {
    fn into_method(self) -> Result<Method> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("euler".parse::<Method>().unwrap(), Method::Euler);
        assert_eq!("RK4".parse::<Method>().unwrap(), Method::RK4);
        assert_eq!(" Rk4 ".into_method().unwrap(), Method::RK4);
        assert_eq!(Method::RK4.to_string(), "rk4");
    }

    #[test]
    fn unknown_name() {
        match "bogus".into_method() {
            Err(Error::UnrecognizedMethod(name)) => assert_eq!(name, "bogus"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
