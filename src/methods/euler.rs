//! Forward (explicit) Euler step.

use crate::{Float, Result, core::ode::ODE};

use super::check_dim;

/// One forward Euler step for a scalar problem: `y + h f(t, y)`.
pub fn step<F>(f: &F, t: Float, y: Float, h: Float) -> Result<Float>
where
    F: Fn(Float, Float) -> Result<Float>,
{
    Ok(y + f(t, y)? * h)
}

/// One forward Euler step for a vector problem, component-wise.
pub fn step_vec<F>(f: &F, t: Float, y: &[Float], h: Float) -> Result<Vec<Float>>
where
    F: ODE,
{
    let dydt = f.ode(t, y)?;
    check_dim(y.len(), &dydt)?;

    Ok(y.iter().zip(&dydt).map(|(yi, di)| yi + di * h).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn scalar_decay_multiplies_by_one_minus_h() {
        let y1 = step(&|_t, y| Ok(-y), 0.0, 1.0, 0.5).unwrap();
        assert_eq!(y1, 0.5);
    }

    #[test]
    fn vector_matches_scalar_per_component() {
        let f = |_t: Float, y: &[Float]| -> Result<Vec<Float>> { Ok(vec![y[1], -y[0]]) };
        let y1 = step_vec(&f, 0.0, &[1.0, 2.0], 0.1).unwrap();
        assert_eq!(y1, vec![1.0 + 0.2, 2.0 - 0.1]);
    }

    #[test]
    fn short_derivative_is_rejected() {
        let f = |_t: Float, _y: &[Float]| -> Result<Vec<Float>> { Ok(vec![0.0]) };
        assert!(matches!(
            step_vec(&f, 0.0, &[1.0, 2.0], 0.1),
            Err(Error::DimensionMismatch { expected: 2, got: 1 })
        ));
    }
}
