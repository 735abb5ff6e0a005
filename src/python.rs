//! Python bindings: the integration entry points called with Python callables.
//!
//! Derivatives are plain Python functions `g(t, y, yp, ...)` taking one
//! positional argument per state component after `t`. Their arity, read
//! from `inspect.signature`, is checked against the number of initial
//! conditions before anything is evaluated, and an exception raised inside
//! them is re-raised unchanged.

use numpy::PyArray1;
use pyo3::{
    exceptions::{PyRuntimeError, PyValueError},
    prelude::*,
    types::PyTuple,
};

use crate::{
    Error, Float, Result,
    analysis,
    core::{ode::NthOrderODE, trajectory::Trajectory},
    solve,
};

type PyTrajectory<'py> = (Bound<'py, PyArray1<Float>>, Bound<'py, PyArray1<Float>>);

/// Python callable seen as an n-th order problem.
struct PythonNth<'py> {
    fun: Bound<'py, PyAny>,
    order: usize,
}

impl<'py> PythonNth<'py> {
    /// Wrap `fun`, checking that it accepts `t` plus `order` positional
    /// arguments. Callables whose signature Python cannot report (some
    /// builtins) or that take `*args` are accepted as they are.
    fn new(fun: Bound<'py, PyAny>, order: usize) -> PyResult<Self> {
        if let Some((required, total)) = positional_arity(&fun)? {
            let given = order + 1;
            if given < required || total.is_some_and(|total| given > total) {
                let declared = if given < required { required } else { total.unwrap_or(required) };
                return Err(to_pyerr(Error::OrderMismatch {
                    order: declared.saturating_sub(1),
                    initial: order,
                }));
            }
        }
        Ok(Self { fun, order })
    }
}

impl NthOrderODE for PythonNth<'_> {
    fn order(&self) -> usize {
        self.order
    }

    fn g(&self, t: Float, y: &[Float]) -> Result<Float> {
        call(&self.fun, t, y)
    }
}

/// Positional parameters of `fun` from `inspect.signature`: how many are
/// required and how many are accepted (`None` when it takes `*args`).
/// Returns `None` when no signature is available.
fn positional_arity(fun: &Bound<'_, PyAny>) -> PyResult<Option<(usize, Option<usize>)>> {
    let inspect = fun.py().import("inspect")?;
    let Ok(signature) = inspect.call_method1("signature", (fun,)) else {
        return Ok(None);
    };
    let parameter = inspect.getattr("Parameter")?;
    let positional_only = parameter.getattr("POSITIONAL_ONLY")?;
    let positional_or_keyword = parameter.getattr("POSITIONAL_OR_KEYWORD")?;
    let var_positional = parameter.getattr("VAR_POSITIONAL")?;
    let empty = parameter.getattr("empty")?;

    let mut required = 0;
    let mut total = Some(0);
    for param in signature.getattr("parameters")?.call_method0("values")?.try_iter()? {
        let param = param?;
        let kind = param.getattr("kind")?;
        if kind.eq(&var_positional)? {
            total = None;
        } else if kind.eq(&positional_only)? || kind.eq(&positional_or_keyword)? {
            total = total.map(|n| n + 1);
            if param.getattr("default")?.is(&empty) {
                required += 1;
            }
        }
    }
    Ok(Some((required, total)))
}

fn call(fun: &Bound<'_, PyAny>, t: Float, y: &[Float]) -> Result<Float> {
    let mut args = Vec::with_capacity(y.len() + 1);
    args.push(t);
    args.extend_from_slice(y);
    let args = PyTuple::new(fun.py(), args).map_err(Error::evaluation)?;
    fun.call1(args)
        .and_then(|value| value.extract::<Float>())
        .map_err(Error::evaluation)
}

/// Hand Python exceptions back untouched; everything else becomes a ValueError.
fn to_pyerr(err: Error) -> PyErr {
    match err {
        Error::Evaluation(source) => match source.downcast::<PyErr>() {
            Ok(pyerr) => *pyerr,
            Err(other) => PyRuntimeError::new_err(other.to_string()),
        },
        other => PyValueError::new_err(other.to_string()),
    }
}

fn to_numpy(py: Python<'_>, traj: Trajectory) -> PyTrajectory<'_> {
    (PyArray1::from_vec(py, traj.t), PyArray1::from_vec(py, traj.y))
}

#[pyfunction]
#[pyo3(name = "integrate_scalar", signature = (f, y0, t0, t_end, h, method = "rk4"))]
fn py_integrate_scalar<'py>(
    py: Python<'py>,
    f: Bound<'py, PyAny>,
    y0: Float,
    t0: Float,
    t_end: Float,
    h: Float,
    method: &str,
) -> PyResult<PyTrajectory<'py>> {
    let g = PythonNth::new(f, 1)?;
    let traj = solve::integrate_scalar(|t, y| g.g(t, &[y]), y0, t0, t_end, h, method)
        .map_err(to_pyerr)?;
    Ok(to_numpy(py, traj))
}

#[pyfunction]
#[pyo3(name = "integrate_order_n", signature = (g, y0, t0, t_end, h, method = "rk4"))]
fn py_integrate_order_n<'py>(
    py: Python<'py>,
    g: Bound<'py, PyAny>,
    y0: Vec<Float>,
    t0: Float,
    t_end: Float,
    h: Float,
    method: &str,
) -> PyResult<PyTrajectory<'py>> {
    let g = PythonNth::new(g, y0.len())?;
    let traj = solve::integrate_order_n(g, &y0, t0, t_end, h, method).map_err(to_pyerr)?;
    Ok(to_numpy(py, traj))
}

#[pyfunction]
#[pyo3(name = "reference_solution")]
fn py_reference_solution<'py>(
    py: Python<'py>,
    g: Bound<'py, PyAny>,
    y0: Vec<Float>,
    t0: Float,
    t_end: Float,
    h: Float,
) -> PyResult<PyTrajectory<'py>> {
    let g = PythonNth::new(g, y0.len())?;
    let traj = solve::reference_solution(g, &y0, t0, t_end, h).map_err(to_pyerr)?;
    Ok(to_numpy(py, traj))
}

#[pyfunction]
#[pyo3(name = "compute_errors")]
fn py_compute_errors<'py>(
    py: Python<'py>,
    computed: Vec<Float>,
    reference: Vec<Float>,
) -> PyResult<Bound<'py, PyArray1<Float>>> {
    let errors = analysis::compute_errors(&computed, &reference).map_err(to_pyerr)?;
    Ok(PyArray1::from_vec(py, errors))
}

#[pymodule]
fn fixstep(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_integrate_scalar, m)?)?;
    m.add_function(wrap_pyfunction!(py_integrate_order_n, m)?)?;
    m.add_function(wrap_pyfunction!(py_reference_solution, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_errors, m)?)?;
    Ok(())
}
