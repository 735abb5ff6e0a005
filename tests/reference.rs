use fixstep::prelude::*;

mod common;
use common::{Pendulum, SHO, init_logger};

#[test]
fn reference_oscillator_is_accurate() {
    init_logger();
    let g = Nth::new(2, |_t, y| Ok(-y[0]));
    let reference = reference_solution(g, &[1.0, 0.0], 0.0, 6.0, 0.1).unwrap();
    assert_eq!(reference.t, time_grid(0.0, 6.0, 0.1).unwrap());
    for (t, y) in reference.iter() {
        assert!((y - t.cos()).abs() < 1e-8, "t = {t}");
    }
}

#[test]
fn reference_at_returns_full_states() {
    let times = [0.0, 0.5, 1.0, 2.0];
    let traj = reference_at(SHO, &[1.0, 0.0], 0.0, &times, &Settings::default()).unwrap();
    assert_eq!(traj.t, times.to_vec());
    for (t, y) in traj.iter() {
        assert!((y[0] - t.cos()).abs() < 1e-8);
        assert!((y[1] + t.sin()).abs() < 1e-8);
    }
}

#[test]
fn reference_rejects_decreasing_times() {
    let err = reference_at(SHO, &[1.0, 0.0], 0.0, &[0.0, 1.0, 0.5], &Settings::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidQueryTimes));
}

#[test]
fn reference_checks_order_like_integrator() {
    let err = reference_solution(Pendulum::default(), &[1.3, 0.0, 0.0], 0.0, 1.0, 0.1).unwrap_err();
    assert!(matches!(err, Error::OrderMismatch { .. }));
}

#[test]
fn pendulum_errors_line_up_with_reference() {
    init_logger();
    let (t0, t_end, h) = (0.0, 10.0, 0.01);
    let y0 = [1.3, 0.0];
    let reference = reference_solution(Pendulum::default(), &y0, t0, t_end, h).unwrap();

    let mut figure = Figure::default();
    let mut worst = Vec::new();
    for method in [Method::Euler, Method::RK4] {
        let traj = integrate_order_n(Pendulum::default(), &y0, t0, t_end, h, method).unwrap();
        let errors = compute_errors(&traj.y, &reference.y).unwrap();
        assert_eq!(errors.len(), traj.len());
        worst.push(max_error(&errors).unwrap());
        figure.add_curve(Curve::from_trajectory(&traj, method.to_string())).unwrap();
    }
    figure.set_reference(reference.t.clone(), reference.y.clone());

    assert!(worst[1] < 1e-4, "rk4 max error = {}", worst[1]);
    assert!(worst[1] < worst[0]);
    assert_eq!(figure.curves().len(), 2);
}

#[test]
fn errors_are_symmetric() {
    let a = [1.0, -2.0, 3.5, 0.0];
    let b = [0.5, 2.0, 3.25, -1.0];
    assert_eq!(compute_errors(&a, &b).unwrap(), compute_errors(&b, &a).unwrap());
}

#[test]
fn errors_reject_length_mismatch() {
    let err = compute_errors(&[0.0; 5], &[0.0; 6]).unwrap_err();
    assert!(matches!(
        err,
        Error::LengthMismatch {
            computed: 5,
            reference: 6
        }
    ));
}

#[test]
fn figure_holds_at_most_six_curves() {
    let traj = integrate_scalar(|_t, y| Ok(-y), 1.0, 0.0, 1.0, 0.25, Method::Euler).unwrap();
    let curves: Vec<_> = (0..7)
        .map(|i| Curve::from_trajectory(&traj, format!("run {i}")))
        .collect();
    assert!(Figure::with_curves(curves[..6].to_vec(), None).is_ok());
    assert!(matches!(
        Figure::with_curves(curves, None),
        Err(Error::TooManyCurves(7))
    ));
}
