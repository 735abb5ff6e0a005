use fixstep::prelude::*;

mod common;
use common::{init_logger, linear, linear_exact};

const K: Float = -1.0;

/// Endpoint error of `y' = K y` on `[0, 1]` for each step. The steps are
/// powers of two so the grid lands exactly on `t = 1`.
fn endpoint_errors(method: Method, steps: &[Float]) -> ConvergenceStudy {
    steps
        .iter()
        .map(|&h| {
            let traj = integrate_scalar(linear(K), 1.0, 0.0, 1.0, h, method).unwrap();
            let (t, y) = traj.last().unwrap();
            assert_eq!(t, 1.0);
            (h, (y - linear_exact(K, 1.0, 0.0, t)).abs())
        })
        .collect()
}

#[test]
fn euler_is_first_order() {
    init_logger();
    let study = endpoint_errors(Method::Euler, &[1.0 / 32.0, 1.0 / 64.0, 1.0 / 128.0]);
    for ratio in study.ratios().unwrap() {
        assert!((ratio - 2.0).abs() < 0.1, "ratio = {ratio}");
    }
    assert!((study.mean_order().unwrap() - 1.0).abs() < 0.05);
}

#[test]
fn rk4_is_fourth_order() {
    init_logger();
    let study = endpoint_errors(Method::RK4, &[1.0 / 8.0, 1.0 / 16.0, 1.0 / 32.0]);
    for ratio in study.ratios().unwrap() {
        assert!((ratio - 16.0).abs() < 2.0, "ratio = {ratio}");
    }
    assert!((study.mean_order().unwrap() - 4.0).abs() < 0.2);
}

#[test]
fn rk4_beats_euler_against_reference() {
    init_logger();
    let (t0, t_end, h) = (0.0, 5.0, 0.05);
    let reference = reference_scalar(linear(K), 1.0, t0, t_end, h).unwrap();

    let mut worst = Vec::new();
    for method in [Method::Euler, Method::RK4] {
        let traj = integrate_scalar(linear(K), 1.0, t0, t_end, h, method).unwrap();
        assert_eq!(traj.t, reference.t);
        let errors = compute_errors(&traj.y, &reference.y).unwrap();
        worst.push(max_error(&errors).unwrap());
    }
    assert!(worst[1] < worst[0] * 1e-3);
}
