use fixstep::prelude::*;
use fixstep::methods::Companion;

mod common;
use common::{Pendulum, init_logger};

#[test]
fn every_state_has_problem_order() {
    init_logger();
    // y''' = (cos(t y'') - atan(y')) / 4
    let g = Nth::new(3, |t, y| Ok(0.25 * ((t * y[2]).cos() - y[1].atan())));
    for method in [Method::Euler, Method::RK4] {
        let traj = integrate_order_n_states(g.clone(), &[0.0, 1.0, -0.5], 0.0, 2.0, 0.05, method).unwrap();
        assert_eq!(traj.t.len(), traj.y.len());
        assert!(traj.y.iter().all(|state| state.len() == 3));
    }
}

#[test]
fn companion_of_second_order_problem() {
    let g = |t: Float, y: Float, yp: Float| -> Result<Float> { Ok(t * y - yp.powi(2)) };
    let f = Companion::new(SecondOrder(g), &[0.0, 0.0]).unwrap();
    for (t, y, yp) in [(0.0, 1.0, 0.0), (1.5, -2.0, 3.0), (-4.0, 0.25, -0.75)] {
        let dydt = f.ode(t, &[y, yp]).unwrap();
        assert_eq!(dydt, vec![yp, g(t, y, yp).unwrap()]);
    }
}

#[test]
fn order_must_match_initial_conditions() {
    let err = integrate_order_n(Pendulum::default(), &[1.3], 0.0, 1.0, 0.1, Method::RK4).unwrap_err();
    assert!(matches!(
        err,
        Error::OrderMismatch {
            order: 2,
            initial: 1
        }
    ));

    let err = integrate_order_n(Nth::new(0, |_t, _y| Ok(0.0)), &[], 0.0, 1.0, 0.1, "euler").unwrap_err();
    assert!(matches!(err, Error::ZeroOrder));
}

#[test]
fn order_one_matches_scalar_driver() {
    let g = Nth::new(1, |t, y| Ok(t - y[0]));
    let a = integrate_order_n(g, &[2.0], 0.0, 1.0, 0.125, Method::RK4).unwrap();
    let b = integrate_scalar(|t, y| Ok(t - y), 2.0, 0.0, 1.0, 0.125, Method::RK4).unwrap();
    assert_eq!(a, b);
}

#[test]
fn second_order_time_dependent_forcing() {
    // y'' = t with y(0) = y'(0) = 0; Euler on the companion system
    let traj = integrate_order_2(|t, _y, _yp| Ok(t), 0.0, 0.0, 0.0, 1.0, 0.5, Method::Euler).unwrap();
    // y'[1] = 0.25, y[1] = 0; y'[2] = 0.75, y[2] = 0.125
    assert_eq!(traj.y, vec![0.0, 0.0, 0.125]);
}

#[test]
fn second_order_entry_point_tracks_cosine() {
    let traj = integrate_order_2(|_t, y, _yp| Ok(-y), 1.0, 0.0, 0.0, 3.0, 1e-3, Method::RK4).unwrap();
    for (t, y) in traj.iter() {
        assert!((y - t.cos()).abs() < 1e-9);
    }
}

#[test]
fn damped_pendulum_settles() {
    init_logger();
    let traj = integrate_order_n(Pendulum::default(), &[1.3, 0.0], 0.0, 10.0, 0.01, Method::RK4).unwrap();
    let (_, last) = traj.last().unwrap();
    assert_eq!(traj.y[0], 1.3);
    assert!(last.abs() < 0.05);
}
