//! # Example: Exponential Decay
//!
//! Integrate `dy/dt = -y`, `y(0) = 1` with forward Euler and RK4 at a few
//! power-of-two step sizes (so every grid ends exactly at `t = 2`) and print
//! the endpoint error and observed order of each.

use fixstep::prelude::*;

fn main() -> Result<()> {
    let f = |_t: Float, y: Float| -> Result<Float> { Ok(-y) };
    let (t0, t_end) = (0.0, 2.0);
    let steps = [0.25, 0.125, 0.0625, 0.03125];

    for method in [Method::Euler, Method::RK4] {
        let mut study = ConvergenceStudy::new();
        for h in steps {
            let traj = integrate_scalar(f, 1.0, t0, t_end, h, method)?;
            let reference = reference_scalar(f, 1.0, t0, t_end, h)?;
            let errors = compute_errors(&traj.y, &reference.y)?;
            let err = errors.last().copied().unwrap_or(0.0);
            println!("{method:>5}  h = {h:<6}  samples = {:>4}  error = {err:.3e}", traj.len());
            study.push(h, err);
        }
        println!("{method:>5}  observed orders = {:?}", study.observed_orders()?);
        println!();
    }
    Ok(())
}
