//! # Example: Damped Pendulum
//!
//! Second-order problem
//!
//! theta'' = -2 zeta omega theta' - omega^2 sin(theta)
//!
//! with zeta = 0.22, omega = 4, theta(0) = 1.3, theta'(0) = 0. Both fixed-step
//! schemes are compared against the adaptive reference on the same grid.
//! With the `plot` feature the curves are written to `damped_pendulum.svg`.

use fixstep::prelude::*;

struct Pendulum {
    zeta: Float,
    omega: Float,
}

impl NthOrderODE for Pendulum {
    fn order(&self) -> usize {
        2
    }

    fn g(&self, _t: Float, y: &[Float]) -> Result<Float> {
        Ok(-2.0 * self.zeta * self.omega * y[1] - self.omega.powi(2) * y[0].sin())
    }
}

fn main() -> Result<()> {
    let model = || Pendulum {
        zeta: 0.22,
        omega: 4.0,
    };
    let y0 = [1.3, 0.0];
    let (t0, t_end, h) = (0.0, 10.0, 0.05);

    let reference = reference_solution(model(), &y0, t0, t_end, h)?;

    let mut figure = Figure::new(
        PlotOptions::builder()
            .title("Damped pendulum")
            .y_label("theta")
            .build(),
    );
    for method in [Method::Euler, Method::RK4] {
        let traj = integrate_order_n(model(), &y0, t0, t_end, h, method)?;
        let errors = compute_errors(&traj.y, &reference.y)?;
        println!(
            "{method:>5}: {} samples, max error = {:.3e}",
            traj.len(),
            max_error(&errors).unwrap_or(0.0)
        );
        figure.add_curve(Curve::from_trajectory(&traj, method.to_string()))?;
    }
    figure.set_reference(reference.t, reference.y);

    #[cfg(feature = "plot")]
    {
        figure.render_svg("damped_pendulum.svg")?;
        println!("wrote damped_pendulum.svg");
    }
    #[cfg(not(feature = "plot"))]
    println!("{} curves ready; enable the `plot` feature to render them", figure.curves().len());

    Ok(())
}
