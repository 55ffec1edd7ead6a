use crate::{prelude::*, spherical::Spherical, state::State};

pub type OdeSolver = ForwardEuler;

/// Explicit Euler integrator over a spherical-velocity state.
///
/// Each step first applies the velocity change, then moves the position with the
/// updated velocity, so displacement uses the end-of-step velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct ForwardEuler {
    y: State,
    dt: FloatType,
    t: FloatType,
}

impl ForwardEuler {
    pub fn new(y0: State, dt: FloatType) -> Self {
        ForwardEuler { y: y0, dt, t: 0.0 }
    }

    pub fn state(&self) -> &State {
        &self.y
    }

    pub fn time(&self) -> FloatType {
        self.t
    }

    pub fn dt(&self) -> FloatType {
        self.dt
    }

    /// Advances by one `dt`. `delta_v` receives the current state and the step length
    /// and returns the velocity change for this step.
    pub fn step<F>(&mut self, delta_v: F) -> (&State, FloatType)
    where
        F: FnOnce(&State, FloatType) -> Spherical,
    {
        let dv = delta_v(&self.y, self.dt);

        self.y.vel = self.y.vel + dv;
        self.y.pos += self.y.vel.to_components() * self.dt;
        self.t += self.dt;

        (&self.y, self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: FloatType = 1e-9;

    #[test]
    fn test_constant_velocity() {
        let y0 = State::new(Vector3::zeros(), Spherical::level(2.0, 90.0));
        let mut solver = OdeSolver::new(y0, 0.5);

        for _ in 0..4 {
            solver.step(|_, _| Spherical::ZERO);
        }

        assert!(almost_equal(solver.time(), 2.0, EPSILON));
        assert!((solver.state().pos - Vector3::new(0.0, 4.0, 0.0)).norm() < EPSILON);
    }

    #[test]
    fn test_position_uses_updated_velocity() {
        let y0 = State::new(Vector3::zeros(), Spherical::ZERO);
        let mut solver = OdeSolver::new(y0, 0.1);

        let (state, t) = solver.step(|_, dt| Spherical::new(10.0 * dt, 0.0, 0.0));

        // Velocity becomes 1 m/s before the 0.1 s displacement is taken.
        assert!(almost_equal(state.vel.magnitude, 1.0, EPSILON));
        assert!(almost_equal(state.pos.x, 0.1, EPSILON));
        assert!(almost_equal(t, 0.1, EPSILON));
    }

    #[test]
    fn test_vacuum_fall_matches_euler_series() {
        let dt = 0.01;
        let y0 = State::new(Vector3::new(0.0, 0.0, 100.0), Spherical::ZERO);
        let mut solver = OdeSolver::new(y0, dt);

        let n = 100;
        for _ in 0..n {
            solver.step(|_, dt| Spherical::new(GRAVITY_ACCEL * dt, 0.0, STRAIGHT_DOWN));
        }

        // z_n = z_0 - g dt^2 n (n + 1) / 2 for end-of-step velocity
        let n = n as FloatType;
        let expected = 100.0 - GRAVITY_ACCEL * dt * dt * n * (n + 1.0) / 2.0;
        assert!(almost_equal(solver.state().pos.z, expected, 1e-6));
        assert!(almost_equal(solver.state().speed(), GRAVITY_ACCEL, 1e-6));
    }
}
