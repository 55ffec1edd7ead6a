use crate::{prelude::*, spherical::Spherical};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct State {
    pub pos: Vector3,
    pub vel: Spherical,
}

impl State {
    pub fn new(x0: Vector3, v0: Spherical) -> Self {
        Self { pos: x0, vel: v0 }
    }

    /// Projectile at the release point above the origin.
    pub fn released(v0: Spherical) -> Self {
        Self::new(Vector3::new(0.0, 0.0, RELEASE_HEIGHT), v0)
    }

    pub fn height(&self) -> FloatType {
        self.pos.z
    }

    pub fn speed(&self) -> FloatType {
        self.vel.magnitude
    }

    pub fn is_grounded(&self) -> bool {
        self.pos.z <= 0.0
    }

    /// Distance across the ground plane to `(x, y)`; height is ignored.
    pub fn ground_distance_to(&self, x: FloatType, y: FloatType) -> FloatType {
        (self.pos.x - x).hypot(self.pos.y - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_state() {
        let state = State::released(Spherical::new(30.0, 15.0, 40.0));
        assert_eq!(state.pos, Vector3::new(0.0, 0.0, 2.2));
        assert_eq!(state.speed(), 30.0);
        assert!(!state.is_grounded());
    }

    #[test]
    fn test_ground_contact_includes_zero_height() {
        let state = State::new(Vector3::new(4.0, 1.0, 0.0), Spherical::ZERO);
        assert!(state.is_grounded());
        assert!(almost_equal(state.ground_distance_to(1.0, 5.0), 5.0, 1e-12));
    }
}
