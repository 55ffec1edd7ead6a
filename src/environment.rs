use crate::{prelude::*, spherical::Spherical};

/// Steady horizontal wind. Vertical wind is not modelled: the air mass always moves
/// level with the ground.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wind {
    pub speed: FloatType,
    pub bearing: FloatType,
}

impl Wind {
    pub const CALM: Wind = Wind {
        speed: 0.0,
        bearing: 0.0,
    };

    pub fn new(speed: FloatType, bearing: FloatType) -> Self {
        Self { speed, bearing }
    }

    pub fn as_spherical(&self) -> Spherical {
        Spherical::level(self.speed, self.bearing)
    }
}

/// Quadratic drag model of a spherical projectile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: FloatType,
    pub mass: FloatType,
}

impl Default for Aerodynamics {
    fn default() -> Self {
        Self {
            drag_coefficient: DRAG_COEFFICIENT,
            mass: MASS,
        }
    }
}

impl Aerodynamics {
    /// No air resistance at all; only gravity acts.
    pub const VACUUM: Aerodynamics = Aerodynamics {
        drag_coefficient: 0.0,
        mass: MASS,
    };

    /// Drag deceleration for a given airspeed: `k * v^2 / m`.
    pub fn drag_acceleration(&self, airspeed: FloatType) -> FloatType {
        self.drag_coefficient * airspeed * airspeed / self.mass
    }

    /// Airspeed at which drag balances gravity in a vertical fall.
    pub fn terminal_speed(&self) -> FloatType {
        (GRAVITY_ACCEL * self.mass / self.drag_coefficient).sqrt()
    }
}

/// Velocity change over one step of length `dt`: drag along the headwind plus gravity.
///
/// The headwind is the air's velocity as seen from the projectile, that is the
/// projectile's velocity reversed and composed with the wind.
pub fn velocity_change(
    velocity: Spherical,
    wind: &Wind,
    aero: &Aerodynamics,
    dt: FloatType,
) -> Spherical {
    let headwind = -velocity + wind.as_spherical();
    let drag = Spherical::new(
        aero.drag_acceleration(headwind.magnitude) * dt,
        headwind.bearing,
        headwind.elevation,
    );
    let gravity = Spherical::new(GRAVITY_ACCEL * dt, 0.0, STRAIGHT_DOWN);

    drag + gravity
}
