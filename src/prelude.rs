pub type FloatType = f64;
pub type Vector3 = nalgebra::Vector3<FloatType>;

/// Magnitude of gravitational acceleration, m/s², acting straight down.
pub const GRAVITY_ACCEL: FloatType = 9.8;
/// Elevation of a vector pointing straight down.
pub const STRAIGHT_DOWN: FloatType = -90.0;
/// Height above ground at which the projectile is released, m.
pub const RELEASE_HEIGHT: FloatType = 2.2;

pub const DRAG_COEFFICIENT: FloatType = 0.003;
pub const MASS: FloatType = 0.2;

pub trait AngleConversion {
    /// Wraps an angle in degrees into `[0, 360)`.
    fn wrap_degrees(self) -> Self;
}

impl AngleConversion for FloatType {
    fn wrap_degrees(self) -> Self {
        let wrapped = self.rem_euclid(360.0);
        // rem_euclid can round a tiny negative input up to exactly 360
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }
}

#[cfg(test)]
pub(crate) fn almost_equal(a: FloatType, b: FloatType, epsilon: FloatType) -> bool {
    (a - b).abs() <= epsilon
}

/// Smallest separation of two bearings on the circle, degrees.
#[cfg(test)]
pub(crate) fn bearing_difference(a: FloatType, b: FloatType) -> FloatType {
    let d = (a - b).wrap_degrees();
    d.min(360.0 - d)
}
