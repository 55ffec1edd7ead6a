use crate::prelude::*;
use std::ops::{Add, Neg};

/// A 3D vector in spherical form. Angles are in degrees; bearing is the azimuth
/// and elevation is measured up from the horizontal plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub magnitude: FloatType,
    pub bearing: FloatType,
    pub elevation: FloatType,
}

impl Spherical {
    pub const ZERO: Spherical = Spherical::new(0.0, 0.0, 0.0);

    pub const fn new(magnitude: FloatType, bearing: FloatType, elevation: FloatType) -> Self {
        Self {
            magnitude,
            bearing,
            elevation,
        }
    }

    /// A horizontal vector.
    pub const fn level(magnitude: FloatType, bearing: FloatType) -> Self {
        Self::new(magnitude, bearing, 0.0)
    }

    pub fn to_components(self) -> Vector3 {
        to_components(self.magnitude, self.bearing, self.elevation)
    }

    pub fn from_components(v: Vector3) -> Self {
        from_components(v.x, v.y, v.z)
    }
}

impl Add<Spherical> for Spherical {
    type Output = Spherical;

    fn add(self, rhs: Spherical) -> Self::Output {
        Spherical::from_components(self.to_components() + rhs.to_components())
    }
}

impl Neg for Spherical {
    type Output = Spherical;

    /// Reverses the direction by negating the magnitude; the angles are kept.
    fn neg(self) -> Self::Output {
        Spherical {
            magnitude: -self.magnitude,
            ..self
        }
    }
}

pub fn to_components(magnitude: FloatType, bearing: FloatType, elevation: FloatType) -> Vector3 {
    let (sin_b, cos_b) = bearing.to_radians().sin_cos();
    let (sin_e, cos_e) = elevation.to_radians().sin_cos();
    let horizontal = magnitude * cos_e;

    Vector3::new(horizontal * cos_b, horizontal * sin_b, magnitude * sin_e)
}

/// Recovers the spherical form of a Cartesian vector.
///
/// Both angles come from `atan2`, so no argument can leave the domain of an inverse
/// trig function through rounding. A zero vector has no direction and maps to a
/// bearing and elevation of 0.
pub fn from_components(dx: FloatType, dy: FloatType, dz: FloatType) -> Spherical {
    let horizontal = dx.hypot(dy);
    let magnitude = horizontal.hypot(dz);

    if magnitude == 0.0 {
        return Spherical::ZERO;
    }

    Spherical {
        magnitude,
        bearing: dy.atan2(dx).to_degrees().wrap_degrees(),
        elevation: dz.atan2(horizontal).to_degrees(),
    }
}

pub fn add_spherical(
    mag1: FloatType,
    bear1: FloatType,
    elev1: FloatType,
    mag2: FloatType,
    bear2: FloatType,
    elev2: FloatType,
) -> Spherical {
    Spherical::new(mag1, bear1, elev1) + Spherical::new(mag2, bear2, elev2)
}
