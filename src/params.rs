//! Launch parameters for a single flight.

use crate::{environment::Wind, error::SimError, prelude::*, spherical::Spherical};

/// The eight scalars that fully describe a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    /// Initial speed, m/s.
    pub speed: FloatType,
    /// Initial bearing, degrees.
    pub bearing: FloatType,
    /// Initial elevation above the horizontal, degrees.
    pub elevation: FloatType,
    /// Wind speed, m/s.
    pub wind_speed: FloatType,
    /// Direction the wind blows toward, degrees.
    pub wind_bearing: FloatType,
    /// Target position on the ground, m.
    pub target_x: FloatType,
    pub target_y: FloatType,
    /// Time step, s.
    pub interval: FloatType,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            speed: 30.0,
            bearing: 15.0,
            elevation: 40.0,
            wind_speed: 20.0,
            wind_bearing: 170.0,
            target_x: 10.0,
            target_y: 20.0,
            interval: 0.01,
        }
    }
}

impl LaunchParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        speed: FloatType,
        bearing: FloatType,
        elevation: FloatType,
        wind_speed: FloatType,
        wind_bearing: FloatType,
        target_x: FloatType,
        target_y: FloatType,
        interval: FloatType,
    ) -> Self {
        Self {
            speed,
            bearing,
            elevation,
            wind_speed,
            wind_bearing,
            target_x,
            target_y,
            interval,
        }
    }

    pub fn launch_velocity(&self) -> Spherical {
        Spherical::new(self.speed, self.bearing, self.elevation)
    }

    pub fn wind(&self) -> Wind {
        Wind::new(self.wind_speed, self.wind_bearing)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let fields = [
            ("speed", self.speed),
            ("bearing", self.bearing),
            ("elevation", self.elevation),
            ("wind_speed", self.wind_speed),
            ("wind_bearing", self.wind_bearing),
            ("target_x", self.target_x),
            ("target_y", self.target_y),
            ("interval", self.interval),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SimError::invalid(field, format!("must be finite, got {value}")));
            }
        }

        if self.interval <= 0.0 {
            return Err(SimError::invalid(
                "interval",
                format!("must be positive, got {}", self.interval),
            ));
        }
        if self.speed < 0.0 {
            return Err(SimError::invalid(
                "speed",
                format!("must not be negative, got {}", self.speed),
            ));
        }
        if self.wind_speed < 0.0 {
            return Err(SimError::invalid(
                "wind_speed",
                format!("must not be negative, got {}", self.wind_speed),
            ));
        }

        Ok(())
    }
}
