use crate::prelude::FloatType;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A launch parameter is outside the range the integrator can work with.
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },
    /// The step bound ran out while the projectile was still in the air.
    DidNotTerminate { steps: usize, height: FloatType },
}

impl SimError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidConfiguration { field, reason } => {
                write!(f, "invalid configuration: {field} {reason}")
            }
            SimError::DidNotTerminate { steps, height } => write!(
                f,
                "simulation did not terminate: still at height {height:.3} m after {steps} steps"
            ),
        }
    }
}

impl Error for SimError {}
