//! Forward-Euler flight of a ball under gravity, quadratic drag and a steady wind.

mod environment;
mod error;
mod history;
mod params;
pub mod prelude;
mod solver;
mod spherical;
mod state;
mod trajectory;

pub use environment::{velocity_change, Aerodynamics, Wind};
pub use error::SimError;
pub use history::{History, Observation};
pub use params::LaunchParams;
pub use solver::{ForwardEuler, OdeSolver};
pub use spherical::{add_spherical, from_components, to_components, Spherical};
pub use state::State;
pub use trajectory::{Simulator, MAX_STEPS};
