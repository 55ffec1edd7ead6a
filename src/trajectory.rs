use crate::{
    environment::{velocity_change, Aerodynamics, Wind},
    error::SimError,
    history::History,
    params::LaunchParams,
    prelude::*,
    solver::OdeSolver,
    state::State,
};
use tracing::{debug, trace, warn};

/// Upper bound on steps taken by [`Simulator::fly`] before giving up.
pub const MAX_STEPS: usize = 1_000_000;

/// Flies a single projectile from release to ground contact.
///
/// A simulator is always in a launchable state: construction and
/// [`initialize`](Simulator::initialize) both seed the history with the release
/// sample at `t = 0`. Each [`step`](Simulator::step) advances one interval and
/// [`record_observation`](Simulator::record_observation) appends the result.
#[derive(Clone, Debug)]
pub struct Simulator {
    solver: OdeSolver,
    params: LaunchParams,
    wind: Wind,
    aero: Aerodynamics,
    history: History,
    steps: usize,
    max_steps: usize,
}

impl Simulator {
    pub fn new(params: &LaunchParams) -> Result<Self, SimError> {
        params.validate()?;

        let mut sim = Simulator {
            solver: OdeSolver::new(State::released(params.launch_velocity()), params.interval),
            params: *params,
            wind: params.wind(),
            aero: Aerodynamics::default(),
            history: History::new(),
            steps: 0,
            max_steps: MAX_STEPS,
        };
        sim.record_observation();
        Ok(sim)
    }

    /// Replaces the drag model. Takes effect from the next step.
    pub fn with_aerodynamics(mut self, aero: Aerodynamics) -> Self {
        self.aero = aero;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Resets the flight to the release point described by `params`.
    ///
    /// The drag model and step bound are kept. On error the previous state is left
    /// untouched.
    pub fn initialize(&mut self, params: &LaunchParams) -> Result<(), SimError> {
        params.validate()?;

        self.solver = OdeSolver::new(State::released(params.launch_velocity()), params.interval);
        self.params = *params;
        self.wind = params.wind();
        self.history = History::new();
        self.steps = 0;
        self.record_observation();

        debug!(
            speed = params.speed,
            bearing = params.bearing,
            elevation = params.elevation,
            wind_speed = params.wind_speed,
            wind_bearing = params.wind_bearing,
            interval = params.interval,
            "initialized flight"
        );
        Ok(())
    }

    /// Advances the flight by exactly one interval.
    pub fn step(&mut self) {
        let wind = self.wind;
        let aero = self.aero;

        let (state, t) = self
            .solver
            .step(|state, dt| velocity_change(state.vel, &wind, &aero, dt));
        trace!(
            t,
            x = state.pos.x,
            y = state.pos.y,
            z = state.pos.z,
            speed = state.vel.magnitude,
            "step"
        );

        self.steps += 1;
    }

    pub fn record_observation(&mut self) {
        self.history.record(self.solver.state(), self.solver.time());
    }

    pub fn has_landed(&self) -> bool {
        self.solver.state().is_grounded()
    }

    /// Steps and records until ground contact, then returns the distance of the
    /// landing point from the target.
    pub fn fly(&mut self) -> Result<FloatType, SimError> {
        while !self.has_landed() {
            if self.steps >= self.max_steps {
                let height = self.solver.state().height();
                warn!(steps = self.steps, height, "step bound reached while airborne");
                return Err(SimError::DidNotTerminate {
                    steps: self.steps,
                    height,
                });
            }

            self.step();
            self.record_observation();
        }

        let distance = self.distance_to_target();
        let pos = self.solver.state().pos;
        debug!(
            steps = self.steps,
            t = self.solver.time(),
            x = pos.x,
            y = pos.y,
            distance,
            "landed"
        );
        Ok(distance)
    }

    /// Initializes from `params` and flies to the ground.
    pub fn run(&mut self, params: &LaunchParams) -> Result<FloatType, SimError> {
        self.initialize(params)?;
        self.fly()
    }

    /// Distance across the ground between the current position and the target.
    pub fn distance_to_target(&self) -> FloatType {
        self.solver
            .state()
            .ground_distance_to(self.params.target_x, self.params.target_y)
    }

    pub fn state(&self) -> &State {
        self.solver.state()
    }

    pub fn time(&self) -> FloatType {
        self.solver.time()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn params(&self) -> &LaunchParams {
        &self.params
    }

    pub fn wind(&self) -> &Wind {
        &self.wind
    }

    pub fn aerodynamics(&self) -> &Aerodynamics {
        &self.aero
    }
}
