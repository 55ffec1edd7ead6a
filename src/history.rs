use crate::{prelude::*, state::State};

/// One timestamped sample of the flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub t: FloatType,
    pub pos: Vector3,
    pub speed: FloatType,
}

/// Append-only record of a flight, kept as parallel columns so a plotter can take
/// each series as a plain slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    time: Vec<FloatType>,
    x: Vec<FloatType>,
    y: Vec<FloatType>,
    z: Vec<FloatType>,
    speed: Vec<FloatType>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
            speed: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, state: &State, t: FloatType) {
        self.time.push(t);
        self.x.push(state.pos.x);
        self.y.push(state.pos.y);
        self.z.push(state.pos.z);
        self.speed.push(state.speed());
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn times(&self) -> &[FloatType] {
        &self.time
    }

    pub fn xs(&self) -> &[FloatType] {
        &self.x
    }

    pub fn ys(&self) -> &[FloatType] {
        &self.y
    }

    pub fn zs(&self) -> &[FloatType] {
        &self.z
    }

    pub fn speeds(&self) -> &[FloatType] {
        &self.speed
    }

    pub fn get(&self, index: usize) -> Option<Observation> {
        Some(Observation {
            t: *self.time.get(index)?,
            pos: Vector3::new(self.x[index], self.y[index], self.z[index]),
            speed: self.speed[index],
        })
    }

    pub fn first(&self) -> Option<Observation> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Observation> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = Observation> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Highest point reached during the flight.
    pub fn apex(&self) -> Option<Observation> {
        self.iter().max_by(|a, b| a.pos.z.total_cmp(&b.pos.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spherical::Spherical;

    fn sample(x: FloatType, z: FloatType, speed: FloatType) -> State {
        State::new(Vector3::new(x, -x, z), Spherical::level(speed, 0.0))
    }

    #[test]
    fn test_columns_grow_in_lock_step() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);

        history.record(&sample(0.0, 2.2, 30.0), 0.0);
        history.record(&sample(1.0, 3.0, 29.0), 0.1);
        history.record(&sample(2.0, 1.0, 28.0), 0.2);

        assert_eq!(history.len(), 3);
        for column in [
            history.times(),
            history.xs(),
            history.ys(),
            history.zs(),
            history.speeds(),
        ] {
            assert_eq!(column.len(), 3);
        }
        assert_eq!(history.ys(), &[0.0, -1.0, -2.0]);
    }

    #[test]
    fn test_observations() {
        let mut history = History::with_capacity(2);
        history.record(&sample(0.0, 2.2, 30.0), 0.0);
        history.record(&sample(5.0, 7.5, 21.0), 0.5);

        let first = history.first().unwrap();
        assert_eq!(first.pos, Vector3::new(0.0, 0.0, 2.2));

        let last = history.last().unwrap();
        assert_eq!(last.t, 0.5);
        assert_eq!(last.speed, 21.0);
        assert_eq!(history.iter().count(), 2);
        assert_eq!(history.get(2), None);
        assert_eq!(history.apex(), Some(last));
    }
}
