//! Elevator motion and onboard passenger handling.

use crate::passenger::{Floor, Passenger};

/// Travel direction of an elevator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Floor delta applied per tick of movement.
    pub fn delta(&self) -> Floor {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    /// Returns true if `to` lies strictly ahead of `from` in this direction.
    ///
    /// This is the boarding test: a passenger's destination must be ahead of
    /// the elevator's current floor, so same-floor destinations never match.
    pub fn advances(&self, from: Floor, to: Floor) -> bool {
        match self {
            Direction::Up => to > from,
            Direction::Down => to < from,
        }
    }
}

/// Behavior of an elevator at the building's boundary floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepPolicy {
    /// Reverse direction upon reaching floor 1 or the top floor
    Bounce,

    /// Never reverse: the initial upward sweep continues past the top floor
    /// indefinitely, with no clamping
    OneWay,
}

impl SweepPolicy {
    /// Returns the policy name.
    pub fn name(&self) -> &'static str {
        match self {
            SweepPolicy::Bounce => "bounce",
            SweepPolicy::OneWay => "one-way",
        }
    }
}

impl std::fmt::Display for SweepPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for SweepPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bounce" => Ok(SweepPolicy::Bounce),
            "one-way" | "one_way" | "oneway" => Ok(SweepPolicy::OneWay),
            _ => Err(format!("Unknown sweep policy: {}", s)),
        }
    }
}

/// A single elevator car.
///
/// Starts at floor 1 heading up. Movement is one floor per tick; stopping is
/// implicit, since boarding and alighting happen before the move.
#[derive(Debug, Clone)]
pub struct Elevator {
    current_floor: Floor,
    direction: Direction,
    capacity: usize,
    onboard: Vec<Passenger>,
}

impl Elevator {
    /// Creates an elevator at floor 1 heading up, with room for `capacity`
    /// passengers.
    pub fn new(capacity: usize) -> Self {
        Self {
            current_floor: 1,
            direction: Direction::Up,
            capacity,
            onboard: Vec::new(),
        }
    }

    /// Returns the floor the elevator is currently at.
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    /// Returns the current travel direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the passenger capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the passengers currently onboard.
    pub fn onboard(&self) -> &[Passenger] {
        &self.onboard
    }

    /// Returns how many more passengers fit.
    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.onboard.len())
    }

    /// Boards a passenger.
    ///
    /// No capacity check happens here: callers claim at most
    /// [`Elevator::remaining_capacity`] passengers before boarding them.
    pub fn load(&mut self, passenger: Passenger) {
        self.onboard.push(passenger);
    }

    /// Removes and returns every onboard passenger whose destination is
    /// `floor`, preserving boarding order.
    pub fn unload_at(&mut self, floor: Floor) -> Vec<Passenger> {
        let mut delivered = Vec::new();
        self.onboard.retain(|p| {
            if p.destination == floor {
                delivered.push(*p);
                false
            } else {
                true
            }
        });
        delivered
    }

    /// Moves one floor in the current direction.
    ///
    /// Under [`SweepPolicy::Bounce`] the direction reverses once the car
    /// reaches floor 1 or `top_floor`, so the next move heads back into the
    /// building. Under [`SweepPolicy::OneWay`] the direction never changes
    /// and the floor keeps advancing past `top_floor`, stopping only at the
    /// numeric bounds of [`Floor`].
    pub fn step(&mut self, top_floor: Floor, policy: SweepPolicy) {
        self.current_floor = self.current_floor.saturating_add(self.direction.delta());
        if policy == SweepPolicy::Bounce {
            if self.current_floor >= top_floor {
                self.direction = Direction::Down;
            } else if self.current_floor <= 1 {
                self.direction = Direction::Up;
            }
        }
    }
}
