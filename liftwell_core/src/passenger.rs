//! Passenger data.

/// Discrete simulation time, counted in ticks from zero.
pub type Tick = u64;

/// Building floor number. Floors are numbered 1 upward; an elevator on a
/// one-way sweep may hold values outside the building.
pub type Floor = i32;

/// A passenger waiting for, or riding, an elevator.
///
/// Immutable once created. The floor a passenger appeared on is not stored;
/// it only constrains generation (the destination never equals it) and plays
/// no further role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    /// Tick at which the passenger appeared on its floor
    pub arrival_tick: Tick,

    /// Floor the passenger wants to reach
    pub destination: Floor,
}

impl Passenger {
    /// Creates a passenger arriving at `arrival_tick`, bound for `destination`.
    pub fn new(arrival_tick: Tick, destination: Floor) -> Self {
        Self {
            arrival_tick,
            destination,
        }
    }

    /// Ticks this passenger has been in the system as of `now`.
    ///
    /// Callers only measure at ticks at or after the arrival tick.
    pub fn elapsed(&self, now: Tick) -> Tick {
        now - self.arrival_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_fields() {
        let p = Passenger::new(7, 3);
        assert_eq!(p.arrival_tick, 7);
        assert_eq!(p.destination, 3);
    }

    #[test]
    fn test_elapsed() {
        let p = Passenger::new(10, 5);
        assert_eq!(p.elapsed(10), 0);
        assert_eq!(p.elapsed(25), 15);
    }
}
