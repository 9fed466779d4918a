//! Building - floors, stochastic arrivals, and the shared waiting pool.

use liftwell_env::PoolStructure;
use rand::Rng;
use std::collections::VecDeque;

use crate::elevator::Direction;
use crate::passenger::{Floor, Passenger, Tick};

/// Ordered pool of waiting passengers.
///
/// The backing collection is chosen by the `structures` option. Claiming
/// scans in order from the oldest entry and is the only removal point, which
/// is what makes boarding first-come-first-served and single-winner.
#[derive(Debug, Clone)]
enum WaitingPool {
    Linked(VecDeque<Passenger>),
    Array(Vec<Passenger>),
}

impl WaitingPool {
    fn new(structure: PoolStructure) -> Self {
        match structure {
            PoolStructure::Linked => WaitingPool::Linked(VecDeque::new()),
            PoolStructure::Array => WaitingPool::Array(Vec::new()),
        }
    }

    fn push(&mut self, passenger: Passenger) {
        match self {
            WaitingPool::Linked(queue) => queue.push_back(passenger),
            WaitingPool::Array(items) => items.push(passenger),
        }
    }

    fn len(&self) -> usize {
        match self {
            WaitingPool::Linked(queue) => queue.len(),
            WaitingPool::Array(items) => items.len(),
        }
    }

    fn passengers(&self) -> Vec<Passenger> {
        match self {
            WaitingPool::Linked(queue) => queue.iter().copied().collect(),
            WaitingPool::Array(items) => items.clone(),
        }
    }

    fn structure(&self) -> PoolStructure {
        match self {
            WaitingPool::Linked(_) => PoolStructure::Linked,
            WaitingPool::Array(_) => PoolStructure::Array,
        }
    }

    /// Removes and returns up to `quota` passengers satisfying `eligible`,
    /// scanning from the oldest entry. Relative order of the passengers left
    /// behind is preserved.
    fn claim<F>(&mut self, quota: usize, mut eligible: F) -> Vec<Passenger>
    where
        F: FnMut(&Passenger) -> bool,
    {
        let mut claimed = Vec::new();
        let mut index = 0;
        while index < self.len() && claimed.len() < quota {
            let candidate = match &*self {
                WaitingPool::Linked(queue) => queue[index],
                WaitingPool::Array(items) => items[index],
            };
            if eligible(&candidate) {
                match self {
                    WaitingPool::Linked(queue) => {
                        queue.remove(index);
                    }
                    WaitingPool::Array(items) => {
                        items.remove(index);
                    }
                }
                claimed.push(candidate);
            } else {
                index += 1;
            }
        }
        claimed
    }
}

/// A building served by the simulation's elevators.
///
/// Owns the single pool shared by every elevator; there are no per-floor
/// queues.
#[derive(Debug, Clone)]
pub struct Building {
    floors: Floor,
    probability: f64,
    pool: WaitingPool,
    generated: u64,
}

impl Building {
    /// Creates a building with floors numbered 1 through `floors`.
    ///
    /// `probability` is the per-floor, per-tick arrival probability and must
    /// lie in `[0, 1]` (enforced by config validation before construction).
    pub fn new(floors: Floor, probability: f64, structure: PoolStructure) -> Self {
        Self {
            floors,
            probability,
            pool: WaitingPool::new(structure),
            generated: 0,
        }
    }

    /// Returns the number of floors.
    pub fn floors(&self) -> Floor {
        self.floors
    }

    /// Returns the per-floor, per-tick arrival probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Returns which pool representation is in use.
    pub fn pool_structure(&self) -> PoolStructure {
        self.pool.structure()
    }

    /// Returns how many passengers are waiting.
    pub fn waiting_count(&self) -> usize {
        self.pool.len()
    }

    /// Returns the waiting passengers in pool order, oldest first.
    pub fn waiting_passengers(&self) -> Vec<Passenger> {
        self.pool.passengers()
    }

    /// Returns the total number of passengers generated so far.
    pub fn total_generated(&self) -> u64 {
        self.generated
    }

    /// Runs one arrival trial per floor, appending a passenger to the pool
    /// for each success.
    ///
    /// Destinations are drawn uniformly and redrawn until they differ from
    /// the generating floor. A single-floor building admits no valid
    /// destination, so it generates nothing.
    pub fn generate_passengers<R: Rng>(&mut self, tick: Tick, rng: &mut R) {
        if self.floors < 2 {
            return;
        }
        for floor in 1..=self.floors {
            if !rng.gen_bool(self.probability) {
                continue;
            }
            let mut destination = floor;
            while destination == floor {
                destination = rng.gen_range(1..=self.floors);
            }
            self.pool.push(Passenger::new(tick, destination));
            self.generated += 1;
        }
    }

    /// Claims up to `quota` passengers for an elevator at `floor` heading
    /// `direction`.
    ///
    /// A passenger is eligible once it has arrived (`arrival_tick <= tick`)
    /// and its destination lies strictly ahead of `floor` in `direction`.
    /// Claimed passengers leave the pool immediately, so when several
    /// elevators share a floor the one processed first wins and the rest see
    /// a smaller pool.
    pub fn claim_eligible(
        &mut self,
        tick: Tick,
        floor: Floor,
        direction: Direction,
        quota: usize,
    ) -> Vec<Passenger> {
        self.pool.claim(quota, |p| {
            p.arrival_tick <= tick && direction.advances(floor, p.destination)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_zero_probability_generates_nothing() {
        let mut building = Building::new(16, 0.0, PoolStructure::Linked);
        let mut rng = rng(1);
        for tick in 0..50 {
            building.generate_passengers(tick, &mut rng);
        }
        assert_eq!(building.waiting_count(), 0);
        assert_eq!(building.total_generated(), 0);
    }

    #[test]
    fn test_certain_probability_generates_one_per_floor() {
        let mut building = Building::new(5, 1.0, PoolStructure::Linked);
        let mut rng = rng(2);
        building.generate_passengers(0, &mut rng);
        building.generate_passengers(1, &mut rng);
        assert_eq!(building.total_generated(), 10);

        let waiting = building.waiting_passengers();
        assert_eq!(waiting.len(), 10);
        // Floors are visited in order, so origins cycle 1..=5 twice
        for (i, passenger) in waiting.iter().enumerate() {
            let origin = (i as Floor % 5) + 1;
            let expected_tick = (i / 5) as Tick;
            assert_eq!(passenger.arrival_tick, expected_tick);
            assert!(passenger.destination >= 1 && passenger.destination <= 5);
            assert_ne!(passenger.destination, origin);
        }
    }

    #[test]
    fn test_single_floor_building_generates_nothing() {
        let mut building = Building::new(1, 1.0, PoolStructure::Linked);
        let mut rng = rng(3);
        for tick in 0..10 {
            building.generate_passengers(tick, &mut rng);
        }
        assert_eq!(building.total_generated(), 0);
    }

    #[test]
    fn test_claim_filters_by_direction() {
        let mut building = Building::new(5, 1.0, PoolStructure::Linked);
        let mut rng = rng(4);
        building.generate_passengers(0, &mut rng);

        // At floor 1 heading up, only destination == 1 is ineligible
        let claimed = building.claim_eligible(0, 1, Direction::Up, 10);
        assert_eq!(claimed.len() + building.waiting_count(), 5);
        assert!(claimed.iter().all(|p| p.destination > 1));
        assert!(building.waiting_passengers().iter().all(|p| p.destination == 1));
    }

    #[test]
    fn test_claim_takes_earliest_arrivals_first() {
        // With two floors the destinations are forced: floor 1 spawns a
        // passenger for 2, floor 2 spawns one for 1, every tick.
        let mut building = Building::new(2, 1.0, PoolStructure::Linked);
        let mut rng = rng(5);
        for tick in 0..3 {
            building.generate_passengers(tick, &mut rng);
        }
        assert_eq!(building.total_generated(), 6);

        let claimed = building.claim_eligible(2, 1, Direction::Up, 2);
        assert_eq!(claimed.len(), 2);
        assert_eq!(claimed[0], Passenger::new(0, 2));
        assert_eq!(claimed[1], Passenger::new(1, 2));

        // Unclaimed passengers keep their relative order
        let waiting = building.waiting_passengers();
        let remaining: Vec<(Tick, Floor)> =
            waiting.iter().map(|p| (p.arrival_tick, p.destination)).collect();
        assert_eq!(remaining, vec![(0, 1), (1, 1), (2, 2), (2, 1)]);
    }

    #[test]
    fn test_claim_ignores_future_arrivals() {
        let mut pool = WaitingPool::new(PoolStructure::Linked);
        pool.push(Passenger::new(10, 4));
        pool.push(Passenger::new(2, 4));

        let now: Tick = 5;
        let claimed = pool.claim(10, |p| p.arrival_tick <= now && Direction::Up.advances(1, p.destination));
        assert_eq!(claimed, vec![Passenger::new(2, 4)]);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_claim_zero_quota_takes_nothing() {
        let mut pool = WaitingPool::new(PoolStructure::Array);
        pool.push(Passenger::new(0, 3));
        assert!(pool.claim(0, |_| true).is_empty());
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_pool_structures_behave_identically() {
        let mut linked = Building::new(8, 0.6, PoolStructure::Linked);
        let mut array = Building::new(8, 0.6, PoolStructure::Array);
        let mut rng_a = rng(42);
        let mut rng_b = rng(42);

        for tick in 0..20 {
            linked.generate_passengers(tick, &mut rng_a);
            array.generate_passengers(tick, &mut rng_b);

            let claimed_a = linked.claim_eligible(tick, 3, Direction::Up, 2);
            let claimed_b = array.claim_eligible(tick, 3, Direction::Up, 2);
            assert_eq!(claimed_a, claimed_b);
        }

        assert_eq!(linked.total_generated(), array.total_generated());
        assert_eq!(linked.waiting_passengers(), array.waiting_passengers());
    }
}
