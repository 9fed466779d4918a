//! Simulation engine - runs the per-tick protocol.

use liftwell_core::{Building, ConveyanceStats, Elevator, SweepPolicy};
use liftwell_env::{RunReport, SimProperties};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tracing::{debug, info, warn};

/// When conveyance samples are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPolicy {
    /// Measure each passenger exactly once, at the tick it steps off
    AtDelivery,

    /// Measure every still-onboard passenger at every tick, after all
    /// elevators have moved. A passenger is re-counted for each tick it
    /// remains aboard and is never counted at the tick it steps off
    PerTick,
}

impl StatsPolicy {
    /// Returns the policy name.
    pub fn name(&self) -> &'static str {
        match self {
            StatsPolicy::AtDelivery => "at-delivery",
            StatsPolicy::PerTick => "per-tick",
        }
    }
}

impl std::fmt::Display for StatsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for StatsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "at-delivery" | "at_delivery" | "delivery" => Ok(StatsPolicy::AtDelivery),
            "per-tick" | "per_tick" => Ok(StatsPolicy::PerTick),
            _ => Err(format!("Unknown statistics policy: {}", s)),
        }
    }
}

/// The simulation engine.
///
/// Owns everything a run needs: the building with its waiting pool, the
/// elevators, the seeded generator, and the running statistics. Elevators
/// are processed in construction order every tick, which is what resolves
/// contested boardings deterministically.
pub struct SimEngine {
    /// Building with the shared waiting pool
    building: Building,

    /// Elevators, in processing order
    elevators: Vec<Elevator>,

    /// Sole source of randomness for the run
    rng: ChaCha8Rng,

    /// Seed the generator was created from
    seed: u64,

    /// Ticks executed so far
    tick_count: u64,

    /// Ticks to execute in total
    duration: u64,

    /// Passengers that have stepped off at their destination
    delivered: u64,

    /// Running conveyance totals
    stats: ConveyanceStats,

    /// Boundary behavior of the elevators
    sweep: SweepPolicy,

    /// When samples are recorded
    stats_policy: StatsPolicy,
}

impl SimEngine {
    /// Creates an engine from validated properties and a seed.
    pub fn new(props: &SimProperties, seed: u64) -> Self {
        let building = Building::new(props.floors, props.passengers, props.structures);
        let elevators = (0..props.elevators)
            .map(|_| Elevator::new(props.elevator_capacity))
            .collect();

        Self {
            building,
            elevators,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            tick_count: 0,
            duration: props.duration,
            delivered: 0,
            stats: ConveyanceStats::new(),
            sweep: SweepPolicy::Bounce,
            stats_policy: StatsPolicy::AtDelivery,
        }
    }

    /// Sets the sweep policy.
    pub fn with_sweep_policy(mut self, sweep: SweepPolicy) -> Self {
        self.sweep = sweep;
        self
    }

    /// Sets the statistics policy.
    pub fn with_stats_policy(mut self, policy: StatsPolicy) -> Self {
        self.stats_policy = policy;
        self
    }

    /// Returns the building.
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Returns the elevators in processing order.
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    /// Returns how many ticks have executed.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Advances the simulation by one tick.
    ///
    /// Order within the tick is fixed: arrivals first, then each elevator
    /// unloads, claims and moves before the next elevator is touched, then
    /// the per-tick statistics pass. An unloaded seat is therefore available
    /// to boarders at the same floor in the same tick, and a passenger
    /// generated this tick can board this tick.
    pub fn tick(&mut self) {
        let tick = self.tick_count;
        let top_floor = self.building.floors();

        self.building.generate_passengers(tick, &mut self.rng);

        for elevator in &mut self.elevators {
            let floor = elevator.current_floor();

            let stepped_off = elevator.unload_at(floor);
            self.delivered += stepped_off.len() as u64;
            if self.stats_policy == StatsPolicy::AtDelivery {
                for passenger in &stepped_off {
                    self.stats.record(passenger.elapsed(tick));
                }
            }

            let quota = elevator.remaining_capacity();
            for passenger in self.building.claim_eligible(tick, floor, elevator.direction(), quota) {
                elevator.load(passenger);
            }

            elevator.step(top_floor, self.sweep);
        }

        if self.stats_policy == StatsPolicy::PerTick {
            for elevator in &self.elevators {
                for passenger in elevator.onboard() {
                    self.stats.record(passenger.elapsed(tick));
                }
            }
        }

        self.tick_count += 1;

        if self.tick_count % 100 == 0 {
            debug!(
                "tick {} | waiting={} onboard={} delivered={} samples={}",
                self.tick_count,
                self.building.waiting_count(),
                self.elevators.iter().map(|e| e.onboard().len()).sum::<usize>(),
                self.delivered,
                self.stats.samples()
            );
        }
    }

    /// Builds a report from the current state.
    pub fn report(&self) -> RunReport {
        RunReport {
            seed: self.seed,
            ticks: self.tick_count,
            generated: self.building.total_generated(),
            delivered: self.delivered,
            samples: self.stats.samples(),
            waiting: self.building.waiting_count() as u64,
            onboard: self.elevators.iter().map(|e| e.onboard().len() as u64).sum(),
            summary: self.stats.summary(),
        }
    }

    /// Runs the configured number of ticks and returns the final report.
    pub fn run(&mut self) -> RunReport {
        info!(
            "Simulation start: floors={} elevators={} capacity={} p={} duration={} pool={} sweep={} stats={} seed={}",
            self.building.floors(),
            self.elevators.len(),
            self.elevators.first().map(|e| e.capacity()).unwrap_or(0),
            self.building.probability(),
            self.duration,
            self.building.pool_structure(),
            self.sweep,
            self.stats_policy,
            self.seed
        );
        if self.building.floors() < 2 {
            warn!("Building has a single floor; no trip is possible and no passengers will be generated");
        }

        let started = Instant::now();
        while self.tick_count < self.duration {
            self.tick();
        }

        let report = self.report();
        info!(
            "Simulation complete: {} ticks, {} generated, {} delivered in {:.2}s",
            report.ticks,
            report.generated,
            report.delivered,
            started.elapsed().as_secs_f64()
        );
        report
    }
}
