//! Liftwell Core - Building, Elevator and Passenger Domain
//!
//! This library holds the three components every simulation run is built
//! from:
//! 1. **Building**: floor count, stochastic passenger arrivals, and the
//!    single shared pool of waiting passengers
//! 2. **Elevator**: floor-by-floor sweep motion with onboard passengers
//! 3. **Statistics**: running conveyance-time aggregation
//!
//! The pool follows a claim discipline: claiming is the only removal point,
//! so a passenger can board at most one elevator no matter how many stop at
//! its floor in the same tick.

pub mod building;
pub mod elevator;
pub mod passenger;
pub mod stats;

// Re-export key types for convenience
pub use building::Building;
pub use elevator::{Direction, Elevator, SweepPolicy};
pub use passenger::{Floor, Passenger, Tick};
pub use stats::ConveyanceStats;
