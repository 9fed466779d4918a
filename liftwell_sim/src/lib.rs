//! Liftwell Simulation Harness
//!
//! This crate drives the discrete tick loop over one building and its
//! elevators. Each tick runs a fixed protocol:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     SimEngine                       │
//! │                                                     │
//! │  1. generate arrivals into the shared pool          │
//! │  2. per elevator, in order:                         │
//! │       unload → claim eligible → move one floor      │
//! │  3. per-tick statistics pass (policy-dependent)     │
//! │                                                     │
//! │  ┌──────────┐    claim     ┌──────────┐             │
//! │  │ Building │◄────────────►│ Elevator │   ...       │
//! │  │  (pool)  │              │ (onboard)│             │
//! │  └──────────┘              └──────────┘             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! All randomness flows from a single ChaCha8 generator owned by the engine,
//! so a run is fully determined by its configuration and seed.

mod engine;

pub use engine::{SimEngine, StatsPolicy};
