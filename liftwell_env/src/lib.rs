//! Liftwell External Collaborator Layer
//!
//! This crate provides the two collaborators the simulation engine depends
//! on but does not own:
//!
//! - **Configuration provider**: resolves the six simulation options from a
//!   JSON source, substituting built-in defaults when the source is missing
//!   or unreadable. A source that is present but malformed is fatal.
//! - **Reporters**: sinks for the final run report. The engine is
//!   reporter-agnostic; every implementation surfaces the three conveyance
//!   statistics (average, longest, shortest) or the explicit no-data state.
//!
//! Keeping both behind this crate means the engine never touches the
//! filesystem or an output stream directly.

mod config;
mod error;
mod report;

pub use config::{PoolStructure, SimProperties};
pub use error::ConfigError;
pub use report::{ConsoleReporter, ConveyanceSummary, JsonReporter, Reporter, RunReport};
