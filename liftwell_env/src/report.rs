//! Run reporting.
//!
//! The engine hands a finished run to a [`Reporter`] and is done with it.
//! Reporters own all presentation: the console reporter renders human lines
//! through the log layer, the JSON reporter prints a machine document to
//! stdout for pipeline consumption.

use serde::Serialize;
use tracing::{error, info};

/// The three aggregate conveyance statistics.
///
/// This is the contract every reporter must surface. Times are in ticks,
/// measured from a passenger's arrival tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConveyanceSummary {
    /// Mean conveyance time
    pub average: f64,

    /// Longest observed conveyance time
    pub longest: u64,

    /// Shortest observed conveyance time
    pub shortest: u64,
}

/// Final report for a completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Seed the run's generator was created from
    pub seed: u64,

    /// Ticks executed
    pub ticks: u64,

    /// Passengers generated over the run
    pub generated: u64,

    /// Passengers that physically reached their destination
    pub delivered: u64,

    /// Conveyance samples recorded (equals `delivered` under the
    /// at-delivery policy; counts passenger-ticks under per-tick)
    pub samples: u64,

    /// Passengers still waiting on a floor when the run ended
    pub waiting: u64,

    /// Passengers still inside an elevator when the run ended
    pub onboard: u64,

    /// Aggregate statistics; omitted entirely when no sample was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ConveyanceSummary>,
}

/// Sink for the final run report.
pub trait Reporter {
    /// Delivers the final report.
    fn deliver(&self, report: &RunReport);
}

/// Renders the report through the log layer for a human reader.
pub struct ConsoleReporter;

/// Formats the statistics lines: three lines when data exists, one explicit
/// no-data line otherwise.
fn report_lines(report: &RunReport) -> Vec<String> {
    match &report.summary {
        Some(summary) => vec![
            format!(
                "Average length of time between passenger arrival and conveyance to the final destination: {}",
                summary.average
            ),
            format!(
                "Longest time between passenger arrival and conveyance to the final destination: {}",
                summary.longest
            ),
            format!(
                "Shortest time between passenger arrival and conveyance to the final destination: {}",
                summary.shortest
            ),
        ],
        None => vec!["No passengers were conveyed to a destination; no conveyance times to report".to_string()],
    }
}

impl Reporter for ConsoleReporter {
    fn deliver(&self, report: &RunReport) {
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        info!(
            "Run complete: {} ticks | seed={} | generated={} delivered={} waiting={} onboard={}",
            report.ticks, report.seed, report.generated, report.delivered, report.waiting, report.onboard
        );
        for line in report_lines(report) {
            info!("{}", line);
        }
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }
}

/// Prints the report as pretty JSON on stdout.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn deliver(&self, report: &RunReport) {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{}", text),
            Err(err) => error!("Failed to serialize report: {}", err),
        }
    }
}
