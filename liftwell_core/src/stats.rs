//! Conveyance-time statistics.

use liftwell_env::ConveyanceSummary;

use crate::passenger::Tick;

/// Running conveyance totals for one simulation.
///
/// What counts as a sample is the engine's business (one per delivered
/// passenger, or one per onboard passenger per tick); this type only folds
/// times into totals and extremes.
#[derive(Debug, Clone)]
pub struct ConveyanceStats {
    samples: u64,
    total_time: u64,
    longest: u64,
    shortest: u64,
}

impl Default for ConveyanceStats {
    fn default() -> Self {
        Self {
            samples: 0,
            total_time: 0,
            longest: 0,
            shortest: u64::MAX,
        }
    }
}

impl ConveyanceStats {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one conveyance time into the totals.
    pub fn record(&mut self, conveyance_time: Tick) {
        self.samples += 1;
        self.total_time += conveyance_time;
        self.longest = self.longest.max(conveyance_time);
        self.shortest = self.shortest.min(conveyance_time);
    }

    /// Returns how many samples have been recorded.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Returns the three aggregate statistics, or `None` when nothing was
    /// recorded. The zero-sample case is a distinct state, never a division
    /// by zero.
    pub fn summary(&self) -> Option<ConveyanceSummary> {
        if self.samples == 0 {
            return None;
        }
        Some(ConveyanceSummary {
            average: self.total_time as f64 / self.samples as f64,
            longest: self.longest,
            shortest: self.shortest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_stats_have_no_summary() {
        let stats = ConveyanceStats::new();
        assert_eq!(stats.samples(), 0);
        assert!(stats.summary().is_none());
    }

    #[test]
    fn test_single_sample() {
        let mut stats = ConveyanceStats::new();
        stats.record(7);

        let summary = stats.summary().unwrap();
        assert_relative_eq!(summary.average, 7.0);
        assert_eq!(summary.longest, 7);
        assert_eq!(summary.shortest, 7);
    }

    #[test]
    fn test_extremes_and_average() {
        let mut stats = ConveyanceStats::new();
        for time in [4, 9, 2, 9, 1] {
            stats.record(time);
        }

        let summary = stats.summary().unwrap();
        assert_eq!(stats.samples(), 5);
        assert_relative_eq!(summary.average, 5.0);
        assert_eq!(summary.longest, 9);
        assert_eq!(summary.shortest, 1);
    }

    #[test]
    fn test_zero_time_sample_counts() {
        // Per-tick measurement records zero for a passenger boarded this tick
        let mut stats = ConveyanceStats::new();
        stats.record(0);

        let summary = stats.summary().unwrap();
        assert_eq!(summary.shortest, 0);
        assert_eq!(summary.longest, 0);
        assert_relative_eq!(summary.average, 0.0);
    }
}
