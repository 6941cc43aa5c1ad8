//! Running statistics for a single sort invocation.
//!
//! A `SortStats` is created fresh by the caller, incremented only by the
//! algorithm while it runs, and finalised by the caller afterwards. One
//! record belongs to exactly one in-flight invocation.

use std::time::{Duration, Instant};

/// Counters and timing markers for one sort run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of element comparisons performed
    pub comparisons: u64,
    /// Number of swaps, shifts or placements performed
    pub swaps: u64,
    /// Set by the caller just before the algorithm starts
    pub start_time: Option<Instant>,
    /// Set by the caller after the algorithm returns
    pub end_time: Option<Instant>,
}

impl SortStats {
    /// Create a record with zeroed counters and no timestamps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run as started now.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.end_time = None;
    }

    /// Mark the run as complete.
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Duration between start and end, or elapsed so far if still running.
    ///
    /// Returns zero when the run was never started.
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let stats = SortStats::new();
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.swaps, 0);
        assert!(stats.start_time.is_none());
        assert!(stats.end_time.is_none());
        assert_eq!(stats.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_start_finish() {
        let mut stats = SortStats::new();
        stats.start();
        assert!(!stats.is_finished());
        stats.finish();
        assert!(stats.is_finished());
        let first = stats.elapsed();
        // A finished run reports a frozen duration
        assert_eq!(stats.elapsed(), first);
    }
}
