//! Head-to-head comparison of two algorithms across several input sizes.
//!
//! For each size one random sequence is generated, and both algorithms sort
//! their own copy of it. Only swap and sorted events reach the caller's sink
//! (see [`SamplingSink`]), which keeps large runs cheap to observe. Results
//! are collected into a [`ComparisonReport`] that can be averaged,
//! summarised, and written out with [`crate::lino_report`].

use crate::algorithm::Algorithm;
use crate::error::{Result, SortError};
use crate::event::{Event, EventSink, SamplingSink};
use crate::input::{generate_with, validate_sizes, COMPARISON_VALUE_RANGE};
use crate::stats::SortStats;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// What to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    pub first: Algorithm,
    pub second: Algorithm,
    pub sizes: Vec<usize>,
    /// Seed for input generation; `None` draws from entropy
    pub seed: Option<u64>,
}

impl ComparisonConfig {
    /// Validate and build a configuration.
    ///
    /// The two algorithms must differ and every size must be in range.
    pub fn new(
        first: Algorithm,
        second: Algorithm,
        sizes: Vec<usize>,
        seed: Option<u64>,
    ) -> Result<Self> {
        if first == second {
            return Err(SortError::InvalidConfiguration(
                "select two different algorithms to compare".to_string(),
            ));
        }
        validate_sizes(&sizes)?;
        Ok(Self {
            first,
            second,
            sizes,
            seed,
        })
    }

    pub fn algorithms(&self) -> [Algorithm; 2] {
        [self.first, self.second]
    }
}

/// Outcome of one algorithm on one input size.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    pub algorithm: Algorithm,
    pub array_size: usize,
    pub time_ms: f64,
    pub comparisons: u64,
    pub swaps: u64,
    /// Output was ascending and a permutation of the input
    pub verified: bool,
}

/// Per-algorithm averages over all tested sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmAverages {
    pub algorithm: Algorithm,
    pub avg_time_ms: f64,
    pub avg_comparisons: f64,
    pub avg_swaps: f64,
}

/// Verdict on the largest tested size.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSummary {
    pub array_size: usize,
    pub faster: Algorithm,
    pub time_difference_ms: f64,
    pub more_efficient: Algorithm,
    pub comparison_difference: u64,
}

/// Collected results of a comparison run.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// ISO 8601 time the report was created
    pub timestamp: String,
    pub description: String,
    pub results: Vec<TrialResult>,
}

impl ComparisonReport {
    pub fn new(description: &str) -> Self {
        ComparisonReport {
            timestamp: crate::lino_report::timestamp_now(),
            description: description.to_string(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: TrialResult) {
        self.results.push(result);
    }

    /// Algorithms in order of first appearance.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        let mut seen = Vec::new();
        for result in &self.results {
            if !seen.contains(&result.algorithm) {
                seen.push(result.algorithm);
            }
        }
        seen
    }

    /// Distinct sizes in order of first appearance.
    pub fn sizes(&self) -> Vec<usize> {
        let mut seen = Vec::new();
        for result in &self.results {
            if !seen.contains(&result.array_size) {
                seen.push(result.array_size);
            }
        }
        seen
    }

    pub fn find(&self, algorithm: Algorithm, array_size: usize) -> Option<&TrialResult> {
        self.results
            .iter()
            .find(|r| r.algorithm == algorithm && r.array_size == array_size)
    }

    /// Average time, comparisons and swaps for one algorithm.
    pub fn averages_for(&self, algorithm: Algorithm) -> Option<AlgorithmAverages> {
        let trials: Vec<&TrialResult> = self
            .results
            .iter()
            .filter(|r| r.algorithm == algorithm)
            .collect();
        if trials.is_empty() {
            return None;
        }

        let count = trials.len() as f64;
        Some(AlgorithmAverages {
            algorithm,
            avg_time_ms: trials.iter().map(|r| r.time_ms).sum::<f64>() / count,
            avg_comparisons: trials.iter().map(|r| r.comparisons as f64).sum::<f64>() / count,
            avg_swaps: trials.iter().map(|r| r.swaps as f64).sum::<f64>() / count,
        })
    }

    pub fn averages(&self) -> Vec<AlgorithmAverages> {
        self.algorithms()
            .into_iter()
            .filter_map(|alg| self.averages_for(alg))
            .collect()
    }

    /// Compare the first two algorithms on the last tested size.
    ///
    /// Ties go to the first algorithm. `None` unless both have a result there.
    pub fn summary(&self) -> Option<ComparisonSummary> {
        let algorithms = self.algorithms();
        let (first, second) = match algorithms.as_slice() {
            [first, second, ..] => (*first, *second),
            _ => return None,
        };
        let size = *self.sizes().last()?;
        let a = self.find(first, size)?;
        let b = self.find(second, size)?;

        let time_diff = a.time_ms - b.time_ms;
        let faster = if time_diff > 0.0 { second } else { first };
        let more_efficient = if a.comparisons > b.comparisons {
            second
        } else {
            first
        };

        Some(ComparisonSummary {
            array_size: size,
            faster,
            time_difference_ms: time_diff.abs(),
            more_efficient,
            comparison_difference: a.comparisons.abs_diff(b.comparisons),
        })
    }

    /// Whether every trial produced a correctly sorted output.
    pub fn all_verified(&self) -> bool {
        self.results.iter().all(|r| r.verified)
    }
}

/// Sort one copy of `input` with `algorithm`, forwarding sampled events.
pub fn run_trial<S: EventSink + ?Sized>(
    algorithm: Algorithm,
    input: &[i64],
    sink: &mut S,
) -> Result<TrialResult> {
    let mut data = input.to_vec();
    let mut stats = SortStats::new();
    let mut sampled = SamplingSink::new(|event: Event<'_>| sink.emit(event));

    algorithm.timed_run(&mut data, &mut stats, &mut sampled)?;

    let mut expected = input.to_vec();
    expected.sort_unstable();

    Ok(TrialResult {
        algorithm,
        array_size: input.len(),
        time_ms: stats.elapsed().as_secs_f64() * 1000.0,
        comparisons: stats.comparisons,
        swaps: stats.swaps,
        verified: data == expected,
    })
}

/// Run the full comparison described by `config`.
///
/// Both algorithms see the same input at each size. The first failing trial
/// aborts the run.
pub fn run_comparison<S: EventSink + ?Sized>(
    config: &ComparisonConfig,
    sink: &mut S,
) -> Result<ComparisonReport> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut report = ComparisonReport::new(&format!(
        "{} vs {}",
        config.first.name(),
        config.second.name()
    ));

    let total = config.sizes.len();
    for (idx, &size) in config.sizes.iter().enumerate() {
        info!(progress = idx + 1, total, size, "comparing");
        let input = generate_with(&mut rng, size, COMPARISON_VALUE_RANGE);

        for algorithm in config.algorithms() {
            let result = run_trial(algorithm, &input, sink)?;
            info!(
                algorithm = algorithm.name(),
                size,
                time_ms = result.time_ms,
                comparisons = result.comparisons,
                swaps = result.swaps,
                "trial complete"
            );
            report.add_result(result);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Highlight, NoopSink, RecordingSink};

    fn trial(algorithm: Algorithm, size: usize, time_ms: f64, comparisons: u64) -> TrialResult {
        TrialResult {
            algorithm,
            array_size: size,
            time_ms,
            comparisons,
            swaps: comparisons / 2,
            verified: true,
        }
    }

    #[test]
    fn test_config_rejects_same_algorithm() {
        let err = ComparisonConfig::new(Algorithm::Heap, Algorithm::Heap, vec![10], None);
        assert!(matches!(err, Err(SortError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_config_rejects_bad_sizes() {
        assert!(ComparisonConfig::new(Algorithm::Heap, Algorithm::Quick, vec![], None).is_err());
        assert!(ComparisonConfig::new(Algorithm::Heap, Algorithm::Quick, vec![0], None).is_err());
        assert!(
            ComparisonConfig::new(Algorithm::Heap, Algorithm::Quick, vec![20_000], None).is_err()
        );
    }

    #[test]
    fn test_averages_and_summary() {
        let mut report = ComparisonReport::new("test");
        report.add_result(trial(Algorithm::Bubble, 10, 2.0, 45));
        report.add_result(trial(Algorithm::Merge, 10, 1.0, 25));
        report.add_result(trial(Algorithm::Bubble, 100, 8.0, 4950));
        report.add_result(trial(Algorithm::Merge, 100, 3.0, 540));

        let bubble = report.averages_for(Algorithm::Bubble).unwrap();
        assert_eq!(bubble.avg_time_ms, 5.0);
        assert_eq!(bubble.avg_comparisons, 2497.5);
        assert!(report.averages_for(Algorithm::Heap).is_none());
        assert_eq!(report.averages().len(), 2);

        let summary = report.summary().unwrap();
        assert_eq!(summary.array_size, 100);
        assert_eq!(summary.faster, Algorithm::Merge);
        assert_eq!(summary.time_difference_ms, 5.0);
        assert_eq!(summary.more_efficient, Algorithm::Merge);
        assert_eq!(summary.comparison_difference, 4410);
    }

    #[test]
    fn test_summary_needs_two_algorithms() {
        let mut report = ComparisonReport::new("single");
        report.add_result(trial(Algorithm::Quick, 10, 1.0, 20));
        assert!(report.summary().is_none());
    }

    #[test]
    fn test_run_comparison_seeded() {
        let config =
            ComparisonConfig::new(Algorithm::Insertion, Algorithm::Merge, vec![10, 50], Some(3))
                .unwrap();
        let report = run_comparison(&config, &mut NoopSink).unwrap();

        assert_eq!(report.results.len(), 4);
        assert!(report.all_verified());
        assert_eq!(report.sizes(), vec![10, 50]);
        assert_eq!(
            report.algorithms(),
            vec![Algorithm::Insertion, Algorithm::Merge]
        );
        assert!(report.summary().is_some());

        // Same seed, same counters
        let again = run_comparison(&config, &mut NoopSink).unwrap();
        for (a, b) in report.results.iter().zip(&again.results) {
            assert_eq!(a.comparisons, b.comparisons);
            assert_eq!(a.swaps, b.swaps);
        }
    }

    #[test]
    fn test_run_trial_forwards_only_sampled_events() {
        let mut sink = RecordingSink::without_snapshots();
        let result = run_trial(Algorithm::Bubble, &[3, 1, 2], &mut sink).unwrap();
        assert!(result.verified);
        assert!(!sink.is_empty());
        assert!(sink.events().iter().all(|e| matches!(
            e.highlight,
            Some(Highlight::Swapping(..)) | Some(Highlight::Sorted(_))
        )));
    }

    #[test]
    fn test_run_trial_propagates_errors() {
        let err = run_trial(Algorithm::Counting, &[], &mut NoopSink).unwrap_err();
        assert!(matches!(err, SortError::EmptyInput { .. }));
    }
}
