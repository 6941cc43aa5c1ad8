//! Registry of the nine instrumented algorithms.
//!
//! Selection happens once, by name, through [`Algorithm::from_str`]; after
//! that dispatch is a plain `match`, so an unknown name can never reach a
//! sort call.

use crate::distribution_sort;
use crate::divide_sort;
use crate::error::{Result, SortError};
use crate::event::EventSink;
use crate::exchange_sort;
use crate::stats::SortStats;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One of the supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Bucket,
}

/// Educational summary of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub description: &'static str,
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
    ];

    /// Display name, e.g. "Bubble Sort".
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Counting => "Counting Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Bucket => "Bucket Sort",
        }
    }

    /// Lookup key: the display name lower-cased with `_` for spaces.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Selection => "selection_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Quick => "quick_sort",
            Algorithm::Heap => "heap_sort",
            Algorithm::Counting => "counting_sort",
            Algorithm::Radix => "radix_sort",
            Algorithm::Bucket => "bucket_sort",
        }
    }

    /// Whether the algorithm needs at least one element (it computes min/max).
    pub fn requires_non_empty(self) -> bool {
        matches!(
            self,
            Algorithm::Counting | Algorithm::Radix | Algorithm::Bucket
        )
    }

    /// Sort `seq` in place, counting into `stats` and reporting to `sink`.
    ///
    /// Timestamps in `stats` are left alone; see [`Algorithm::timed_run`].
    /// On error the sequence may be partially mutated and should be discarded.
    pub fn run<S: EventSink + ?Sized>(
        self,
        seq: &mut [i64],
        stats: &mut SortStats,
        sink: &mut S,
    ) -> Result<()> {
        debug!(algorithm = self.name(), len = seq.len(), "running sort");
        match self {
            Algorithm::Bubble => exchange_sort::bubble_sort(seq, stats, sink),
            Algorithm::Selection => exchange_sort::selection_sort(seq, stats, sink),
            Algorithm::Insertion => exchange_sort::insertion_sort(seq, stats, sink),
            Algorithm::Merge => divide_sort::merge_sort(seq, stats, sink),
            Algorithm::Quick => divide_sort::quick_sort(seq, stats, sink),
            Algorithm::Heap => divide_sort::heap_sort(seq, stats, sink),
            Algorithm::Counting => return distribution_sort::counting_sort(seq, stats, sink),
            Algorithm::Radix => return distribution_sort::radix_sort(seq, stats, sink),
            Algorithm::Bucket => return distribution_sort::bucket_sort(seq, stats, sink),
        }
        Ok(())
    }

    /// Like [`Algorithm::run`], but stamps `start_time` before and `end_time`
    /// after the run (also when it fails).
    pub fn timed_run<S: EventSink + ?Sized>(
        self,
        seq: &mut [i64],
        stats: &mut SortStats,
        sink: &mut S,
    ) -> Result<()> {
        stats.start();
        let result = self.run(seq, stats, sink);
        stats.finish();
        debug!(
            algorithm = self.name(),
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            elapsed_ms = stats.elapsed().as_secs_f64() * 1000.0,
            "sort finished"
        );
        result
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Algorithm::Bubble => AlgorithmInfo {
                description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Selection => AlgorithmInfo {
                description: "Divides the list into a sorted prefix and an unsorted suffix, moving the suffix minimum to the boundary each pass.",
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Insertion => AlgorithmInfo {
                description: "Builds the final sorted list one item at a time by shifting larger predecessors right.",
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Merge => AlgorithmInfo {
                description: "Divides the list into halves, sorts each recursively and merges the sorted halves.",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
            },
            Algorithm::Quick => AlgorithmInfo {
                description: "Partitions around the last element as pivot and recursively sorts both sides.",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
            },
            Algorithm::Heap => AlgorithmInfo {
                description: "Builds a max-heap, then repeatedly moves the root to the end and restores the heap.",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(1)",
            },
            Algorithm::Counting => AlgorithmInfo {
                description: "Counts occurrences of each value and places elements by cumulative count.",
                best: "O(n + k)",
                average: "O(n + k)",
                worst: "O(n + k)",
                space: "O(n + k)",
            },
            Algorithm::Radix => AlgorithmInfo {
                description: "Sorts by individual decimal digits, least significant first, with a stable counting pass per digit.",
                best: "O(nk)",
                average: "O(nk)",
                worst: "O(nk)",
                space: "O(n + k)",
            },
            Algorithm::Bucket => AlgorithmInfo {
                description: "Distributes elements into value-range buckets, insertion-sorts each bucket and concatenates them.",
                best: "O(n + k)",
                average: "O(n + k)",
                worst: "O(n²)",
                space: "O(n + k)",
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts "Bubble Sort", "bubble_sort", "bubble-sort" or "bubble".
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace([' ', '-'], "_");

        Algorithm::ALL
            .into_iter()
            .find(|alg| {
                let key = alg.key();
                normalized == key || Some(normalized.as_str()) == key.strip_suffix("_sort")
            })
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{NoopSink, RecordingSink};

    #[test]
    fn test_lookup_by_display_name() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.name().parse::<Algorithm>().unwrap(), alg);
            assert_eq!(alg.key().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_lookup_variants() {
        assert_eq!("quick".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!("  Heap-Sort ".parse::<Algorithm>().unwrap(), Algorithm::Heap);
        assert_eq!("RADIX SORT".parse::<Algorithm>().unwrap(), Algorithm::Radix);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "Bogo Sort".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SortError::UnknownAlgorithm("Bogo Sort".to_string()));
        assert!("".parse::<Algorithm>().is_err());
        assert!("sort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_key_matches_name_convention() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.key(), alg.name().to_lowercase().replace(' ', "_"));
        }
    }

    #[test]
    fn test_run_dispatches() {
        for alg in Algorithm::ALL {
            let mut data = vec![5, 3, 8, 1, 2];
            let mut sink = RecordingSink::without_snapshots();
            alg.run(&mut data, &mut SortStats::new(), &mut sink).unwrap();
            assert_eq!(data, vec![1, 2, 3, 5, 8], "{alg}");
            assert!(!sink.is_empty(), "{alg} emitted nothing");
        }
    }

    #[test]
    fn test_run_empty() {
        for alg in Algorithm::ALL {
            let mut data: Vec<i64> = vec![];
            let result = alg.run(&mut data, &mut SortStats::new(), &mut NoopSink);
            assert_eq!(result.is_err(), alg.requires_non_empty(), "{alg}");
        }
    }

    #[test]
    fn test_timed_run_stamps() {
        let mut data = vec![3, 2, 1];
        let mut stats = SortStats::new();
        Algorithm::Merge
            .timed_run(&mut data, &mut stats, &mut NoopSink)
            .unwrap();
        assert!(stats.start_time.is_some());
        assert!(stats.is_finished());
    }

    #[test]
    fn test_dyn_sink() {
        let mut boxed: Box<dyn EventSink> = Box::new(RecordingSink::new());
        let mut data = vec![2, 1];
        Algorithm::Bubble
            .run(&mut data, &mut SortStats::new(), &mut *boxed)
            .unwrap();
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_info() {
        assert_eq!(Algorithm::Quick.info().worst, "O(n²)");
        assert_eq!(Algorithm::Merge.info().space, "O(n)");
        assert_eq!(Algorithm::Bubble.to_string(), "Bubble Sort");
    }
}
