//! Instrumented Sorting Engine
//!
//! Nine classical sorting algorithms that report every comparison, swap and
//! placement through an injected [`EventSink`], so a consumer can animate,
//! throttle or aggregate a run without the algorithms knowing how events are
//! displayed:
//! - **Exchange sorts**: bubble, selection, insertion (O(n²))
//! - **Divide and conquer**: merge, quick, heap (O(n log n))
//! - **Distribution sorts**: counting, radix, bucket (linear in n plus range)
//!
//! # Example
//!
//! ```
//! use sorting_simulator::{Algorithm, RecordingSink, SortStats};
//!
//! let mut data = vec![5, 3, 8, 1, 2];
//! let mut stats = SortStats::new();
//! let mut sink = RecordingSink::new();
//! Algorithm::Bubble.run(&mut data, &mut stats, &mut sink).unwrap();
//!
//! assert_eq!(data, vec![1, 2, 3, 5, 8]);
//! assert!(stats.comparisons > 0);
//! assert!(!sink.is_empty());
//! ```
//!
//! Events are delivered synchronously: the algorithm waits for `emit` to
//! return, which is how [`PacedSink`] slows a run down for display.

pub mod algorithm;
pub mod comparison;
pub mod distribution_sort;
pub mod divide_sort;
pub mod error;
pub mod event;
pub mod exchange_sort;
pub mod input;
pub mod lino_report;
pub mod stats;

pub use algorithm::{Algorithm, AlgorithmInfo};
pub use comparison::{run_comparison, ComparisonConfig, ComparisonReport, TrialResult};
pub use error::{Result, SortError};
pub use event::{
    Event, EventSink, Highlight, NoopSink, PacedSink, PauseHandle, RecordedEvent, RecordingSink,
    SamplingSink,
};
pub use stats::SortStats;

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
