//! O(n log n) comparison sorts: merge, quick and heap.
//!
//! All three emit plain events (no highlight) at every counted step.

use crate::event::{notify, EventSink};
use crate::stats::SortStats;

/// Top-down merge sort.
///
/// Each merge builds a fresh ordered buffer from the two sorted halves, then
/// copies it back into the sequence one element at a time, emitting after
/// every write. Merging only compares; it never counts swaps.
pub fn merge_sort<S: EventSink + ?Sized>(seq: &mut [i64], stats: &mut SortStats, sink: &mut S) {
    let len = seq.len();
    merge_range(seq, 0, len, stats, sink);
}

fn merge_range<S: EventSink + ?Sized>(
    seq: &mut [i64],
    start: usize,
    end: usize,
    stats: &mut SortStats,
    sink: &mut S,
) {
    if end - start <= 1 {
        return;
    }

    let mid = start + (end - start) / 2;
    merge_range(seq, start, mid, stats, sink);
    merge_range(seq, mid, end, stats, sink);

    let merged = merge(seq, start, mid, end, stats, sink);
    for (offset, value) in merged.into_iter().enumerate() {
        seq[start + offset] = value;
        notify(sink, seq, stats, None);
    }
}

fn merge<S: EventSink + ?Sized>(
    seq: &[i64],
    start: usize,
    mid: usize,
    end: usize,
    stats: &mut SortStats,
    sink: &mut S,
) -> Vec<i64> {
    let mut result = Vec::with_capacity(end - start);
    let (mut left, mut right) = (start, mid);

    while left < mid && right < end {
        stats.comparisons += 1;
        notify(sink, seq, stats, None);

        if seq[left] <= seq[right] {
            result.push(seq[left]);
            left += 1;
        } else {
            result.push(seq[right]);
            right += 1;
        }
    }

    result.extend_from_slice(&seq[left..mid]);
    result.extend_from_slice(&seq[right..end]);
    result
}

/// Quicksort with Lomuto partitioning around the last element.
///
/// Every partition comparison and every swap emits, including the final swap
/// that drops the pivot into place (counted even when it is a no-op).
///
/// Pending ranges live on an explicit work stack, so sorted or all-equal
/// input costs heap space rather than call-stack depth. The left range is
/// always processed before the right one.
pub fn quick_sort<S: EventSink + ?Sized>(seq: &mut [i64], stats: &mut SortStats, sink: &mut S) {
    if seq.len() < 2 {
        return;
    }

    let mut pending = vec![(0, seq.len() - 1)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }

        let pivot = partition(seq, low, high, stats, sink);
        pending.push((pivot + 1, high));
        if pivot > low {
            pending.push((low, pivot - 1));
        }
    }
}

fn partition<S: EventSink + ?Sized>(
    seq: &mut [i64],
    low: usize,
    high: usize,
    stats: &mut SortStats,
    sink: &mut S,
) -> usize {
    let pivot = seq[high];
    // Next slot for an element smaller than the pivot
    let mut store = low;

    for j in low..high {
        stats.comparisons += 1;
        notify(sink, seq, stats, None);

        if seq[j] < pivot {
            seq.swap(store, j);
            stats.swaps += 1;
            notify(sink, seq, stats, None);
            store += 1;
        }
    }

    seq.swap(store, high);
    stats.swaps += 1;
    notify(sink, seq, stats, None);
    store
}

/// Heap sort on a binary max-heap.
///
/// Builds the heap bottom-up from `n/2 - 1` down to the root, then swaps the
/// root with the last unsorted element and re-heapifies the shrunken heap.
/// The extraction swaps happen even on sorted input.
pub fn heap_sort<S: EventSink + ?Sized>(seq: &mut [i64], stats: &mut SortStats, sink: &mut S) {
    let n = seq.len();

    for i in (0..n / 2).rev() {
        heapify(seq, n, i, stats, sink);
    }

    for end in (1..n).rev() {
        seq.swap(0, end);
        stats.swaps += 1;
        notify(sink, seq, stats, None);
        heapify(seq, end, 0, stats, sink);
    }
}

fn heapify<S: EventSink + ?Sized>(
    seq: &mut [i64],
    n: usize,
    i: usize,
    stats: &mut SortStats,
    sink: &mut S,
) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n {
        stats.comparisons += 1;
        notify(sink, seq, stats, None);
        if seq[left] > seq[largest] {
            largest = left;
        }
    }

    if right < n {
        stats.comparisons += 1;
        notify(sink, seq, stats, None);
        if seq[right] > seq[largest] {
            largest = right;
        }
    }

    if largest != i {
        seq.swap(i, largest);
        stats.swaps += 1;
        notify(sink, seq, stats, None);
        heapify(seq, n, largest, stats, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{NoopSink, RecordingSink};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn is_sorted(data: &[i64]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    type SortFn = fn(&mut [i64], &mut SortStats, &mut NoopSink);

    fn check_all(sort: SortFn) {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cases: Vec<Vec<i64>> = vec![
            vec![],
            vec![42],
            vec![2, 1],
            (0..64).collect(),
            (0..64).rev().collect(),
            vec![4; 25],
            vec![0, -3, 12, -3, 7, 0, 1],
            (0..1000).map(|_| rng.gen_range(-10_000..10_000)).collect(),
        ];

        for case in cases {
            let mut expected = case.clone();
            expected.sort();
            let mut data = case.clone();
            sort(&mut data, &mut SortStats::new(), &mut NoopSink);
            assert!(is_sorted(&data));
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn test_merge_sort_cases() {
        check_all(merge_sort);
    }

    #[test]
    fn test_quick_sort_cases() {
        check_all(quick_sort);
    }

    #[test]
    fn test_heap_sort_cases() {
        check_all(heap_sort);
    }

    #[test]
    fn test_merge_sort_events() {
        let mut data = vec![4, 3, 2, 1];
        let mut stats = SortStats::new();
        let mut sink = RecordingSink::new();
        merge_sort(&mut data, &mut stats, &mut sink);

        assert_eq!(data, vec![1, 2, 3, 4]);
        assert_eq!(stats.comparisons, 4);
        assert_eq!(stats.swaps, 0);
        // 4 comparisons + 4 write-backs on each of two levels
        assert_eq!(sink.len(), 12);
        assert_eq!(sink.events().last().unwrap().sequence, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_merge_sort_snapshots_cover_whole_sequence() {
        let mut data = vec![9, 8, 7, 6, 5];
        let mut sink = RecordingSink::new();
        merge_sort(&mut data, &mut SortStats::new(), &mut sink);
        assert!(sink.events().iter().all(|e| e.sequence.len() == 5));
    }

    #[test]
    fn test_quick_sort_all_equal() {
        let mut data = vec![4, 4, 4];
        let mut stats = SortStats::new();
        quick_sort(&mut data, &mut stats, &mut NoopSink);
        assert_eq!(data, vec![4, 4, 4]);
        // partition(0,2): 2 comparisons, pivot swap; partition(1,2): 1 comparison, pivot swap
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.swaps, 2);
    }

    #[test]
    fn test_quick_sort_degenerate_partitions_at_scale() {
        // Every partition here is maximally lopsided
        let sorted: Vec<i64> = (0..20_000).collect();
        let reversed: Vec<i64> = (0..20_000).rev().collect();
        let equal = vec![7; 20_000];

        for input in [sorted, reversed, equal] {
            let mut data = input.clone();
            let mut stats = SortStats::new();
            quick_sort(&mut data, &mut stats, &mut NoopSink);
            assert!(is_sorted(&data));
            let mut expected = input;
            expected.sort();
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn test_quick_sort_left_range_first() {
        // Pivot 3 splits into [2, 1] and [4, 5]; only the left range changes
        let mut data = vec![2, 1, 5, 4, 3];
        let mut sink = RecordingSink::new();
        quick_sort(&mut data, &mut SortStats::new(), &mut sink);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);

        let snapshots: Vec<&[i64]> = sink.events().iter().map(|e| e.sequence.as_slice()).collect();
        assert_eq!(snapshots[6], &[2, 1, 3, 4, 5]);
        // Left partition: one comparison then the pivot swap
        assert_eq!(snapshots[8], &[1, 2, 3, 4, 5]);
        assert_eq!(sink.len(), 12);
    }

    #[test]
    fn test_quick_sort_event_per_step() {
        let mut data = vec![3, 1, 2];
        let mut stats = SortStats::new();
        let mut sink = RecordingSink::new();
        quick_sort(&mut data, &mut stats, &mut sink);
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(sink.len() as u64, stats.comparisons + stats.swaps);
    }

    #[test]
    fn test_heap_sort_swaps_on_sorted_input() {
        let mut data: Vec<i64> = (0..10).collect();
        let mut stats = SortStats::new();
        heap_sort(&mut data, &mut stats, &mut NoopSink);
        assert_eq!(data, (0..10).collect::<Vec<i64>>());
        // at least one extraction swap per element after the root
        assert!(stats.swaps >= 9);
    }

    #[test]
    fn test_heap_sort_event_per_step() {
        let mut data = vec![5, 1, 4, 2, 3];
        let mut stats = SortStats::new();
        let mut sink = RecordingSink::new();
        heap_sort(&mut data, &mut stats, &mut sink);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
        assert_eq!(sink.len() as u64, stats.comparisons + stats.swaps);
    }
}
