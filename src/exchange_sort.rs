//! Quadratic comparison sorts: bubble, selection and insertion.
//!
//! Bubble sort is the only algorithm that annotates its events with
//! highlights; selection and insertion emit plain events.
//!
//! Complexity: O(n²) comparisons on average for all three.

use crate::event::{notify, EventSink, Highlight};
use crate::stats::SortStats;

/// Bubble sort with early exit.
///
/// Emits `Comparing(j, j+1)` at every comparison, `Swapping(j, j+1)` after
/// every swap, `Sorted(n..len)` after each pass (the settled tail grows by
/// one) and finally `Sorted(0..len)`. Passes repeat until one performs no
/// swaps.
pub fn bubble_sort<S: EventSink + ?Sized>(seq: &mut [i64], stats: &mut SortStats, sink: &mut S) {
    let len = seq.len();
    let mut n = len;
    let mut swapped = true;

    while swapped {
        swapped = false;
        for j in 0..n.saturating_sub(1) {
            stats.comparisons += 1;
            notify(sink, seq, stats, Some(&Highlight::Comparing(j, j + 1)));

            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
                stats.swaps += 1;
                notify(sink, seq, stats, Some(&Highlight::Swapping(j, j + 1)));
                swapped = true;
            }
        }

        n = n.saturating_sub(1);
        let settled = Highlight::Sorted((n..len).collect());
        notify(sink, seq, stats, Some(&settled));
    }

    let all = Highlight::Sorted((0..len).collect());
    notify(sink, seq, stats, Some(&all));
}

/// Selection sort.
///
/// Scans the unsorted suffix for its minimum, emitting once per comparison,
/// and swaps it into place (emitting again) only when it is not already there.
pub fn selection_sort<S: EventSink + ?Sized>(
    seq: &mut [i64],
    stats: &mut SortStats,
    sink: &mut S,
) {
    let n = seq.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            stats.comparisons += 1;
            notify(sink, seq, stats, None);

            if seq[j] < seq[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            seq.swap(i, min_idx);
            stats.swaps += 1;
            notify(sink, seq, stats, None);
        }
    }
}

/// Insertion sort.
///
/// Each element costs one comparison up front plus one per predecessor it is
/// shifted past; every shift also counts as a swap. Emits after the initial
/// comparison, after each shift and once the element is dropped into place.
pub fn insertion_sort<S: EventSink + ?Sized>(
    seq: &mut [i64],
    stats: &mut SortStats,
    sink: &mut S,
) {
    for i in 1..seq.len() {
        let key = seq[i];
        let mut hole = i;

        stats.comparisons += 1;
        notify(sink, seq, stats, None);

        while hole > 0 && seq[hole - 1] > key {
            seq[hole] = seq[hole - 1];
            hole -= 1;
            stats.swaps += 1;
            stats.comparisons += 1;
            notify(sink, seq, stats, None);
        }

        seq[hole] = key;
        notify(sink, seq, stats, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{NoopSink, RecordingSink};
    use rand::Rng;

    fn is_sorted(data: &[i64]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    type SortFn = fn(&mut [i64], &mut SortStats, &mut NoopSink);

    fn check_all(sort: SortFn) {
        let mut rng = rand::thread_rng();
        let cases: Vec<Vec<i64>> = vec![
            vec![],
            vec![42],
            vec![2, 1],
            (0..50).collect(),
            (0..50).rev().collect(),
            vec![7; 30],
            vec![-5, 3, -1, 0, 9, -5],
            (0..300).map(|_| rng.gen_range(-1000..1000)).collect(),
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
    fn test_bubble_sort_cases() {
        check_all(bubble_sort);
    }

    #[test]
    fn test_selection_sort_cases() {
        check_all(selection_sort);
    }

    #[test]
    fn test_insertion_sort_cases() {
        check_all(insertion_sort);
    }

    #[test]
    fn test_bubble_sort_highlights() {
        let mut data = vec![5, 3, 8, 1, 2];
        let mut stats = SortStats::new();
        let mut sink = RecordingSink::new();
        bubble_sort(&mut data, &mut stats, &mut sink);

        assert_eq!(data, vec![1, 2, 3, 5, 8]);
        assert!(sink
            .highlights()
            .any(|h| matches!(h, Highlight::Swapping(..))));

        let last = sink.events().last().unwrap();
        assert_eq!(last.highlight, Some(Highlight::Sorted(vec![0, 1, 2, 3, 4])));
        assert_eq!(last.sequence, vec![1, 2, 3, 5, 8]);

        // First pass settles index 4
        let first_sorted = sink
            .highlights()
            .find(|h| matches!(h, Highlight::Sorted(_)))
            .unwrap();
        assert_eq!(first_sorted, &Highlight::Sorted(vec![4]));
    }

    #[test]
    fn test_bubble_sort_swap_follows_comparison() {
        let mut data = vec![2, 1];
        let mut sink = RecordingSink::new();
        bubble_sort(&mut data, &mut SortStats::new(), &mut sink);

        let kinds: Vec<&str> = sink.highlights().map(|h| h.kind()).collect();
        // pass 1: compare, swap, settle; pass 2 has no pairs left: settle; final
        assert_eq!(
            kinds,
            vec!["comparing", "swapping", "sorted", "sorted", "sorted"]
        );
        assert_eq!(sink.events()[1].sequence, vec![1, 2]);
    }

    #[test]
    fn test_bubble_sort_sorted_input_single_pass() {
        let mut data: Vec<i64> = (0..10).collect();
        let mut stats = SortStats::new();
        bubble_sort(&mut data, &mut stats, &mut NoopSink);
        assert_eq!(stats.comparisons, 9);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_bubble_sort_empty_emits_final_sorted() {
        let mut data: Vec<i64> = vec![];
        let mut sink = RecordingSink::new();
        bubble_sort(&mut data, &mut SortStats::new(), &mut sink);
        assert_eq!(
            sink.events().last().unwrap().highlight,
            Some(Highlight::Sorted(vec![]))
        );
    }

    #[test]
    fn test_selection_sort_counts() {
        let mut data = vec![3, 1, 2];
        let mut stats = SortStats::new();
        let mut sink = RecordingSink::new();
        selection_sort(&mut data, &mut stats, &mut sink);

        assert_eq!(data, vec![1, 2, 3]);
        // n(n-1)/2 comparisons regardless of order
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.swaps, 2);
        assert_eq!(sink.len(), 5);
        assert!(sink.highlights().next().is_none());
    }

    #[test]
    fn test_selection_sort_no_swap_when_in_place() {
        let mut data: Vec<i64> = (0..20).collect();
        let mut stats = SortStats::new();
        selection_sort(&mut data, &mut stats, &mut NoopSink);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.comparisons, 190);
    }

    #[test]
    fn test_insertion_sort_counts() {
        let mut data = vec![3, 2, 1];
        let mut stats = SortStats::new();
        let mut sink = RecordingSink::new();
        insertion_sort(&mut data, &mut stats, &mut sink);

        assert_eq!(data, vec![1, 2, 3]);
        // i=1: 1 + 1 shift, i=2: 1 + 2 shifts
        assert_eq!(stats.swaps, 3);
        assert_eq!(stats.comparisons, 5);
        // per element: initial + shifts + placement
        assert_eq!(sink.len(), 2 + 3 + 2);
    }

    #[test]
    fn test_insertion_sort_sorted_input() {
        let mut data: Vec<i64> = (0..100).collect();
        let mut stats = SortStats::new();
        insertion_sort(&mut data, &mut stats, &mut NoopSink);
        assert_eq!(stats.comparisons, 99);
        assert_eq!(stats.swaps, 0);
    }
}
