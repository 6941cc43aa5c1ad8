//! Non-comparison sorts: counting, radix (base 10) and bucket.
//!
//! All three compute the minimum and/or maximum of the input first, so they
//! reject an empty sequence with [`SortError::EmptyInput`] instead of
//! treating it as trivially sorted.
//!
//! Counting and radix sort never compare elements; their `swaps` counter
//! tracks placements into the output buffer.

use crate::error::{Result, SortError};
use crate::event::{notify, EventSink};
use crate::stats::SortStats;

/// Largest value range (max - min + 1) counting sort will allocate for
pub const COUNTING_RANGE_LIMIT: u128 = 1 << 24;

/// Number of buckets per radix pass
const RADIX: usize = 10;

fn bounds(seq: &[i64], algorithm: &'static str) -> Result<(i64, i64)> {
    let min = seq.iter().copied().min();
    let max = seq.iter().copied().max();
    match (min, max) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(SortError::EmptyInput { algorithm }),
    }
}

/// Distance of `value` above `base`; always fits since `base <= value`.
#[inline]
fn offset(value: i64, base: i64) -> u64 {
    (value as i128 - base as i128) as u64
}

/// Stable counting sort over the value range `min..=max`.
///
/// Emits once per element while counting, once per right-to-left placement
/// into the output buffer (each counted as a swap), and once per element
/// copied back.
pub fn counting_sort<S: EventSink + ?Sized>(
    seq: &mut [i64],
    stats: &mut SortStats,
    sink: &mut S,
) -> Result<()> {
    let (min, max) = bounds(seq, "Counting Sort")?;
    let range = offset(max, min) as u128 + 1;
    if range > COUNTING_RANGE_LIMIT {
        return Err(SortError::ValueRangeTooLarge {
            range,
            limit: COUNTING_RANGE_LIMIT,
        });
    }

    let n = seq.len();
    let mut count = vec![0usize; range as usize];
    let mut output = vec![0i64; n];

    for i in 0..n {
        count[offset(seq[i], min) as usize] += 1;
        notify(sink, seq, stats, None);
    }

    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    for i in (0..n).rev() {
        let slot = offset(seq[i], min) as usize;
        count[slot] -= 1;
        output[count[slot]] = seq[i];
        stats.swaps += 1;
        notify(sink, seq, stats, None);
    }

    for i in 0..n {
        seq[i] = output[i];
        notify(sink, seq, stats, None);
    }

    Ok(())
}

/// LSD radix sort in base 10.
///
/// Runs one stable counting pass per decimal digit of the maximum, stopping
/// once `max / exp` reaches zero. Each pass emits per element counted, per
/// element placed (counted as a swap) and per element copied back.
///
/// Negative values are handled by sorting on their distance above the
/// minimum; non-negative input is digit-split as-is.
pub fn radix_sort<S: EventSink + ?Sized>(
    seq: &mut [i64],
    stats: &mut SortStats,
    sink: &mut S,
) -> Result<()> {
    let (min, max) = bounds(seq, "Radix Sort")?;
    let base = min.min(0);
    let max_key = offset(max, base);

    let mut output = vec![0i64; seq.len()];
    let mut exp: u64 = 1;
    while max_key / exp > 0 {
        radix_pass(seq, &mut output, base, exp, stats, sink);
        exp = match exp.checked_mul(RADIX as u64) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(())
}

fn radix_pass<S: EventSink + ?Sized>(
    seq: &mut [i64],
    output: &mut [i64],
    base: i64,
    exp: u64,
    stats: &mut SortStats,
    sink: &mut S,
) {
    let digit = |value: i64| ((offset(value, base) / exp) % RADIX as u64) as usize;
    let n = seq.len();
    let mut count = [0usize; RADIX];

    for i in 0..n {
        count[digit(seq[i])] += 1;
        notify(sink, seq, stats, None);
    }

    for d in 1..RADIX {
        count[d] += count[d - 1];
    }

    for i in (0..n).rev() {
        let d = digit(seq[i]);
        count[d] -= 1;
        output[count[d]] = seq[i];
        stats.swaps += 1;
        notify(sink, seq, stats, None);
    }

    for i in 0..n {
        seq[i] = output[i];
        notify(sink, seq, stats, None);
    }
}

/// Bucket sort with one bucket per element.
///
/// Bucket width is `(max - min) / n`; an element goes to bucket
/// `floor((v - min) * n / (max - min))`, clamped to the last bucket. When all
/// values are equal everything lands in bucket 0. Each bucket is
/// insertion-sorted, with every shift counted as one comparison and one swap,
/// then the buckets are concatenated back in order.
pub fn bucket_sort<S: EventSink + ?Sized>(
    seq: &mut [i64],
    stats: &mut SortStats,
    sink: &mut S,
) -> Result<()> {
    let (min, max) = bounds(seq, "Bucket Sort")?;
    let n = seq.len();
    let range = offset(max, min) as i128;
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); n];

    for i in 0..n {
        let index = if range == 0 {
            0
        } else {
            let scaled = offset(seq[i], min) as i128 * n as i128 / range;
            scaled.min(n as i128 - 1) as usize
        };
        buckets[index].push(seq[i]);
        notify(sink, seq, stats, None);
    }

    for bucket in buckets.iter_mut() {
        for j in 1..bucket.len() {
            let key = bucket[j];
            let mut k = j;
            while k > 0 && bucket[k - 1] > key {
                bucket[k] = bucket[k - 1];
                k -= 1;
                stats.comparisons += 1;
                stats.swaps += 1;
                notify(sink, seq, stats, None);
            }
            bucket[k] = key;
        }
    }

    let mut index = 0;
    for bucket in &buckets {
        for &item in bucket {
            seq[index] = item;
            index += 1;
            notify(sink, seq, stats, None);
        }
    }

    Ok(())
}
