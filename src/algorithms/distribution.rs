//! Distribution sorts: Counting, Radix (LSD) and Bucket.
//!
//! These index by value, so they only accept non-negative input;
//! [`Algorithm::validate`](super::Algorithm::validate) rejects anything else
//! before the first step. None of their steps carry highlights: Counting and
//! Radix report the output buffer as it fills, Bucket reports the untouched
//! input after each bucket is sorted and then the concatenated result.

use crate::algorithms::Algorithm;
use crate::constants::{BUCKET_DIVISOR, COUNTING_KEY_LIMIT, RADIX_BASE};
use crate::errors::SortError;
use crate::snapshot::StepSink;

/// Reject inputs whose count table would be unreasonably large
pub fn check_counting_range(values: &[i64]) -> Result<(), SortError> {
    match values.iter().copied().max() {
        Some(max) if max > COUNTING_KEY_LIMIT => Err(SortError::UnsupportedValueDomain {
            algorithm: Algorithm::Counting,
            value: max,
            reason: "value exceeds the counting table limit",
        }),
        _ => Ok(()),
    }
}

/// Stable counting sort keyed on the value itself
pub fn counting_sort(arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    let max = arr.iter().copied().max().unwrap_or(0);
    let mut counts = vec![0usize; max as usize + 1];
    for &value in &arr {
        counts[value as usize] += 1;
    }
    for k in 1..counts.len() {
        counts[k] += counts[k - 1];
    }

    let mut output = vec![0i64; arr.len()];
    for &value in arr.iter().rev() {
        let slot = &mut counts[value as usize];
        *slot -= 1;
        output[*slot] = value;
        sink.on_step(&output, &[])?;
    }

    Ok(output)
}

/// Least-significant-digit radix sort in base 10.
///
/// Each pass is a stable counting sort on one digit; passes stop once the
/// exponent exceeds the largest value.
pub fn radix_sort(mut arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    let max = arr.iter().copied().max().unwrap_or(0);
    let mut exp: i64 = 1;

    while max / exp > 0 {
        arr = digit_pass(&arr, exp, sink)?;
        exp = match exp.checked_mul(RADIX_BASE) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(arr)
}

fn digit_pass(arr: &[i64], exp: i64, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    let digit = |value: i64| ((value / exp) % RADIX_BASE) as usize;

    let mut counts = [0usize; RADIX_BASE as usize];
    for &value in arr {
        counts[digit(value)] += 1;
    }
    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    let mut output = vec![0i64; arr.len()];
    for &value in arr.iter().rev() {
        let slot = &mut counts[digit(value)];
        *slot -= 1;
        output[*slot] = value;
        sink.on_step(&output, &[])?;
    }

    Ok(output)
}

/// Number of buckets for `len` elements; never zero
pub fn bucket_count(len: usize) -> usize {
    (len / BUCKET_DIVISOR).max(1)
}

/// Scatter into buckets by value range, insertion-sort each bucket, gather.
///
/// One step per bucket once it is sorted (showing the array as it was before
/// gathering), then one final step with the gathered result.
pub fn bucket_sort(mut arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    let max = arr.iter().copied().max().unwrap_or(0);
    let count = bucket_count(arr.len());
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); count];

    for &value in &arr {
        buckets[bucket_index(value, max, count)].push(value);
    }

    for bucket in &mut buckets {
        insertion_sort_quiet(bucket);
        sink.on_step(&arr, &[])?;
    }

    arr.clear();
    for bucket in buckets {
        arr.extend(bucket);
    }
    sink.on_step(&arr, &[])?;

    Ok(arr)
}

/// Bucket for `value` in `[0, max]`; widened so `value * count` cannot overflow
fn bucket_index(value: i64, max: i64, count: usize) -> usize {
    let index = (value as i128 * count as i128) / (max as i128 + 1);
    index as usize
}

fn insertion_sort_quiet(bucket: &mut [i64]) {
    for i in 1..bucket.len() {
        let key = bucket[i];
        let mut slot = i;
        while slot > 0 && bucket[slot - 1] > key {
            bucket[slot] = bucket[slot - 1];
            slot -= 1;
        }
        bucket[slot] = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotLog;

    #[test]
    fn test_counting_sort_places_from_the_end() {
        let mut log = SnapshotLog::new(usize::MAX);
        let sorted = counting_sort(vec![4, 2, 2, 8, 3, 3, 1], &mut log).unwrap();
        assert_eq!(sorted, vec![1, 2, 2, 3, 3, 4, 8]);
        assert_eq!(log.len(), 7);

        // The last input element (1) is placed first, into slot 0
        assert_eq!(log.get(0).unwrap().values, vec![1, 0, 0, 0, 0, 0, 0]);
        assert!(log.iter().all(|s| s.highlighted.is_empty()));
        assert_eq!(log.last().unwrap().values, sorted);
    }

    #[test]
    fn test_counting_range_limit() {
        assert!(check_counting_range(&[1, 2, COUNTING_KEY_LIMIT]).is_ok());
        assert!(matches!(
            check_counting_range(&[COUNTING_KEY_LIMIT + 1]),
            Err(SortError::UnsupportedValueDomain { .. })
        ));
    }

    #[test]
    fn test_radix_sort_passes() {
        let mut log = SnapshotLog::new(usize::MAX);
        let input = vec![170, 45, 75, 90, 802, 24, 2, 66];
        let sorted = radix_sort(input.clone(), &mut log).unwrap();
        assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
        // Three digit passes, one step per element each
        assert_eq!(log.len(), 3 * input.len());
    }

    #[test]
    fn test_radix_sort_all_zero_is_silent() {
        let mut log = SnapshotLog::new(usize::MAX);
        let sorted = radix_sort(vec![0, 0, 0], &mut log).unwrap();
        assert_eq!(sorted, vec![0, 0, 0]);
        assert!(log.is_empty());
    }

    #[test]
    fn test_radix_sort_handles_large_values() {
        let mut log = SnapshotLog::new(usize::MAX);
        let sorted = radix_sort(vec![i64::MAX, 0, 7], &mut log).unwrap();
        assert_eq!(sorted, vec![0, 7, i64::MAX]);
    }

    #[test]
    fn test_bucket_count_never_zero() {
        assert_eq!(bucket_count(0), 1);
        assert_eq!(bucket_count(3), 1);
        assert_eq!(bucket_count(5), 1);
        assert_eq!(bucket_count(12), 2);
        assert_eq!(bucket_count(50), 10);
    }

    #[test]
    fn test_bucket_sort_small_input_uses_one_bucket() {
        let mut log = SnapshotLog::new(usize::MAX);
        let sorted = bucket_sort(vec![3, 1, 2], &mut log).unwrap();
        assert_eq!(sorted, vec![1, 2, 3]);
        // One bucket step showing the untouched input, then the gathered result
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(0).unwrap().values, vec![3, 1, 2]);
        assert_eq!(log.get(1).unwrap().values, vec![1, 2, 3]);
    }

    #[test]
    fn test_bucket_sort_many_buckets() {
        let mut log = SnapshotLog::new(usize::MAX);
        let input = vec![29, 25, 3, 49, 9, 37, 21, 43, 0, 99];
        let sorted = bucket_sort(input.clone(), &mut log).unwrap();
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(sorted, expected);
        assert_eq!(log.len(), bucket_count(input.len()) + 1);
        assert_eq!(log.get(0).unwrap().values, input);
    }

    #[test]
    fn test_bucket_index_at_extremes() {
        assert_eq!(bucket_index(0, 99, 10), 0);
        assert_eq!(bucket_index(99, 99, 10), 9);
        assert_eq!(bucket_index(i64::MAX, i64::MAX, 10), 9);
    }
}
