//! Quadratic exchange and insertion sorts: Bubble, Selection, Insertion, Shell

use crate::errors::SortError;
use crate::snapshot::StepSink;

/// Adjacent compare-and-swap passes; one step per swap, highlighting `j, j+1`
pub fn bubble_sort(mut arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    let n = arr.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                sink.on_step(&arr, &[j, j + 1])?;
            }
        }
    }
    Ok(arr)
}

/// Swap the minimum of the unsorted suffix into place; one step per outer
/// iteration, even when the minimum is already in position
pub fn selection_sort(mut arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    let n = arr.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        arr.swap(i, min_idx);
        sink.on_step(&arr, &[i, min_idx])?;
    }
    Ok(arr)
}

/// Shift larger elements right, then drop the key into the gap.
///
/// Emits once per shift (the vacated slot and the key's origin) and once per
/// placement (the slot the key lands in).
pub fn insertion_sort(mut arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    for i in 1..arr.len() {
        let key = arr[i];
        // `slot` is the hole the key will fill
        let mut slot = i;
        while slot > 0 && arr[slot - 1] > key {
            arr[slot] = arr[slot - 1];
            slot -= 1;
            sink.on_step(&arr, &[slot, i])?;
        }
        arr[slot] = key;
        sink.on_step(&arr, &[slot])?;
    }
    Ok(arr)
}

/// Insertion sort over gaps n/2, n/4, ..., 1.
///
/// Every shifted element emits a step highlighting the slot it was written
/// to; a key that moved emits once more when it is dropped into place, so the
/// last step always shows the finished array.
pub fn shell_sort(mut arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    let n = arr.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let key = arr[i];
            let mut j = i;
            while j >= gap && arr[j - gap] > key {
                arr[j] = arr[j - gap];
                sink.on_step(&arr, &[j])?;
                j -= gap;
            }
            if j != i {
                arr[j] = key;
                sink.on_step(&arr, &[j])?;
            }
        }
        gap /= 2;
    }
    Ok(arr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotLog;

    fn record(
        sort: fn(Vec<i64>, &mut dyn StepSink) -> Result<Vec<i64>, SortError>,
        input: &[i64],
    ) -> (Vec<i64>, SnapshotLog) {
        let mut log = SnapshotLog::new(usize::MAX);
        let sorted = sort(input.to_vec(), &mut log).unwrap();
        (sorted, log)
    }

    #[test]
    fn test_bubble_steps_follow_swaps() {
        let (sorted, log) = record(bubble_sort, &[5, 3, 8, 1]);
        assert_eq!(sorted, vec![1, 3, 5, 8]);

        let steps: Vec<_> = log
            .iter()
            .map(|s| (s.values.clone(), s.highlighted.clone()))
            .collect();
        assert_eq!(
            steps,
            vec![
                (vec![3, 5, 8, 1], vec![0, 1]),
                (vec![3, 5, 1, 8], vec![2, 3]),
                (vec![3, 1, 5, 8], vec![1, 2]),
                (vec![1, 3, 5, 8], vec![0, 1]),
            ]
        );
    }

    #[test]
    fn test_bubble_on_sorted_input_is_silent() {
        let (sorted, log) = record(bubble_sort, &[1, 2, 3, 4]);
        assert_eq!(sorted, vec![1, 2, 3, 4]);
        assert!(log.is_empty());
    }

    #[test]
    fn test_selection_emits_once_per_position() {
        let (sorted, log) = record(selection_sort, &[2, 1, 3]);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.get(0).unwrap().highlighted, vec![0, 1]);
        // Already in place: the index is reported twice
        assert_eq!(log.get(2).unwrap().highlighted, vec![2, 2]);
    }

    #[test]
    fn test_insertion_shift_then_place() {
        let (sorted, log) = record(insertion_sort, &[3, 1, 2]);
        assert_eq!(sorted, vec![1, 2, 3]);

        let first = log.get(0).unwrap();
        assert_eq!(first.values, vec![3, 3, 2]);
        assert_eq!(first.highlighted, vec![0, 1]);

        let second = log.get(1).unwrap();
        assert_eq!(second.values, vec![1, 3, 2]);
        assert_eq!(second.highlighted, vec![0]);

        assert_eq!(log.last().unwrap().values, vec![1, 2, 3]);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn test_shell_final_step_is_sorted() {
        let (sorted, log) = record(shell_sort, &[9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(sorted, (1..=9).collect::<Vec<_>>());
        assert_eq!(log.last().unwrap().values, sorted);
        assert!(log.iter().all(|s| s.highlighted.len() == 1));
    }

    #[test]
    fn test_shell_on_sorted_input_is_silent() {
        let (_, log) = record(shell_sort, &[1, 1, 2, 3, 5, 8]);
        assert!(log.is_empty());
    }
}
