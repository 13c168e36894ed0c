// Heap sort over a binary max-heap stored in the array itself

use crate::errors::SortError;
use crate::snapshot::StepSink;

/// Build a max-heap, then repeatedly move the root behind the shrinking heap.
///
/// Sift-down swaps highlight the parent and the larger child; extraction
/// swaps highlight the root and the slot it moves to.
pub fn heap_sort(mut arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    let n = arr.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut arr, n, i, sink)?;
    }

    for i in (1..n).rev() {
        arr.swap(0, i);
        sink.on_step(&arr, &[0, i])?;
        sift_down(&mut arr, i, 0, sink)?;
    }

    Ok(arr)
}

/// Restore the heap property below `root`, considering only `arr[..heap_len]`
fn sift_down(
    arr: &mut [i64],
    heap_len: usize,
    mut root: usize,
    sink: &mut dyn StepSink,
) -> Result<(), SortError> {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < heap_len && arr[largest] < arr[left] {
            largest = left;
        }
        if right < heap_len && arr[largest] < arr[right] {
            largest = right;
        }

        if largest == root {
            return Ok(());
        }

        arr.swap(root, largest);
        sink.on_step(arr, &[root, largest])?;
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotLog;

    #[test]
    fn test_heap_sort_small() {
        let mut log = SnapshotLog::new(usize::MAX);
        let sorted = heap_sort(vec![1, 3, 2], &mut log).unwrap();
        assert_eq!(sorted, vec![1, 2, 3]);

        // Heapify swaps the root with its larger child first
        let first = log.get(0).unwrap();
        assert_eq!(first.values, vec![3, 1, 2]);
        assert_eq!(first.highlighted, vec![0, 1]);

        // Then the max moves to the end
        let second = log.get(1).unwrap();
        assert_eq!(second.values, vec![2, 1, 3]);
        assert_eq!(second.highlighted, vec![0, 2]);
    }

    #[test]
    fn test_heap_sort_reverse_input() {
        let mut log = SnapshotLog::new(usize::MAX);
        let input: Vec<i64> = (0..30).rev().collect();
        let sorted = heap_sort(input, &mut log).unwrap();
        assert_eq!(sorted, (0..30).collect::<Vec<_>>());
        assert_eq!(log.last().unwrap().values, sorted);
    }
}
