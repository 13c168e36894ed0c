//! Divide-and-conquer sorts: Merge and Quick
//!
//! Both recurse explicitly. Merge Sort splits at the midpoint, so its depth is
//! O(log n). Quick Sort pivots on the last element of each range, which makes
//! its depth O(n) on already-sorted or reverse-sorted input; the arrays this
//! crate animates are small enough that this stays well within the stack.

use crate::errors::SortError;
use crate::snapshot::StepSink;

/// Top-down merge sort; one step per element written back during a merge
pub fn merge_sort(mut arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    let len = arr.len();
    merge_range(&mut arr, 0, len, sink)?;
    Ok(arr)
}

fn merge_range(
    arr: &mut [i64],
    start: usize,
    end: usize,
    sink: &mut dyn StepSink,
) -> Result<(), SortError> {
    if end - start > 1 {
        let mid = start + (end - start) / 2;
        merge_range(arr, start, mid, sink)?;
        merge_range(arr, mid, end, sink)?;
        merge(arr, start, mid, end, sink)?;
    }
    Ok(())
}

/// Merge the sorted runs `[start, mid)` and `[mid, end)` back into `arr`
fn merge(
    arr: &mut [i64],
    start: usize,
    mid: usize,
    end: usize,
    sink: &mut dyn StepSink,
) -> Result<(), SortError> {
    let left = arr[start..mid].to_vec();
    let right = arr[mid..end].to_vec();
    let (mut i, mut j) = (0, 0);

    for k in start..end {
        // Ties take from the left run, which keeps the merge stable
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        sink.on_step(arr, &[k])?;
    }
    Ok(())
}

/// Quick sort with Lomuto partitioning around the last element
pub fn quick_sort(mut arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    if let Some(high) = arr.len().checked_sub(1) {
        quick_range(&mut arr, 0, high, sink)?;
    }
    Ok(arr)
}

fn quick_range(
    arr: &mut [i64],
    low: usize,
    high: usize,
    sink: &mut dyn StepSink,
) -> Result<(), SortError> {
    if low < high {
        let pivot = partition(arr, low, high, sink)?;
        if pivot > low {
            quick_range(arr, low, pivot - 1, sink)?;
        }
        quick_range(arr, pivot + 1, high, sink)?;
    }
    Ok(())
}

/// Partition `[low, high]` around `arr[high]`, returning the pivot's final index.
///
/// Each swap during the scan highlights the boundary slot, the scanned element
/// and the pivot; the closing swap highlights the pivot's destination and origin.
fn partition(
    arr: &mut [i64],
    low: usize,
    high: usize,
    sink: &mut dyn StepSink,
) -> Result<usize, SortError> {
    let pivot = arr[high];
    // Next slot for an element <= pivot
    let mut boundary = low;

    for j in low..high {
        if arr[j] <= pivot {
            arr.swap(boundary, j);
            sink.on_step(arr, &[boundary, j, high])?;
            boundary += 1;
        }
    }

    arr.swap(boundary, high);
    sink.on_step(arr, &[boundary, high])?;
    Ok(boundary)
}
