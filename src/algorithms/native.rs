// Reference sort backed by the standard library

use crate::errors::SortError;
use crate::snapshot::StepSink;

/// Sort with `slice::sort` (stable, run-adaptive) and report a single step
pub fn tim_sort(mut arr: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
    arr.sort();
    sink.on_step(&arr, &[])?;
    Ok(arr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotLog;

    #[test]
    fn test_single_step() {
        let mut log = SnapshotLog::new(usize::MAX);
        let sorted = tim_sort(vec![3, -7, 3, 0], &mut log).unwrap();
        assert_eq!(sorted, vec![-7, 0, 3, 3]);
        assert_eq!(log.len(), 1);
        assert_eq!(log.get(0).unwrap().values, sorted);
    }
}
