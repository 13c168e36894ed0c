// Random array generation

use crate::constants::{VALUE_MAX, VALUE_MIN};
use crate::errors::SortError;
use rand::Rng;

/// Produce `size` independent values drawn uniformly from `[1, 100)`
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Vec<i64>, SortError> {
    if size == 0 {
        return Err(SortError::invalid_input("array size must be positive"));
    }

    Ok((0..size)
        .map(|_| rng.gen_range(VALUE_MIN..VALUE_MAX))
        .collect())
}
