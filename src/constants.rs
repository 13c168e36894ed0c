// Constants for the sorting engine

/// Smallest value produced by the generator (inclusive)
pub const VALUE_MIN: i64 = 1;

/// Upper bound of generated values (exclusive)
pub const VALUE_MAX: i64 = 100;

/// Default array size bounds offered to the user
pub const DEFAULT_MIN_SIZE: usize = 5;
pub const DEFAULT_MAX_SIZE: usize = 50;

/// Default array size on first load
pub const DEFAULT_ARRAY_SIZE: usize = 20;

/// Default pause between replayed events, in milliseconds
pub const DEFAULT_STEP_DELAY_MS: u64 = 100;

/// Range the replay pause may be set to, in milliseconds
pub const MIN_STEP_DELAY_MS: u64 = 10;
pub const MAX_STEP_DELAY_MS: u64 = 2000;

/// Default memory budget for a recorded run (64 MiB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 64 * 1024 * 1024;

/// Largest key Counting Sort will allocate a count table for
pub const COUNTING_KEY_LIMIT: i64 = 1_000_000;

/// Elements per bucket targeted by Bucket Sort (bucket count is n / 5, at least 1)
pub const BUCKET_DIVISOR: usize = 5;

/// Digit base for LSD Radix Sort
pub const RADIX_BASE: i64 = 10;
