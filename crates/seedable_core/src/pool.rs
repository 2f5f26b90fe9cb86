//! Bounded-retry pool generation.
//!
//! The pool keeps calling a factory until it has collected the requested
//! number of values. With `unique` set, a value already in the pool is
//! rejected. Every factory call bumps a counter and every acceptance resets
//! it; once the counter exceeds [`ITERATION_CAP`] generation stops and the
//! partial pool is returned with a warning.

use std::convert::Infallible;

use tracing::warn;

/// Consecutive rejections tolerated before the pool gives up.
pub const ITERATION_CAP: usize = 100;

/// Collect up to `length` values from `factory`.
///
/// The result is shorter than `length` only when `unique` is set and the
/// factory failed to produce a new value more than [`ITERATION_CAP`] times in
/// a row. That outcome is not an error.
pub fn unique_pool<T, F>(mut factory: F, length: usize, unique: bool) -> Vec<T>
where
    T: PartialEq,
    F: FnMut() -> T,
{
    match try_unique_pool(|| Ok::<T, Infallible>(factory()), length, unique) {
        Ok(pool) => pool,
        Err(never) => match never {},
    }
}

/// Fallible form of [`unique_pool`]: the first factory error ends generation
/// and is returned as is, with no further calls and no cap warning.
pub fn try_unique_pool<T, E, F>(
    mut factory: F,
    length: usize,
    unique: bool,
) -> Result<Vec<T>, E>
where
    T: PartialEq,
    F: FnMut() -> Result<T, E>,
{
    // Grows with accepted values only; `length` may be far larger than what
    // the factory can ever produce.
    let mut pool = Vec::new();
    let mut attempts = 0usize;
    while pool.len() < length {
        let value = factory()?;
        attempts += 1;
        if !unique || !pool.contains(&value) {
            pool.push(value);
            attempts = 0;
        }
        if attempts > ITERATION_CAP {
            warn!(
                generated = pool.len(),
                requested = length,
                "pool generation iteration cap reached"
            );
            break;
        }
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_factory_stops_after_cap() {
        let mut calls = 0;
        let pool = unique_pool(
            || {
                calls += 1;
                1
            },
            5,
            true,
        );
        assert_eq!(pool, vec![1]);
        // One acceptance, then rejections until the counter passes the cap.
        assert_eq!(calls, ITERATION_CAP + 2);
    }

    #[test]
    fn duplicates_allowed_when_not_unique() {
        let pool = unique_pool(|| 7, 4, false);
        assert_eq!(pool, vec![7, 7, 7, 7]);
    }

    #[test]
    fn acceptance_resets_the_counter() {
        // 90 duplicates between each new value never trips the cap.
        let mut calls = 0u32;
        let pool = unique_pool(
            || {
                calls += 1;
                calls / 91
            },
            3,
            true,
        );
        assert_eq!(pool, vec![0, 1, 2]);
    }

    #[test]
    fn exactly_cap_rejections_keep_going() {
        // Call 1 yields 0, calls 2..=101 repeat it, call 102 yields 1.
        let mut calls = 0usize;
        let pool = unique_pool(
            || {
                calls += 1;
                usize::from(calls > ITERATION_CAP + 1)
            },
            2,
            true,
        );
        assert_eq!(pool, vec![0, 1]);
        assert_eq!(calls, ITERATION_CAP + 2);
    }

    #[test]
    fn zero_length_never_calls_factory() {
        let pool = unique_pool(|| -> u8 { panic!("factory called") }, 0, true);
        assert!(pool.is_empty());
    }

    #[test]
    fn first_error_stops_generation() {
        let mut calls = 0;
        let result: Result<Vec<u8>, &str> = try_unique_pool(
            || {
                calls += 1;
                if calls == 3 {
                    Err("broken")
                } else {
                    Ok(calls)
                }
            },
            10,
            true,
        );
        assert_eq!(result, Err("broken"));
        assert_eq!(calls, 3);
    }
}
