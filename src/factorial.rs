//! The recursive factorial, and the two ways of memoizing it.
//!
//! `compute_memoized` (generated by `#[memoize]`) only remembers the outermost request: asking for
//! `5` stores `5` and nothing else. `compute_memoized_recursive` consults and fills the cache at
//! every depth of the recursion, so asking for `5` stores `0..=5` and a later request for `7` only
//! needs two more multiplications.

use std::any::type_name;
use std::convert::TryFrom;

use log::trace;
use num_traits::{NumCast, PrimInt};

use crate::{memoize, Error, MemoStore, Result};

/// Largest `n` for which `n!` is representable in `T`.
///
/// ```
/// assert_eq!(bigoh::largest_input::<u32>(), 12);
/// assert_eq!(bigoh::largest_input::<u64>(), 20);
/// ```
pub fn largest_input<T: PrimInt>() -> i64 {
    let mut acc = T::one();
    let mut n = 0i64;
    loop {
        let next = match <T as NumCast>::from(n + 1) {
            Some(next) => next,
            None => return n,
        };
        match acc.checked_mul(&next) {
            Some(product) => {
                acc = product;
                n += 1;
            }
            None => return n,
        }
    }
}

fn overflow<T>(n: i64) -> Error {
    Error::Overflow {
        n,
        ty: type_name::<T>(),
    }
}

// Rejects inputs before any recursion happens, which also bounds the recursion depth.
fn check_input<T: PrimInt>(n: i64) -> Result<()> {
    if n < 0 {
        return Err(Error::InvalidArgument(n));
    }
    if n > largest_input::<T>() {
        return Err(overflow::<T>(n));
    }
    Ok(())
}

fn recurse<T: PrimInt>(n: i64) -> Option<T> {
    if n == 0 {
        return Some(T::one());
    }
    <T as NumCast>::from(n)?.checked_mul(&recurse(n - 1)?)
}

/// `n!` in any primitive integer type, computed as `n * (n-1)!`.
///
/// Fails with [`Error::InvalidArgument`] for negative `n` and with [`Error::Overflow`] when the
/// result does not fit in `T`. Never wraps.
pub fn compute_as<T: PrimInt>(n: i64) -> Result<T> {
    check_input::<T>(n)?;
    recurse(n).ok_or_else(|| overflow::<T>(n))
}

/// `n!` as a `u64`. Inputs up to 20 fit.
///
/// `#[memoize]` generates the outermost-only memoizing wrapper `compute_memoized(n, cache)`.
#[memoize(Fallible)]
pub fn compute(n: i64) -> Result<u64> {
    compute_as(n)
}

/// Like `compute_memoized`, but every intermediate factorial is looked up in and written to
/// `cache`.
pub fn compute_memoized_recursive<C>(n: i64, cache: &mut C) -> Result<u64>
where
    C: MemoStore<i64, u64>,
{
    check_input::<u64>(n)?;
    fill(n, cache).ok_or_else(|| overflow::<u64>(n))
}

fn fill<C>(n: i64, cache: &mut C) -> Option<u64>
where
    C: MemoStore<i64, u64>,
{
    if let Some(value) = cache.lookup(&n) {
        return Some(value);
    }
    let value = if n == 0 {
        1
    } else {
        u64::try_from(n).ok()?.checked_mul(fill(n - 1, cache)?)?
    };
    trace!("{}! = {} stored", n, value);
    cache.store(n, value);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FactorialCache;
    use std::collections::BTreeMap;

    const TABLE: [u64; 13] = [
        1, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880, 3628800, 39916800, 479001600,
    ];

    #[test]
    fn table() {
        for (n, expected) in TABLE.iter().enumerate() {
            assert_eq!(compute(n as i64), Ok(*expected));
            assert_eq!(compute_as::<u32>(n as i64), Ok(*expected as u32));
        }
        assert_eq!(compute(20), Ok(2432902008176640000));
    }

    #[test]
    fn negative_input() {
        assert_eq!(compute(-1), Err(Error::InvalidArgument(-1)));
        assert_eq!(compute_as::<u8>(i64::MIN), Err(Error::InvalidArgument(i64::MIN)));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(compute(21), Err(Error::Overflow { n: 21, ty: "u64" }));
        assert_eq!(compute_as::<u32>(13), Err(Error::Overflow { n: 13, ty: "u32" }));
        // Far beyond the limit, without recursing that deep.
        assert_eq!(
            compute(i64::MAX),
            Err(Error::Overflow { n: i64::MAX, ty: "u64" })
        );
    }

    #[test]
    fn limits() {
        assert_eq!(largest_input::<u8>(), 5);
        assert_eq!(largest_input::<i8>(), 5);
        assert_eq!(largest_input::<i32>(), 12);
        assert_eq!(largest_input::<i64>(), 20);
        assert_eq!(largest_input::<u128>(), 34);
        assert_eq!(compute_as::<u128>(34).map(|v| v > u64::MAX as u128), Ok(true));
    }

    #[test]
    fn recursive_fills_every_depth() {
        let mut cache = FactorialCache::new();
        assert_eq!(compute_memoized_recursive(4, &mut cache), Ok(24));
        let mut keys: Vec<_> = cache.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![0, 1, 2, 3, 4]);
        for (n, v) in &cache {
            assert_eq!(compute(*n), Ok(*v));
        }

        assert_eq!(compute_memoized_recursive(6, &mut cache), Ok(720));
        assert_eq!(cache.len(), 7);
    }

    #[test]
    fn recursive_stops_at_known_entries() {
        let mut cache = BTreeMap::new();
        cache.insert(3, 6);
        assert_eq!(compute_memoized_recursive(5, &mut cache), Ok(120));
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn recursive_errors_leave_cache_alone() {
        let mut cache = FactorialCache::new();
        assert_eq!(
            compute_memoized_recursive(-2, &mut cache),
            Err(Error::InvalidArgument(-2))
        );
        assert_eq!(
            compute_memoized_recursive(21, &mut cache),
            Err(Error::Overflow { n: 21, ty: "u64" })
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn outermost_only() {
        let mut cache = FactorialCache::new();
        assert_eq!(compute_memoized(4, &mut cache), Ok(24));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&4), Some(&24));
    }
}
