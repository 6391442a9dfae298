use std::sync::{Mutex, MutexGuard, PoisonError};

/// A memoization cache usable from several threads.
///
/// Hold the guard returned by [`SharedCache::lock`] for the whole lookup, compute and store
/// sequence; the computation then runs at most once per key no matter how many threads ask:
///
/// ```
/// use bigoh::{compute_memoized, FactorialCache, SharedCache};
///
/// let cache = SharedCache::new(FactorialCache::new());
/// std::thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(|| assert_eq!(compute_memoized(10, &mut *cache.lock()), Ok(3628800)));
///     }
/// });
/// assert_eq!(cache.lock().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SharedCache<S> {
    store: Mutex<S>,
}

impl<S> SharedCache<S> {
    pub fn new(store: S) -> Self {
        SharedCache {
            store: Mutex::new(store),
        }
    }

    /// Locks the store.
    ///
    /// A thread panicking while holding the lock cannot leave a wrong entry behind (values are
    /// inserted whole, after being computed), so a poisoned lock is taken over.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_mut(&mut self) -> &mut S {
        self.store.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn into_inner(self) -> S {
        self.store.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> From<S> for SharedCache<S> {
    fn from(store: S) -> Self {
        SharedCache::new(store)
    }
}
