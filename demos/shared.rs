use bigoh::{compute_memoized, FactorialCache, SharedCache};
use std::thread;

fn main() {
    let cache = SharedCache::new(FactorialCache::new());

    thread::scope(|s| {
        for t in 0..4 {
            let cache = &cache;
            s.spawn(move || {
                for n in 10..15 {
                    // The guard is held while computing, so each `n` is computed once.
                    let r = compute_memoized(n, &mut *cache.lock());
                    println!("thread {}: {}! = {:?}", t, n, r);
                }
            });
        }
    });

    assert_eq!(cache.into_inner().len(), 5);
}
