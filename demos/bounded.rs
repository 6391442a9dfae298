#[cfg(feature = "full")]
fn main() {
    use bigoh::{compute_memoized, lru::LruCache};

    let mut cache = LruCache::new(3);
    for n in [1, 2, 3, 4, 1, 4] {
        println!("{}! = {:?}", n, compute_memoized(n, &mut cache));
    }
    // Never more than the capacity, evicted values are computed again when requested.
    println!("cache holds {} entries", cache.len());
}

#[cfg(not(feature = "full"))]
fn main() {
    println!("Use the \"full\" feature to execute this example");
}
