use bigoh::{compute, compute_memoized, compute_memoized_recursive, FactorialCache};

fn main() {
    let facs = (0..21).map(compute).collect::<Vec<_>>();
    println!("fac([0,...,20]) = {:?}", facs);

    // Only the requested values end up in the cache.
    let mut outermost = FactorialCache::new();
    for n in [3, 3, 5, 5, 5] {
        compute_memoized(n, &mut outermost).ok();
    }
    println!("outermost: {} entries", outermost.len());

    // Every intermediate value ends up in the cache.
    let mut full = FactorialCache::new();
    for n in [3, 3, 5, 5, 5] {
        compute_memoized_recursive(n, &mut full).ok();
    }
    println!("recursive: {} entries", full.len());

    println!("fac(-1) = {:?}", compute(-1));
    println!("fac(21) = {:?}", compute(21));
}
