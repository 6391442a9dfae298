use bigoh::compute_memoized;
use rustc_hash::FxHashMap;

fn main() {
    let mut fx: FxHashMap<i64, u64> = FxHashMap::default();
    let mut ahashed: ahash::HashMap<i64, u64> = ahash::HashMap::default();

    for n in [8, 8, 16] {
        println!("{}! = {:?}", n, compute_memoized(n, &mut fx));
        println!("{}! = {:?}", n, compute_memoized(n, &mut ahashed));
    }
    assert_eq!(fx.len(), 2);
    assert_eq!(ahashed.len(), 2);
}
