//! Factorial, computed recursively and memoized in caches owned by the caller.
//!
//! [`compute`] is the plain recursive definition, `n! = n * (n-1)!`. Its memoized companion
//! [`compute_memoized`] is generated by the [`memoize`] attribute and takes the cache as an
//! explicit argument, so the cache lives exactly as long as the caller wants it to:
//!
//! ```
//! use bigoh::{compute_memoized, Error, FactorialCache};
//!
//! let mut cache = FactorialCache::new();
//! assert_eq!(compute_memoized(4, &mut cache), Ok(24));
//! assert_eq!(compute_memoized(4, &mut cache), Ok(24)); // served from the cache
//! assert_eq!(cache.len(), 1);
//!
//! assert_eq!(compute_memoized(-1, &mut cache), Err(Error::InvalidArgument(-1)));
//! assert_eq!(compute_memoized(21, &mut cache), Err(Error::Overflow { n: 21, ty: "u64" }));
//! ```
//!
//! The attribute works on other functions as well:
//!
//! ```
//! use bigoh::memoize;
//! use std::collections::HashMap;
//!
//! #[memoize]
//! fn hello(arg: String, arg2: usize) -> bool {
//!     arg.len() % 2 == arg2
//! }
//!
//! let mut cache = HashMap::new();
//! // `hello` is only called once.
//! assert!(!hello_memoized("World".to_string(), 0, &mut cache));
//! assert!(!hello_memoized("World".to_string(), 0, &mut cache));
//! assert_eq!(cache.len(), 1);
//! ```
//!
//! Any [`MemoStore`] can hold the results: `HashMap` with any hasher, `BTreeMap`, and with the
//! `full` feature a bounded `lru::LruCache`. [`SharedCache`] shares one store between threads.

// Lets code generated by `#[memoize]` refer to `::bigoh` from inside this crate, too.
extern crate self as bigoh;

pub use bigoh_inner::memoize;
pub use log;
#[cfg(feature = "full")]
pub use lru;

mod error;
mod factorial;
mod shared;
mod store;

pub use error::{Error, Result};
pub use factorial::{
    compute, compute_as, compute_memoized, compute_memoized_recursive, largest_input,
};
pub use shared::SharedCache;
pub use store::{FactorialCache, MemoStore};
