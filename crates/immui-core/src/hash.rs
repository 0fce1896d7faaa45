use core::hash::Hash;
use std::hash::Hasher;

#[cfg(feature = "std-hash")]
pub mod default {
    pub use std::collections::hash_map::DefaultHasher;

    #[inline]
    pub fn new() -> DefaultHasher {
        DefaultHasher::new()
    }
}

#[cfg(not(feature = "std-hash"))]
pub mod default {
    pub use ahash::AHasher as DefaultHasher;

    #[inline]
    pub fn new() -> DefaultHasher {
        DefaultHasher::default()
    }
}

/// Hashes `leaf` seeded with `seed`. Both hashers are fixed-key, so the
/// result is stable for the lifetime of the process.
#[inline]
pub fn hash_seeded<T: Hash + ?Sized>(seed: u64, leaf: &T) -> u64 {
    let mut h = default::new();
    seed.hash(&mut h);
    leaf.hash(&mut h);
    h.finish()
}
