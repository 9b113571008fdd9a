//! Thread-safe random number generation adapter.
//!
//! Implements `RandomPort` using `rand::thread_rng()`.

use rand::Rng;

use crate::ports::RandomPort;

/// Production random number generator using thread-local RNG.
///
/// Wraps `rand::thread_rng()` behind the `RandomPort` trait so the
/// evaluation pipeline never depends on `rand` directly.
#[derive(Debug, Clone, Default)]
pub struct ThreadRngAdapter;

impl ThreadRngAdapter {
    /// Create a new ThreadRngAdapter.
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for ThreadRngAdapter {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        rand::thread_rng().gen_range(min..=max)
    }
}
