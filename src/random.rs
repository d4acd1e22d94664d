use std::fmt::Debug;

/// Source of raw random values for [`Buttifier`](crate::Buttifier)
///
/// Every decision the engine makes goes through [`unit_f64`] or [`index`] which map one raw
/// value to a float or an index. A source that always returns `0` therefore forces every
/// syllable to be replaced and always selects the first remaining word.
pub trait RandomSource: Debug + Send {
    fn next_u64(&mut self) -> u64;
}

/// Maps raw value to `[0, 1)` using top 53 bits
#[inline]
pub fn unit_f64(raw: u64) -> f64 {
    (raw >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Maps raw value to `0..len`. `len` must not be 0
#[inline]
pub fn index(raw: u64, len: usize) -> usize {
    debug_assert!(len != 0, "index into empty range");

    ((u128::from(raw) * len as u128) >> 64) as usize
}

/// Default source backed by [`fastrand::Rng`]
#[derive(Debug, Clone)]
pub struct FastRand(fastrand::Rng);

impl FastRand {
    /// Seeds from system entropy
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for FastRand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.u64(..)
    }
}

/// Always returns the same value
///
/// `Fixed(0)` replaces everything, `Fixed(u64::MAX)` replaces nothing unless rate is 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub u64);

impl RandomSource for Fixed {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0
    }
}
