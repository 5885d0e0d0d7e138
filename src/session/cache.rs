//! Root locations already visited while sweeping one feedback gain.

use std::{collections::BTreeMap, fmt::Display};

use num::complex::Complex64;

/// A feedback gain quantized to thousandths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CacheKey(i64);

impl CacheKey {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_gain(gain: f64) -> Self {
        // `as` saturates, and maps NaN to 0
        Self((gain * 1000.0).round() as i64)
    }

    /// The gain this key stands for
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gain(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

/// Three decimals, like `0.300` or `-1.250`.
impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.gain())
    }
}

/// Roots keyed by the gain they were computed at, ordered by gain.
///
/// The first roots stored under a key stay there, later solves at the same
/// key are dropped. Nothing ever reads the cache to skip a solve, it only
/// feeds the traces shown behind the current roots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RootCache {
    entries: BTreeMap<CacheKey, Vec<Complex64>>,
}

impl RootCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `roots` under `key` unless the key is already taken.
    ///
    /// Returns whether anything was stored.
    pub fn insert(&mut self, key: CacheKey, roots: &[Complex64]) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, roots.to_vec());
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: CacheKey) -> Option<&[Complex64]> {
        self.entries.get(&key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = CacheKey> + '_ {
        self.entries.keys().copied()
    }

    /// Every cached root set, by increasing gain.
    pub fn traces(&self) -> impl Iterator<Item = &[Complex64]> + '_ {
        self.entries.values().map(Vec::as_slice)
    }
}
