use alloc::vec::Vec;

use crate::SizeCache;
use crate::key::CacheKey;
use crate::types::ItemSize;

/// One-shot size measurement scheduler.
///
/// The renderer calls [`Self::observe`] when an item mounts; at its next
/// paint opportunity it calls [`Self::flush`] with the measurement
/// capability (reading the rendered box of each pending item) and the
/// results are committed to the [`SizeCache`].
///
/// Idempotent per key: an already-cached or already-pending item is never
/// scheduled again, and a measurement that returns `None` is dropped rather
/// than retried.
#[derive(Clone, Debug)]
pub struct SizeProbe<K> {
    pending: Vec<K>,
}

impl<K: CacheKey + Clone> SizeProbe<K> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Schedules a measurement for `key` unless it is cached or pending.
    pub fn observe(&mut self, cache: &SizeCache<K>, key: K) {
        if cache.has(&key) || self.pending.contains(&key) {
            return;
        }
        self.pending.push(key);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drops all scheduled measurements without running them.
    pub fn cancel(&mut self) {
        self.pending.clear();
    }

    /// Measures every pending item through `measure` and commits the results.
    ///
    /// Returns the number of sizes committed. Items measured by someone else
    /// in the meantime are skipped.
    pub fn flush(
        &mut self,
        cache: &mut SizeCache<K>,
        mut measure: impl FnMut(&K) -> Option<ItemSize>,
    ) -> usize {
        let mut committed = 0usize;
        for key in self.pending.drain(..) {
            if cache.has(&key) {
                continue;
            }
            if let Some(size) = measure(&key) {
                wtrace!(
                    width = size.width,
                    height = size.height,
                    "SizeProbe: measurement committed"
                );
                cache.set(key, size);
                committed += 1;
            }
        }
        committed
    }
}

impl<K: CacheKey + Clone> Default for SizeProbe<K> {
    fn default() -> Self {
        Self::new()
    }
}
