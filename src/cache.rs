use crate::ItemWidthAverager;
use crate::key::{CacheKey, SizeMap};
use crate::types::ItemSize;

/// Error returned when attempting to set the zoom factor to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("zoom level can not be set to zero")]
pub struct InvalidZoom;

/// Measured item sizes keyed by stable item identity, with a zoom transform.
///
/// Entries are stored in base (unzoomed) units: writes divide by the current
/// zoom factor and reads multiply by it, so cached geometry is zoom-invariant
/// at rest and a zoom change never invalidates measurements.
///
/// The cache also owns the [`ItemWidthAverager`] that estimates widths for
/// items not measured yet, and remembers the first-measured entry as the
/// uniform row-height estimate (all items are assumed to share one height;
/// first-measured wins if they do not).
#[derive(Clone, Debug)]
pub struct SizeCache<K> {
    entries: SizeMap<K>,
    averager: ItemWidthAverager,
    zoom_level: f64,
    first_key: Option<K>,
}

impl<K: CacheKey + Clone> SizeCache<K> {
    pub fn new() -> Self {
        Self::with_default_item_width(ItemWidthAverager::DEFAULT_WIDTH)
    }

    /// Creates a cache whose averager starts from `default_item_width`.
    pub fn with_default_item_width(default_item_width: f64) -> Self {
        Self {
            entries: SizeMap::new(),
            averager: ItemWidthAverager::new(default_item_width),
            zoom_level: 1.0,
            first_key: None,
        }
    }

    /// See [`ItemWidthAverager::set_default_width`].
    pub fn set_default_item_width(&mut self, default_item_width: f64) {
        self.averager.set_default_width(default_item_width);
    }

    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up a measured size, scaled by the current zoom factor.
    ///
    /// `None` means the item has not been measured; callers fall back to
    /// [`Self::average_item_width`] for layout.
    pub fn get(&self, key: &K) -> Option<ItemSize> {
        self.entries.get(key).map(|entry| ItemSize {
            width: entry.width * self.zoom_level,
            height: entry.height * self.zoom_level,
        })
    }

    /// Stores a measured size, converting it to base units first, and feeds
    /// the base width into the averager.
    pub fn set(&mut self, key: K, size: ItemSize) {
        let base = ItemSize {
            width: size.width / self.zoom_level,
            height: size.height / self.zoom_level,
        };
        if self.first_key.is_none() {
            self.first_key = Some(key.clone());
        }
        self.entries.insert(key, base);
        self.averager.add_width(base.width);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Empties the cache and resets the averager.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.averager.reset();
        self.first_key = None;
    }

    /// The current width estimate for unmeasured items, zoom-scaled.
    pub fn average_item_width(&self) -> f64 {
        self.averager.average_item_width() * self.zoom_level
    }

    /// The uniform row-height estimate: the first-measured entry's height,
    /// zoom-scaled. `None` while the cache is empty.
    pub fn item_height(&self) -> Option<f64> {
        let key = self.first_key.as_ref()?;
        let entry = self.entries.get(key)?;
        Some(entry.height * self.zoom_level)
    }

    /// Sets the zoom factor applied on every read and write.
    ///
    /// A factor of zero is rejected and the prior zoom is retained. Stored
    /// base values are unaffected by zoom changes.
    pub fn set_zoom_level(&mut self, zoom_level: f64) -> Result<(), InvalidZoom> {
        if zoom_level == 0.0 {
            wwarn!("SizeCache: zoom level of zero rejected");
            return Err(InvalidZoom);
        }
        self.zoom_level = zoom_level;
        Ok(())
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }
}

impl<K: CacheKey + Clone> Default for SizeCache<K> {
    fn default() -> Self {
        Self::new()
    }
}
