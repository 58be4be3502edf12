use alloc::sync::Arc;

use crate::types::{ViewportBounds, VisibleRange};

/// A callback fired when a windowing pass emits a new visible slice.
pub type OnUpdateCallback = Arc<dyn Fn(&VisibleRange) + Send + Sync>;

/// A callback fired when the throttled "need more data" signal triggers.
pub type OnLoadMoreCallback = Arc<dyn Fn() + Send + Sync>;

/// Returns the number of items in a group.
pub type GroupLenFn = Arc<dyn Fn(usize) -> usize + Send + Sync>;

/// Returns the stable key of the item at `(group index, item position)`.
///
/// Measurements follow this key, so it must stay stable across data
/// refreshes for the cache to keep paying off.
pub type ItemKeyFn<K> = Arc<dyn Fn(usize, usize) -> K + Send + Sync>;

/// Configuration for [`crate::Windower`].
///
/// The engine holds no item data: the group shape is described by
/// `group_count` plus the `group_len`/`item_key` closures, and the host's
/// renderer slices its own data from the emitted [`VisibleRange`].
///
/// This type is designed to be cheap to clone: closure fields are stored in
/// `Arc`s so adapters can update a few fields and call
/// `Windower::set_options` without reallocating closures.
pub struct WindowerOptions<K> {
    pub group_count: usize,
    pub group_len: GroupLenFn,
    pub item_key: ItemKeyFn<K>,

    /// Extra rendered margin against the start boundary, applied only while
    /// scrolling up.
    pub buffer_size: f64,

    /// Fixed height of each group header.
    pub group_header_height: f64,

    /// Row-height fallback used until the first item has been measured.
    pub child_height: f64,

    /// Seed for the width averager; the width assumed for items before any
    /// measurement exists.
    pub default_item_width: f64,

    /// Fraction (0..1) of the scroll height left below the viewport at which
    /// the load-more signal fires.
    pub load_more_threshold: f64,

    /// Coalescing window for the load-more signal, in milliseconds.
    pub load_more_throttle_ms: u64,

    /// Initial outer/inner box of the scroll element, when known up front.
    pub initial_bounds: Option<ViewportBounds>,

    /// Optional callback fired on every emitted visible slice.
    pub on_update: Option<OnUpdateCallback>,

    /// Optional callback fired on every load-more signal.
    pub on_load_more: Option<OnLoadMoreCallback>,
}

impl<K> WindowerOptions<K> {
    pub fn new(
        group_count: usize,
        group_len: impl Fn(usize) -> usize + Send + Sync + 'static,
        item_key: impl Fn(usize, usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            group_count,
            group_len: Arc::new(group_len),
            item_key: Arc::new(item_key),
            buffer_size: 0.0,
            group_header_height: 0.0,
            child_height: 0.0,
            default_item_width: crate::ItemWidthAverager::DEFAULT_WIDTH,
            load_more_threshold: 0.2,
            load_more_throttle_ms: 1000,
            initial_bounds: None,
            on_update: None,
            on_load_more: None,
        }
    }

    pub fn with_buffer_size(mut self, buffer_size: f64) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_group_header_height(mut self, group_header_height: f64) -> Self {
        self.group_header_height = group_header_height;
        self
    }

    pub fn with_child_height(mut self, child_height: f64) -> Self {
        self.child_height = child_height;
        self
    }

    pub fn with_default_item_width(mut self, default_item_width: f64) -> Self {
        self.default_item_width = default_item_width;
        self
    }

    pub fn with_load_more_threshold(mut self, load_more_threshold: f64) -> Self {
        self.load_more_threshold = load_more_threshold;
        self
    }

    pub fn with_load_more_throttle_ms(mut self, load_more_throttle_ms: u64) -> Self {
        self.load_more_throttle_ms = load_more_throttle_ms;
        self
    }

    /// Sets the initial viewport bounds.
    pub fn with_initial_bounds(mut self, initial_bounds: Option<ViewportBounds>) -> Self {
        self.initial_bounds = initial_bounds;
        self
    }

    pub fn with_on_update(
        mut self,
        on_update: Option<impl Fn(&VisibleRange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_update = on_update.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_load_more(
        mut self,
        on_load_more: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_load_more = on_load_more.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> Clone for WindowerOptions<K> {
    fn clone(&self) -> Self {
        Self {
            group_count: self.group_count,
            group_len: Arc::clone(&self.group_len),
            item_key: Arc::clone(&self.item_key),
            buffer_size: self.buffer_size,
            group_header_height: self.group_header_height,
            child_height: self.child_height,
            default_item_width: self.default_item_width,
            load_more_threshold: self.load_more_threshold,
            load_more_throttle_ms: self.load_more_throttle_ms,
            initial_bounds: self.initial_bounds,
            on_update: self.on_update.clone(),
            on_load_more: self.on_load_more.clone(),
        }
    }
}

impl<K> core::fmt::Debug for WindowerOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowerOptions")
            .field("group_count", &self.group_count)
            .field("buffer_size", &self.buffer_size)
            .field("group_header_height", &self.group_header_height)
            .field("child_height", &self.child_height)
            .field("default_item_width", &self.default_item_width)
            .field("load_more_threshold", &self.load_more_threshold)
            .field("load_more_throttle_ms", &self.load_more_throttle_ms)
            .field("initial_bounds", &self.initial_bounds)
            .finish_non_exhaustive()
    }
}
