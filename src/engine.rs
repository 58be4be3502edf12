use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::cache::{InvalidZoom, SizeCache};
use crate::geometry::Viewport;
use crate::key::CacheKey;
use crate::layout;
use crate::options::WindowerOptions;
use crate::throttle::Throttle;
use crate::types::{ScrollDirection, ViewportBounds, VisibleItem, VisibleRange};

/// Outputs of one windowing pass.
///
/// `range` is `Some` only when the re-render gate fired (a slice boundary
/// changed, or the pass was forced); `scroll_height` and `top_padding` are
/// `Some` only when the corresponding style value changed. A host applying
/// every `Some` and ignoring every `None` performs exactly the writes a
/// direct DOM implementation would.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PassOutput {
    pub range: Option<VisibleRange>,
    /// New target height for the scroll-shim element.
    pub scroll_height: Option<f64>,
    /// New target translate-Y offset for the content wrapper.
    pub top_padding: Option<f64>,
    /// Whether the throttled load-more signal fired during this pass.
    pub load_more: bool,
}

/// A headless windowing engine for grouped, row-wrapping lists.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects, nor the item data itself.
/// - Your adapter drives it by forwarding scroll/resize/data events and
///   calling [`Self::tick`] on its frame callback.
/// - The visible slice is exposed via zero-allocation iteration APIs
///   (`for_each_visible_*`) and the `on_update` callback.
///
/// Events only mark a pass as pending; the pass itself runs inside `tick`,
/// so a burst of scroll events between two frames costs one layout pass.
/// At most one pass is pending at a time, later events supersede its inputs.
#[derive(Clone, Debug)]
pub struct Windower<K> {
    options: WindowerOptions<K>,
    cache: SizeCache<K>,
    viewport: Viewport,
    load_more_throttle: Throttle,
    current_child_height: f64,
    last_range: Option<VisibleRange>,
    started: bool,
    pass_pending: bool,
    pass_forced: bool,
}

impl<K: CacheKey + Clone> Windower<K> {
    /// Creates a new engine from options.
    ///
    /// If `options.initial_bounds` is set, the viewport geometry is computed
    /// immediately; otherwise it starts zeroed until the first resize.
    pub fn new(options: WindowerOptions<K>) -> Self {
        wdebug!(
            group_count = options.group_count,
            buffer_size = options.buffer_size,
            "Windower::new"
        );
        Self {
            cache: SizeCache::with_default_item_width(options.default_item_width),
            viewport: Viewport::new(options.initial_bounds.unwrap_or_default()),
            load_more_throttle: Throttle::new(options.load_more_throttle_ms),
            current_child_height: options.child_height,
            last_range: None,
            started: false,
            pass_pending: false,
            pass_forced: false,
            options,
        }
    }

    pub fn options(&self) -> &WindowerOptions<K> {
        &self.options
    }

    /// Replaces the whole configuration and schedules a forced pass.
    pub fn set_options(&mut self, options: WindowerOptions<K>) {
        let default_width_changed = self.options.default_item_width != options.default_item_width;
        let throttle_changed = self.options.load_more_throttle_ms != options.load_more_throttle_ms;
        self.options = options;
        wtrace!(
            group_count = self.options.group_count,
            "Windower::set_options"
        );

        if default_width_changed {
            self.cache
                .set_default_item_width(self.options.default_item_width);
        }
        if throttle_changed {
            self.load_more_throttle
                .set_window_ms(self.options.load_more_throttle_ms);
        }
        self.schedule(true);
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`Self::set_options`].
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowerOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Swaps the group shape the engine windows over.
    ///
    /// A data swap alone schedules nothing; follow up with [`Self::refresh`]
    /// (forced, and with `clear_cache` when item identities changed
    /// wholesale) to re-window over the new shape.
    pub fn set_groups(
        &mut self,
        group_count: usize,
        group_len: impl Fn(usize) -> usize + Send + Sync + 'static,
        item_key: impl Fn(usize, usize) -> K + Send + Sync + 'static,
    ) {
        self.options.group_count = group_count;
        self.options.group_len = Arc::new(group_len);
        self.options.item_key = Arc::new(item_key);
    }

    /// Adjusts only the group count, for shapes whose closures already read
    /// through to live host data (e.g. after a load-more append).
    pub fn set_group_count(&mut self, group_count: usize) {
        self.options.group_count = group_count;
    }

    pub fn cache(&self) -> &SizeCache<K> {
        &self.cache
    }

    /// Mutable cache access for the measurement side (see
    /// [`crate::SizeProbe::flush`]).
    pub fn cache_mut(&mut self) -> &mut SizeCache<K> {
        &mut self.cache
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.viewport.scroll_direction()
    }

    /// The row height used by the current pass: the first measured height
    /// once one exists, else the configured `child_height` fallback.
    pub fn current_child_height(&self) -> f64 {
        self.current_child_height
    }

    /// The last emitted visible slice, if any pass has emitted yet.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.last_range
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn has_pending_pass(&self) -> bool {
        self.pass_pending
    }

    /// Begins the engine lifecycle: clears the cache, refreshes the viewport
    /// and schedules a forced first pass.
    pub fn start(&mut self) {
        wdebug!("Windower::start");
        self.started = true;
        self.load_more_throttle.reset();
        self.refresh(true, true, false);
    }

    /// Ends the lifecycle: further scroll/resize events are ignored and any
    /// pending pass is abandoned.
    pub fn stop(&mut self) {
        wdebug!("Windower::stop");
        self.started = false;
        self.pass_pending = false;
        self.pass_forced = false;
    }

    /// Handles a scroll event: records the raw offset (and direction) and
    /// schedules a pass.
    pub fn on_scroll(&mut self, raw_scroll_top: f64) {
        if !self.started {
            return;
        }
        wtrace!(raw_scroll_top, "Windower::on_scroll");
        self.viewport.record_scroll(raw_scroll_top);
        self.schedule(false);
    }

    /// Handles a resize event: recomputes the viewport geometry from the new
    /// bounds and schedules a forced pass.
    pub fn on_resize(&mut self, bounds: ViewportBounds) {
        if !self.started {
            return;
        }
        wtrace!(
            client_width = bounds.client_width,
            client_height = bounds.client_height,
            "Windower::on_resize"
        );
        self.viewport.set_bounds(bounds);
        self.schedule(true);
    }

    /// Explicit refresh entry for data changes.
    ///
    /// Optionally clears the size cache (full content replacement) and resets
    /// the raw scroll offset to the top, then schedules a pass; `force`
    /// bypasses the boundary-change gate on the next emission.
    pub fn refresh(&mut self, force: bool, clear_cache: bool, scroll_to_top: bool) {
        if clear_cache {
            self.cache.clear();
        }
        self.viewport.refresh(scroll_to_top);
        self.schedule(force);
    }

    /// Changes the zoom factor and forces a full refresh.
    ///
    /// Measured cache contents survive a zoom change; only their display
    /// scaling differs.
    pub fn update_zoom_level(&mut self, zoom_level: f64) -> Result<(), InvalidZoom> {
        self.cache.set_zoom_level(zoom_level)?;
        wdebug!(zoom_level, "Windower::update_zoom_level");
        self.refresh(true, false, false);
        Ok(())
    }

    /// See [`Viewport::set_elements_offset`].
    pub fn set_elements_offset(&mut self, offset: f64) {
        self.viewport.set_elements_offset(offset);
    }

    fn schedule(&mut self, force: bool) {
        self.pass_pending = true;
        self.pass_forced = self.pass_forced || force;
    }

    /// Runs the pending windowing pass, if any.
    ///
    /// Call this from the host's frame callback. Returns `None` while the
    /// engine is stopped or nothing is pending, so calling every frame is
    /// free.
    pub fn tick(&mut self, now_ms: u64) -> Option<PassOutput> {
        if !self.started || !self.pass_pending {
            return None;
        }
        self.pass_pending = false;
        let force = self.pass_forced;
        self.pass_forced = false;
        Some(self.run_pass(force, now_ms))
    }

    fn run_pass(&mut self, force: bool, now_ms: u64) -> PassOutput {
        if self.options.group_count == 0 {
            let range = self.emit_if_changed(VisibleRange::EMPTY, force);
            return PassOutput {
                range,
                ..PassOutput::default()
            };
        }

        if let Some(height) = self.cache.item_height() {
            self.current_child_height = height;
        }
        let child_width = self.cache.average_item_width();
        let child_height = self.current_child_height;
        let dims = self.viewport.dimensions();

        let buffer = if self.viewport.scroll_direction() == ScrollDirection::Up {
            self.options.buffer_size
        } else {
            0.0
        };
        let start = layout::start_range(
            &self.options,
            &self.cache,
            child_width,
            child_height,
            dims.view_width,
            self.viewport.scroll_top(),
            buffer,
        );
        let end = layout::end_range(
            &self.options,
            &self.cache,
            child_width,
            child_height,
            dims.view_width,
            dims.view_height,
            self.options.buffer_size,
            start.group_start,
            start.item_start,
        );

        let top_padding = self.viewport.apply_top_padding(
            self.options.group_header_height,
            start.group_start,
            child_height,
            start.rows_before_start,
            true,
        );
        let total = layout::total_scroll_height(
            &self.options,
            &self.cache,
            child_width,
            child_height,
            dims.view_width,
        );
        let scroll_height = self.viewport.apply_scroll_height(total);

        let mut load_more = false;
        if self
            .viewport
            .should_load_more(1.0 - self.options.load_more_threshold)
            && self.viewport.scroll_direction() == ScrollDirection::Down
            && self.load_more_throttle.ready(now_ms)
        {
            wdebug!(now_ms, "Windower: load_more");
            load_more = true;
            if let Some(cb) = &self.options.on_load_more {
                cb();
            }
        }

        let range = self.emit_if_changed(
            VisibleRange {
                group_start: start.group_start,
                item_start: start.item_start,
                group_end: end.group_end,
                item_end: end.item_end,
                rows_before_start: start.rows_before_start,
            },
            force,
        );

        PassOutput {
            range,
            scroll_height,
            top_padding,
            load_more,
        }
    }

    /// The re-render gate: emits only when a slice boundary changed since the
    /// last emission, or the pass was forced.
    fn emit_if_changed(&mut self, range: VisibleRange, force: bool) -> Option<VisibleRange> {
        let changed = match &self.last_range {
            Some(prev) => !prev.boundaries_eq(&range),
            None => true,
        };
        if !changed && !force {
            return None;
        }
        wtrace!(
            group_start = range.group_start,
            item_start = range.item_start,
            group_end = range.group_end,
            item_end = range.item_end,
            "Windower: update"
        );
        self.last_range = Some(range);
        if let Some(cb) = &self.options.on_update {
            cb(&range);
        }
        Some(range)
    }

    /// Iterates the last emitted slice as per-group item ranges.
    ///
    /// The first group's range starts at `item_start`, the last group's ends
    /// at `item_end`; a group whose items are cut to nothing is still emitted
    /// (its header is part of the slice).
    pub fn for_each_visible_group(&self, f: impl FnMut(usize, Range<usize>)) {
        if let Some(range) = self.last_range {
            self.for_each_group_in(&range, f);
        }
    }

    /// Iterates an arbitrary slice as per-group item ranges, clamped to the
    /// current group shape.
    pub fn for_each_group_in(&self, range: &VisibleRange, mut f: impl FnMut(usize, Range<usize>)) {
        let count = self.options.group_count;
        if count == 0 {
            return;
        }
        let group_end = range.group_end.min(count - 1);
        for group in range.group_start..=group_end {
            let len = (self.options.group_len)(group);
            let start = if group == range.group_start {
                range.item_start.min(len)
            } else {
                0
            };
            let end = if group == range.group_end {
                range.item_end.min(len).max(start)
            } else {
                len
            };
            f(group, start..end);
        }
    }

    /// Iterates the last emitted slice item by item, with keys.
    pub fn for_each_visible_item(&self, f: impl FnMut(VisibleItem<K>)) {
        if let Some(range) = self.last_range {
            self.for_each_item_in(&range, f);
        }
    }

    /// Iterates an arbitrary slice item by item, with keys.
    pub fn for_each_item_in(&self, range: &VisibleRange, mut f: impl FnMut(VisibleItem<K>)) {
        self.for_each_group_in(range, |group, items| {
            for item in items {
                f(VisibleItem {
                    group_index: group,
                    item_index: item,
                    key: (self.options.item_key)(group, item),
                });
            }
        });
    }

    /// Collects the last emitted slice into `(group, item range)` pairs
    /// (clears `out` first).
    pub fn collect_visible_groups(&self, out: &mut Vec<(usize, Range<usize>)>) {
        out.clear();
        self.for_each_visible_group(|group, items| out.push((group, items)));
    }

    /// Collects the last emitted slice into keyed items (clears `out` first).
    pub fn collect_visible_items(&self, out: &mut Vec<VisibleItem<K>>) {
        out.clear();
        self.for_each_visible_item(|item| out.push(item));
    }
}
