use crate::types::{ScrollDirection, ViewportBounds, ViewportDimensions};

/// Pure viewport geometry: scroll-offset tracking, dimension computation and
/// scroll-direction detection.
///
/// This type never touches a real scroll element. The host feeds it
/// [`ViewportBounds`] and raw scroll offsets; the style-affecting outputs
/// (scroll-shim height, translate-Y offset) come back as change-tracked
/// values from [`Self::apply_scroll_height`] and [`Self::apply_top_padding`],
/// `None` meaning "nothing to write".
#[derive(Clone, Debug)]
pub struct Viewport {
    bounds: ViewportBounds,
    dimensions: ViewportDimensions,
    raw_scroll_top: f64,
    elements_offset: f64,
    last_scroll_top: f64,
    last_scroll_height: f64,
    last_top_padding: f64,
    scroll_direction: ScrollDirection,
}

impl Viewport {
    pub fn new(bounds: ViewportBounds) -> Self {
        Self {
            bounds,
            dimensions: compute_dimensions(bounds),
            raw_scroll_top: 0.0,
            elements_offset: 0.0,
            last_scroll_top: 0.0,
            last_scroll_height: 0.0,
            last_top_padding: 0.0,
            scroll_direction: ScrollDirection::default(),
        }
    }

    /// The effective scroll offset: the raw offset minus the top offset of an
    /// optional inner container, clamped at zero.
    pub fn scroll_top(&self) -> f64 {
        (self.raw_scroll_top - self.elements_offset).max(0.0)
    }

    pub fn raw_scroll_top(&self) -> f64 {
        self.raw_scroll_top
    }

    pub fn dimensions(&self) -> ViewportDimensions {
        self.dimensions
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }

    /// Top offset of an inner container, for lists nested inside a wrapper
    /// that starts below the scroll element's origin.
    pub fn set_elements_offset(&mut self, offset: f64) {
        self.elements_offset = offset;
    }

    /// Replaces the element bounds (resize) and recomputes the dimensions.
    pub fn set_bounds(&mut self, bounds: ViewportBounds) {
        self.bounds = bounds;
        self.dimensions = compute_dimensions(bounds);
    }

    /// Recomputes the dimensions from the stored bounds, optionally resetting
    /// the raw scroll offset to the top first.
    pub fn refresh(&mut self, scroll_to_top: bool) {
        if scroll_to_top {
            self.raw_scroll_top = 0.0;
        }
        self.dimensions = compute_dimensions(self.bounds);
    }

    /// Records a scroll event: detects the direction against the previous raw
    /// offset, then stores the new one.
    pub fn record_scroll(&mut self, raw_scroll_top: f64) {
        self.scroll_direction = if raw_scroll_top - self.last_scroll_top > 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_scroll_top = raw_scroll_top;
        self.raw_scroll_top = raw_scroll_top;
    }

    /// Whether the raw offset has passed `threshold` as a fraction of the
    /// last applied scroll height.
    pub fn should_load_more(&self, threshold: f64) -> bool {
        self.raw_scroll_top / self.last_scroll_height > threshold
    }

    /// Change-tracks the total scrollable height.
    ///
    /// Returns `Some(scroll_height)` when the shim element needs the new
    /// value, `None` when it already has it.
    pub fn apply_scroll_height(&mut self, scroll_height: f64) -> Option<f64> {
        if scroll_height != self.last_scroll_height {
            self.last_scroll_height = scroll_height;
            Some(scroll_height)
        } else {
            None
        }
    }

    /// Computes and change-tracks the top padding that shifts the rendered
    /// slice to where the unrendered prefix would have ended.
    ///
    /// Returns `Some(translate_y)` when the content wrapper needs the new
    /// offset, `None` when unchanged.
    pub fn apply_top_padding(
        &mut self,
        group_header_height: f64,
        groups_before: usize,
        child_height: f64,
        rows_before: usize,
        has_items: bool,
    ) -> Option<f64> {
        let top_padding = if has_items {
            group_header_height * groups_before as f64 + child_height * rows_before as f64
        } else {
            0.0
        };
        if top_padding != self.last_top_padding {
            self.last_top_padding = top_padding;
            Some(top_padding)
        } else {
            None
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportBounds::default())
    }
}

/// Outer minus inner box yields the scrollbar thickness; the view box is the
/// inner box shrunk by it once more.
fn compute_dimensions(bounds: ViewportBounds) -> ViewportDimensions {
    let scrollbar_width = bounds.offset_width - bounds.client_width;
    let scrollbar_height = bounds.offset_height - bounds.client_height;
    ViewportDimensions {
        view_height: bounds.client_height - scrollbar_height,
        view_width: bounds.client_width - scrollbar_width,
        scrollbar_width,
        scrollbar_height,
    }
}
