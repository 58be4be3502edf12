/// Direction of the most recent scroll movement.
///
/// Recorded on every scroll event; starts out as `Down` so the start-boundary
/// buffer is not applied before the user has scrolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Up,
    Down,
}

impl Default for ScrollDirection {
    fn default() -> Self {
        Self::Down
    }
}

/// A measured item box.
///
/// Inside [`crate::SizeCache`] these are held in base (unzoomed) units; reads
/// and writes go through the cache's zoom factor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSize {
    pub width: f64,
    pub height: f64,
}

/// Outer and inner box of the scroll element, as reported by the host.
///
/// The outer (offset) box includes scrollbars; the inner (client) box does
/// not. The difference yields the scrollbar thickness.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportBounds {
    pub offset_width: f64,
    pub offset_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

/// Derived viewport geometry, recomputed on every refresh/resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportDimensions {
    pub view_height: f64,
    pub view_width: f64,
    pub scrollbar_width: f64,
    pub scrollbar_height: f64,
}

/// The group/item slice produced by one windowing pass.
///
/// `group_end` is inclusive; `item_end` is the exclusive item cut inside the
/// last visible group (an end group whose header crossed the threshold before
/// any of its items carries `item_end == 0`). `rows_before_start` counts the
/// fully-passed rows above the slice and feeds the top-padding output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub group_start: usize,
    pub item_start: usize,
    pub group_end: usize,
    /// Exclusive, within the last visible group.
    pub item_end: usize,
    pub rows_before_start: usize,
}

impl VisibleRange {
    /// The slice emitted while the list has no groups at all.
    pub const EMPTY: Self = Self {
        group_start: 0,
        item_start: 0,
        group_end: 0,
        item_end: 0,
        rows_before_start: 0,
    };

    /// Whether the four slice boundaries match.
    ///
    /// This is the re-render gate: `rows_before_start` is deliberately left
    /// out, it only affects the top-padding output.
    pub fn boundaries_eq(&self, other: &Self) -> bool {
        self.group_start == other.group_start
            && self.item_start == other.item_start
            && self.group_end == other.group_end
            && self.item_end == other.item_end
    }
}

/// One item of the visible slice, with its stable key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem<K> {
    pub group_index: usize,
    pub item_index: usize,
    pub key: K,
}
