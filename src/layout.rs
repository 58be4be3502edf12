//! The row-wrapping layout simulation.
//!
//! Items inside a group lay out left-to-right and wrap to a new row when the
//! running row width would exceed the view width; every group is prefixed by
//! a fixed-height header. The same simulation is run for the start-range
//! search, the end-range search and the total-extent calculation, and lives
//! here once so the three passes cannot disagree about where rows break.

use crate::SizeCache;
use crate::WindowerOptions;
use crate::key::CacheKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StartRange {
    pub(crate) group_start: usize,
    pub(crate) item_start: usize,
    /// Fully-passed rows above the start item, for the top-padding output.
    pub(crate) rows_before_start: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EndRange {
    pub(crate) group_end: usize,
    /// Exclusive, within `group_end`.
    pub(crate) item_end: usize,
}

/// Width used for one item: its measured (zoom-scaled) width when cached,
/// else the current average estimate.
fn item_width<K: CacheKey + Clone>(
    options: &WindowerOptions<K>,
    cache: &SizeCache<K>,
    child_width: f64,
    group: usize,
    item: usize,
) -> f64 {
    let key = (options.item_key)(group, item);
    cache.get(&key).map_or(child_width, |size| size.width)
}

/// Walks the wrap simulation until the accumulated content height passes
/// `scroll_top - buffer`, returning the group/item index where that happens
/// plus the count of rows fully above it.
pub(crate) fn start_range<K: CacheKey + Clone>(
    options: &WindowerOptions<K>,
    cache: &SizeCache<K>,
    child_width: f64,
    child_height: f64,
    view_width: f64,
    scroll_top: f64,
    buffer: f64,
) -> StartRange {
    let mut row_width = 0.0;
    let mut number_of_rows = 0usize;
    let mut content_height = 0.0;

    for group in 0..options.group_count {
        content_height += options.group_header_height;
        for item in 0..(options.group_len)(group) {
            let width = item_width(options, cache, child_width, group, item);
            if item != 0 && row_width + width <= view_width {
                row_width += width;
            } else {
                row_width = width;
                content_height += child_height;
                number_of_rows += 1;
            }

            if content_height > scroll_top - buffer {
                return StartRange {
                    group_start: group,
                    item_start: item,
                    rows_before_start: number_of_rows.saturating_sub(1),
                };
            }
        }
        row_width = 0.0;
    }

    StartRange {
        group_start: 0,
        item_start: 0,
        rows_before_start: 0,
    }
}

/// Continues the wrap simulation from the start indices until the content
/// height passes `view_height + child_height + buffer_size`, returning the
/// last visible group and the exclusive item cut before the crossing row.
///
/// When the threshold is never crossed the range runs to the end of the last
/// group.
pub(crate) fn end_range<K: CacheKey + Clone>(
    options: &WindowerOptions<K>,
    cache: &SizeCache<K>,
    child_width: f64,
    child_height: f64,
    view_width: f64,
    view_height: f64,
    buffer_size: f64,
    group_start: usize,
    item_start: usize,
) -> EndRange {
    if options.group_count == 0 {
        return EndRange {
            group_end: 0,
            item_end: 0,
        };
    }

    let mut row_width = 0.0;
    let mut content_height = 0.0;

    for group in group_start..options.group_count {
        content_height += options.group_header_height;
        let first = if group == group_start { item_start } else { 0 };
        for item in first..(options.group_len)(group) {
            let width = item_width(options, cache, child_width, group, item);
            if item != 0 && row_width + width <= view_width {
                row_width += width;
            } else {
                if content_height > view_height + child_height + buffer_size {
                    return EndRange {
                        group_end: group,
                        item_end: item,
                    };
                }
                row_width = width;
                content_height += child_height;
            }
        }
        row_width = 0.0;
    }

    let last_group = options.group_count - 1;
    EndRange {
        group_end: last_group,
        item_end: (options.group_len)(last_group),
    }
}

/// Total scrollable extent: per group, the header height plus one child
/// height per row started by the wrap rule.
pub(crate) fn total_scroll_height<K: CacheKey + Clone>(
    options: &WindowerOptions<K>,
    cache: &SizeCache<K>,
    child_width: f64,
    child_height: f64,
    view_width: f64,
) -> f64 {
    let mut scroll_height = 0.0;
    let mut row_width = 0.0;

    for group in 0..options.group_count {
        scroll_height += options.group_header_height;
        for item in 0..(options.group_len)(group) {
            let width = item_width(options, cache, child_width, group, item);
            if item != 0 && row_width + width <= view_width {
                row_width += width;
            } else {
                scroll_height += child_height;
                row_width = width;
            }
        }
        row_width = 0.0;
    }

    scroll_height
}
