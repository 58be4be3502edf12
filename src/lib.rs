//! A headless windowing engine for grouped, row-wrapping lists.
//!
//! This crate computes which slice of a large, header-grouped, row-wrapping
//! list is visible inside a scrollable viewport, so a UI layer only has to
//! instantiate nodes for that slice. One windowing pass yields the visible
//! group/item range (plus a direction-sensitive buffer), the total scrollable
//! extent, and the leading offset that positions the rendered slice where the
//! unrendered prefix would have ended.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport bounds (outer and inner box of the scroll element)
//! - raw scroll offsets as scroll events arrive
//! - item box measurements, committed through [`SizeProbe`]
//!
//! and to apply the returned geometry outputs (scroll-shim height,
//! translate-Y offset) to its real scroll container.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod averager;
mod cache;
mod engine;
mod geometry;
mod key;
mod layout;
mod options;
mod probe;
mod throttle;
mod types;


pub use averager::ItemWidthAverager;
pub use cache::{InvalidZoom, SizeCache};
pub use engine::{PassOutput, Windower};
pub use geometry::Viewport;
pub use options::{GroupLenFn, ItemKeyFn, OnLoadMoreCallback, OnUpdateCallback, WindowerOptions};
pub use probe::SizeProbe;
pub use throttle::Throttle;
pub use types::{
    ItemSize, ScrollDirection, ViewportBounds, ViewportDimensions, VisibleItem, VisibleRange,
};

#[doc(hidden)]
pub use key::CacheKey;
