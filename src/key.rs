#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ItemSize;

#[cfg(feature = "std")]
pub(crate) type SizeMap<K> = HashMap<K, ItemSize>;
#[cfg(not(feature = "std"))]
pub(crate) type SizeMap<K> = BTreeMap<K, ItemSize>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait CacheKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> CacheKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait CacheKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> CacheKey for K {}
