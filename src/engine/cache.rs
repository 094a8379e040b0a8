use std::collections::BTreeMap;

use crate::{
    foundation::core::{Rect, Size, overlaps},
    model::attributes::{ItemKey, LayoutAttributes},
};

/// Memoized output of one `prepare` pass: per-key attributes plus content extent.
///
/// Entries iterate in [`ItemKey`] order. The cache is rebuilt wholesale; it is
/// never patched incrementally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeCache {
    entries: BTreeMap<ItemKey, LayoutAttributes>,
    content_size: Size,
    prepared: bool,
}

impl AttributeCache {
    /// Empty, unprepared cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, attrs: LayoutAttributes) {
        self.entries.insert(attrs.key, attrs);
    }

    /// Cached attributes for `key`.
    pub fn get(&self, key: &ItemKey) -> Option<&LayoutAttributes> {
        self.entries.get(key)
    }

    /// All cached attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutAttributes> + '_ {
        self.entries.values()
    }

    /// Cached attributes whose frame strictly overlaps `rect`.
    pub fn intersecting(&self, rect: Rect) -> impl Iterator<Item = &LayoutAttributes> + '_ {
        self.entries.values().filter(move |a| overlaps(a.frame, rect))
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total scrollable content size.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub(crate) fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    /// Whether a `prepare` pass has populated this cache.
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub(crate) fn mark_prepared(&mut self) {
        self.prepared = true;
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.content_size = Size::ZERO;
        self.prepared = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/cache.rs"]
mod tests;
