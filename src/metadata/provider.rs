use crate::model::attributes::{ItemKey, ItemKind};

/// Source of intrinsic item sizes, queried synchronously during `prepare`.
///
/// Returning `None` means no metadata exists for the key. Implementations
/// must not block; hosts with expensive measurement cache it themselves.
pub trait ItemMetadataProvider {
    /// Intrinsic height for `key`, in points.
    fn height_for_item(&self, key: &ItemKey) -> Option<f64>;
}

impl<F> ItemMetadataProvider for F
where
    F: Fn(&ItemKey) -> Option<f64>,
{
    fn height_for_item(&self, key: &ItemKey) -> Option<f64> {
        self(key)
    }
}

/// Every cell has the same height; supplementary views have no metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedHeight(pub f64);

impl ItemMetadataProvider for FixedHeight {
    fn height_for_item(&self, key: &ItemKey) -> Option<f64> {
        key.is_cell().then_some(self.0)
    }
}

/// Table of measured heights, typically loaded from JSON.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeightTable {
    /// Cell heights, indexed by section then item.
    pub sections: Vec<Vec<f64>>,
    /// Header height per section.
    pub headers: Vec<f64>,
    /// Height for cells missing from `sections`.
    pub default_height: Option<f64>,
}

impl HeightTable {
    /// Single-section table.
    pub fn single(heights: Vec<f64>) -> Self {
        Self {
            sections: vec![heights],
            ..Self::default()
        }
    }
}

impl ItemMetadataProvider for HeightTable {
    fn height_for_item(&self, key: &ItemKey) -> Option<f64> {
        match key.kind {
            ItemKind::Cell => self
                .sections
                .get(key.section)
                .and_then(|s| s.get(key.index))
                .copied()
                .or(self.default_height),
            ItemKind::Header => self.headers.get(key.section).copied(),
            ItemKind::Footer => None,
        }
    }
}

/// Cell height with missing or broken metadata degraded to 0.
pub(crate) fn resolve_cell_height(provider: &dyn ItemMetadataProvider, key: &ItemKey) -> f64 {
    match provider.height_for_item(key) {
        Some(h) if h.is_finite() => h.max(0.0),
        Some(h) => {
            tracing::warn!(?key, height = h, "non-finite item height, using 0");
            0.0
        }
        None => {
            tracing::warn!(?key, "missing item metadata, using height 0");
            0.0
        }
    }
}

/// Supplementary height: provider first, then the configured fallback.
pub(crate) fn resolve_supplementary_height(
    provider: &dyn ItemMetadataProvider,
    key: &ItemKey,
    fallback: f64,
) -> f64 {
    match provider.height_for_item(key) {
        Some(h) if h.is_finite() => h.max(0.0),
        _ => fallback,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/provider.rs"]
mod tests;
