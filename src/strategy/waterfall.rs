use crate::{
    engine::cache::AttributeCache,
    foundation::{
        core::{Rect, Size, require_finite_non_negative, shrink},
        error::{LayoutError, LayoutResult},
    },
    metadata::provider::{ItemMetadataProvider, resolve_cell_height},
    model::{
        attributes::{ItemKey, LayoutAttributes},
        descriptor::ContentDescriptor,
    },
};

/// Tunables for [`WaterfallLayout`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaterfallConfig {
    /// Number of equal-width columns.
    pub columns: usize,
    /// Gap kept on every side of each item inside its packing slot.
    pub padding: f64,
}

impl Default for WaterfallConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            padding: 0.0,
        }
    }
}

/// Masonry layout: each item goes into the currently shortest column.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterfallLayout {
    config: WaterfallConfig,
}

impl WaterfallLayout {
    /// Validated waterfall with `columns` columns and `padding` around items.
    pub fn new(columns: usize, padding: f64) -> LayoutResult<Self> {
        Self::from_config(WaterfallConfig { columns, padding })
    }

    /// Build from a config value.
    pub fn from_config(config: WaterfallConfig) -> LayoutResult<Self> {
        if config.columns == 0 {
            return Err(LayoutError::invalid_config("waterfall columns must be >= 1"));
        }
        require_finite_non_negative("waterfall padding", config.padding)?;
        Ok(Self { config })
    }

    /// Active tunables.
    pub fn config(&self) -> &WaterfallConfig {
        &self.config
    }

    pub(crate) fn prepare(
        &self,
        desc: &ContentDescriptor,
        provider: &dyn ItemMetadataProvider,
        cache: &mut AttributeCache,
    ) {
        let columns = self.config.columns;
        let padding = self.config.padding;
        let column_width = desc.content_width() / columns as f64;
        let x0 = desc.insets.left;
        let y0 = desc.insets.top;

        let mut column_offsets = vec![0.0f64; columns];
        let mut content_bottom = y0;

        for (section, &count) in desc.items_per_section.iter().enumerate() {
            for index in 0..count {
                let key = ItemKey::cell(section, index);
                let height = resolve_cell_height(provider, &key);
                let col = shortest_column(&column_offsets);
                let slot = Rect::from_origin_size(
                    (x0 + col as f64 * column_width, y0 + column_offsets[col]),
                    (column_width, height + 2.0 * padding),
                );
                cache.insert(LayoutAttributes::new(key, shrink(slot, padding)));
                column_offsets[col] += slot.height();
                content_bottom = content_bottom.max(slot.y1);
            }
            // Next section starts below the tallest column.
            let level = column_offsets.iter().copied().fold(0.0, f64::max);
            column_offsets.fill(level);
        }

        cache.set_content_size(Size::new(
            desc.viewport.width,
            content_bottom + desc.insets.bottom,
        ));
    }
}

/// Index of the lowest running offset; ties go to the lowest column index.
pub(crate) fn shortest_column(offsets: &[f64]) -> usize {
    let mut best = 0;
    for (i, &offset) in offsets.iter().enumerate().skip(1) {
        if offset < offsets[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/waterfall.rs"]
mod tests;
