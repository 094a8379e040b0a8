use crate::{
    engine::cache::AttributeCache,
    foundation::{
        core::{Rect, Size, require_finite_non_negative},
        error::{LayoutError, LayoutResult},
    },
    model::{
        attributes::{ItemKey, LayoutAttributes},
        descriptor::ContentDescriptor,
    },
};

/// Tunables for [`GridLayout`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Fixed column count.
    pub columns: usize,
    /// Horizontal gap between cells.
    pub spacing: f64,
    /// Vertical gap between rows; defaults to `spacing`.
    pub line_spacing: Option<f64>,
    /// Row height; cells are square when unset.
    pub item_height: Option<f64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            spacing: 0.0,
            line_spacing: None,
            item_height: None,
        }
    }
}

/// Uniform row-major grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    config: GridConfig,
}

impl GridLayout {
    /// Square-celled grid with `columns` columns and `spacing` between cells and rows.
    pub fn new(columns: usize, spacing: f64) -> LayoutResult<Self> {
        Self::from_config(GridConfig {
            columns,
            spacing,
            ..GridConfig::default()
        })
    }

    /// Build from a config value.
    pub fn from_config(config: GridConfig) -> LayoutResult<Self> {
        if config.columns == 0 {
            return Err(LayoutError::invalid_config("grid columns must be >= 1"));
        }
        require_finite_non_negative("grid spacing", config.spacing)?;
        if let Some(v) = config.line_spacing {
            require_finite_non_negative("grid line_spacing", v)?;
        }
        if let Some(v) = config.item_height {
            require_finite_non_negative("grid item_height", v)?;
        }
        Ok(Self { config })
    }

    /// Active tunables.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Cell width for a content area `content_width` wide.
    pub fn cell_width(&self, content_width: f64) -> f64 {
        let c = self.config.columns as f64;
        ((content_width - self.config.spacing * (c - 1.0)) / c).max(0.0)
    }

    pub(crate) fn prepare(&self, desc: &ContentDescriptor, cache: &mut AttributeCache) {
        let columns = self.config.columns;
        let spacing = self.config.spacing;
        let line_spacing = self.config.line_spacing.unwrap_or(spacing);
        let cell_w = self.cell_width(desc.content_width());
        let cell_h = self.config.item_height.unwrap_or(cell_w);

        let x0 = desc.insets.left;
        let mut y = desc.insets.top;
        let mut rows_so_far = 0usize;

        for (section, &count) in desc.items_per_section.iter().enumerate() {
            for index in 0..count {
                let row = index / columns;
                let col = index % columns;
                let frame = Rect::from_origin_size(
                    (
                        x0 + col as f64 * (cell_w + spacing),
                        y + row as f64 * (cell_h + line_spacing),
                    ),
                    (cell_w, cell_h),
                );
                cache.insert(LayoutAttributes::new(ItemKey::cell(section, index), frame));
            }
            // Each row advances by its height plus one line gap.
            let rows = count.div_ceil(columns);
            y += rows as f64 * (cell_h + line_spacing);
            rows_so_far += rows;
        }

        // Drop the gap after the last row.
        let content_bottom = if rows_so_far > 0 {
            y - line_spacing
        } else {
            y
        };
        cache.set_content_size(Size::new(
            desc.viewport.width,
            content_bottom + desc.insets.bottom,
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/grid.rs"]
mod tests;
