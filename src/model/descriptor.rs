use crate::foundation::{
    core::{Edges, Size},
    error::{LayoutError, LayoutResult},
};

/// Immutable snapshot of the content a layout pass is computed for.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentDescriptor {
    /// Number of items in each section; the section count is its length.
    pub items_per_section: Vec<usize>,
    /// Visible size of the scroll container.
    pub viewport: Size,
    /// Insets around the content.
    #[serde(default)]
    pub insets: Edges,
}

impl ContentDescriptor {
    /// Descriptor with zero insets.
    pub fn new(items_per_section: Vec<usize>, viewport: Size) -> Self {
        Self {
            items_per_section,
            viewport,
            insets: Edges::default(),
        }
    }

    /// Replace the content insets.
    pub fn with_insets(mut self, insets: Edges) -> Self {
        self.insets = insets;
        self
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.items_per_section.len()
    }

    /// Items in `section`, 0 when the section does not exist.
    pub fn item_count(&self, section: usize) -> usize {
        self.items_per_section.get(section).copied().unwrap_or(0)
    }

    /// Items across all sections.
    pub fn total_items(&self) -> usize {
        self.items_per_section.iter().sum()
    }

    /// Horizontal space between the left and right insets.
    pub fn content_width(&self) -> f64 {
        (self.viewport.width - self.insets.left - self.insets.right).max(0.0)
    }

    /// Vertical space between the top and bottom insets.
    pub fn content_height(&self) -> f64 {
        (self.viewport.height - self.insets.top - self.insets.bottom).max(0.0)
    }

    /// Rejects viewports that are non-finite, negative or empty, and bad insets.
    pub fn validate(&self) -> LayoutResult<()> {
        let Size { width, height } = self.viewport;
        if !width.is_finite() || !height.is_finite() {
            return Err(LayoutError::invalid_descriptor(
                "viewport dimensions must be finite",
            ));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::invalid_descriptor(format!(
                "viewport dimensions must be > 0 (got {width}x{height})"
            )));
        }
        self.insets.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/descriptor.rs"]
mod tests;
