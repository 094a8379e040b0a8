use std::cmp::Ordering;

use crate::foundation::core::{Affine, Point, Rect, Scale};

/// What an attribute positions: a regular cell or a section supplementary view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Regular content item.
    Cell,
    /// Section header.
    Header,
    /// Section footer.
    Footer,
}

impl ItemKind {
    fn rank(self) -> u8 {
        match self {
            Self::Header => 0,
            Self::Cell => 1,
            Self::Footer => 2,
        }
    }
}

/// Identity of one laid-out element.
///
/// Keys order in document order: by section, then header, cells, footer,
/// then by index. Headers and footers always use index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ItemKey {
    /// Section number.
    pub section: usize,
    /// Item index within the section.
    pub index: usize,
    /// Element kind.
    pub kind: ItemKind,
}

impl ItemKey {
    /// Key of cell `index` in `section`.
    pub fn cell(section: usize, index: usize) -> Self {
        Self {
            section,
            index,
            kind: ItemKind::Cell,
        }
    }

    /// Key of the header of `section`.
    pub fn header(section: usize) -> Self {
        Self {
            section,
            index: 0,
            kind: ItemKind::Header,
        }
    }

    /// Key of the footer of `section`.
    pub fn footer(section: usize) -> Self {
        Self {
            section,
            index: 0,
            kind: ItemKind::Footer,
        }
    }

    /// True for regular cells.
    pub fn is_cell(&self) -> bool {
        self.kind == ItemKind::Cell
    }
}

impl Ord for ItemKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.section, self.kind.rank(), self.index).cmp(&(
            other.section,
            other.kind.rank(),
            other.index,
        ))
    }
}

impl PartialOrd for ItemKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computed geometry and decoration for one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutAttributes {
    /// Element identity.
    pub key: ItemKey,
    /// Frame in content coordinates.
    pub frame: Rect,
    /// Scale applied about the frame centre.
    pub transform: Scale,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Draw order; higher draws on top.
    pub z_order: i32,
}

impl LayoutAttributes {
    /// Plain attributes: identity transform, fully opaque, z 0.
    pub fn new(key: ItemKey, frame: Rect) -> Self {
        Self {
            key,
            frame,
            transform: Scale::IDENTITY,
            opacity: 1.0,
            z_order: 0,
        }
    }

    /// Centre of the untransformed frame.
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// Affine a renderer applies to draw the element (scale about its centre).
    pub fn render_transform(&self) -> Affine {
        self.transform.to_affine_about(self.center())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/attributes.rs"]
mod tests;
