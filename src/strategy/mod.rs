pub(crate) mod carousel;
pub(crate) mod grid;
pub(crate) mod sticky;
pub(crate) mod waterfall;

use crate::{
    engine::cache::AttributeCache,
    foundation::{
        core::{Edges, Rect},
        error::LayoutResult,
    },
    metadata::provider::ItemMetadataProvider,
    model::{attributes::LayoutAttributes, descriptor::ContentDescriptor, scroll::ScrollState},
};

use carousel::{CarouselConfig, CarouselLayout};
use grid::{GridConfig, GridLayout};
use sticky::{StickyHeaderConfig, StickyHeaderLayout};
use waterfall::{WaterfallConfig, WaterfallLayout};

/// Serialized strategy choice, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// See [`WaterfallConfig`].
    Waterfall(WaterfallConfig),
    /// See [`GridConfig`].
    Grid(GridConfig),
    /// See [`CarouselConfig`].
    Carousel(CarouselConfig),
    /// See [`StickyHeaderConfig`].
    StickyHeader(StickyHeaderConfig),
}

/// The fixed set of layout strategies, chosen when the engine is built.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutStrategy {
    /// Masonry columns.
    Waterfall(WaterfallLayout),
    /// Uniform grid.
    Grid(GridLayout),
    /// Centre-scaled horizontal strip with snapping.
    Carousel(CarouselLayout),
    /// Vertical list with pinned section headers.
    StickyHeader(StickyHeaderLayout),
}

impl LayoutStrategy {
    /// Validate `config` and build the matching strategy.
    pub fn from_config(config: &StrategyConfig) -> LayoutResult<Self> {
        Ok(match config {
            StrategyConfig::Waterfall(c) => {
                Self::Waterfall(WaterfallLayout::from_config(c.clone())?)
            }
            StrategyConfig::Grid(c) => Self::Grid(GridLayout::from_config(c.clone())?),
            StrategyConfig::Carousel(c) => Self::Carousel(CarouselLayout::from_config(c.clone())?),
            StrategyConfig::StickyHeader(c) => {
                Self::StickyHeader(StickyHeaderLayout::from_config(c.clone())?)
            }
        })
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Waterfall(_) => "waterfall",
            Self::Grid(_) => "grid",
            Self::Carousel(_) => "carousel",
            Self::StickyHeader(_) => "sticky_header",
        }
    }

    /// Whether query results depend on the scroll position.
    pub fn is_scroll_dependent(&self) -> bool {
        matches!(self, Self::Carousel(_) | Self::StickyHeader(_))
    }

    pub(crate) fn prepare(
        &self,
        desc: &ContentDescriptor,
        provider: &dyn ItemMetadataProvider,
        cache: &mut AttributeCache,
    ) {
        match self {
            Self::Waterfall(l) => l.prepare(desc, provider, cache),
            Self::Grid(l) => l.prepare(desc, cache),
            Self::Carousel(l) => l.prepare(desc, cache),
            Self::StickyHeader(l) => l.prepare(desc, provider, cache),
        }
    }

    /// Post-processes copies of cached attributes for the current scroll state.
    pub(crate) fn decorate(
        &self,
        hits: Vec<LayoutAttributes>,
        rect: Rect,
        cache: &AttributeCache,
        desc: &ContentDescriptor,
        scroll: &ScrollState,
    ) -> Vec<LayoutAttributes> {
        match self {
            Self::Waterfall(_) | Self::Grid(_) => hits,
            Self::Carousel(l) => l.apply_scroll_effects(hits, desc.viewport.width, scroll),
            Self::StickyHeader(l) => l.pin_headers(hits, rect, cache, desc, scroll),
        }
    }

    pub(crate) fn content_insets(&self, desc: &ContentDescriptor) -> Edges {
        match self {
            Self::Carousel(l) => Edges::horizontal(l.edge_inset(desc.viewport.width)),
            _ => Edges::default(),
        }
    }
}

impl From<WaterfallLayout> for LayoutStrategy {
    fn from(value: WaterfallLayout) -> Self {
        Self::Waterfall(value)
    }
}

impl From<GridLayout> for LayoutStrategy {
    fn from(value: GridLayout) -> Self {
        Self::Grid(value)
    }
}

impl From<CarouselLayout> for LayoutStrategy {
    fn from(value: CarouselLayout) -> Self {
        Self::Carousel(value)
    }
}

impl From<StickyHeaderLayout> for LayoutStrategy {
    fn from(value: StickyHeaderLayout) -> Self {
        Self::StickyHeader(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/mod.rs"]
mod tests;
