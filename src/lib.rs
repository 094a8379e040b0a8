//! Collection layout engine for scrollable grids and lists.
//!
//! The engine turns a content snapshot ([`ContentDescriptor`]) plus item
//! measurements ([`ItemMetadataProvider`]) into per-item geometry
//! ([`LayoutAttributes`]). Rendering, text measurement and gestures belong to
//! the host; this crate only computes where things go.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: `ContentDescriptor + provider -> AttributeCache` (once per descriptor)
//! 2. **Query**: `Rect + ScrollState -> Vec<LayoutAttributes>` (every scroll frame)
//! 3. **Invalidate**: drop the cache when content or bounds change
//!
//! Four strategies are available through [`LayoutStrategy`]:
//!
//! - [`WaterfallLayout`]: masonry columns, shortest column first.
//! - [`GridLayout`]: uniform row-major grid.
//! - [`CarouselLayout`]: horizontal strip that scales and fades away from
//!   the centre, with [`SnapResolver`] for paging.
//! - [`StickyHeaderLayout`]: vertical list whose section headers pin to the
//!   top of the viewport.
//!
//! Query-time decoration always works on copies, so repeated queries at
//! different offsets are independent of each other.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod engine;
mod foundation;
mod metadata;
mod model;
mod strategy;

pub use config::job::LayoutJob;
pub use engine::cache::AttributeCache;
pub use engine::layout_engine::LayoutEngine;
pub use foundation::core::{Affine, Edges, Point, Rect, Scale, Size, Vec2};
pub use foundation::error::{LayoutError, LayoutResult};
pub use metadata::provider::{FixedHeight, HeightTable, ItemMetadataProvider};
pub use model::attributes::{ItemKey, ItemKind, LayoutAttributes};
pub use model::descriptor::ContentDescriptor;
pub use model::scroll::ScrollState;
pub use strategy::carousel::{CarouselConfig, CarouselLayout, SnapResolver};
pub use strategy::grid::{GridConfig, GridLayout};
pub use strategy::sticky::{HEADER_Z_ORDER, StickyHeaderConfig, StickyHeaderLayout};
pub use strategy::waterfall::{WaterfallConfig, WaterfallLayout};
pub use strategy::{LayoutStrategy, StrategyConfig};
