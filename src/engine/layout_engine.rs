use crate::{
    engine::cache::AttributeCache,
    foundation::{
        core::{Edges, Point, Rect, Size, Vec2},
        error::LayoutResult,
    },
    metadata::provider::ItemMetadataProvider,
    model::{
        attributes::{ItemKey, LayoutAttributes},
        descriptor::ContentDescriptor,
        scroll::ScrollState,
    },
    strategy::{LayoutStrategy, StrategyConfig},
};

/// Owns one [`AttributeCache`] and computes it with a fixed [`LayoutStrategy`].
///
/// Calls are synchronous and the engine is not internally synchronized;
/// confine each instance to one thread.
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    strategy: LayoutStrategy,
    cache: AttributeCache,
    descriptor: Option<ContentDescriptor>,
}

impl LayoutEngine {
    /// Engine with an empty cache.
    pub fn new(strategy: impl Into<LayoutStrategy>) -> Self {
        Self {
            strategy: strategy.into(),
            cache: AttributeCache::new(),
            descriptor: None,
        }
    }

    /// Validate `config` and build an engine for it.
    pub fn from_config(config: &StrategyConfig) -> LayoutResult<Self> {
        Ok(Self::new(LayoutStrategy::from_config(config)?))
    }

    /// Active strategy.
    pub fn strategy(&self) -> &LayoutStrategy {
        &self.strategy
    }

    /// Descriptor of the last successful `prepare`.
    pub fn descriptor(&self) -> Option<&ContentDescriptor> {
        self.descriptor.as_ref()
    }

    /// Memoized attributes.
    pub fn cache(&self) -> &AttributeCache {
        &self.cache
    }

    /// Compute and cache attributes for `desc`.
    ///
    /// Invalid descriptors are rejected and leave the cache untouched. When the
    /// cache is already prepared this is a no-op; call [`Self::invalidate`] first
    /// to force a recompute.
    #[tracing::instrument(skip_all, fields(strategy = self.strategy.name()))]
    pub fn prepare(
        &mut self,
        desc: &ContentDescriptor,
        provider: &dyn ItemMetadataProvider,
    ) -> LayoutResult<()> {
        if let Err(err) = desc.validate() {
            tracing::warn!(%err, "rejecting content descriptor");
            return Err(err);
        }
        if self.cache.is_prepared() {
            return Ok(());
        }

        self.strategy.prepare(desc, provider, &mut self.cache);
        self.cache.mark_prepared();
        self.descriptor = Some(desc.clone());

        let size = self.cache.content_size();
        tracing::debug!(
            items = self.cache.len(),
            width = size.width,
            height = size.height,
            "layout prepared"
        );
        Ok(())
    }

    /// Drop every cached attribute and reset the extent to zero.
    pub fn invalidate(&mut self) {
        self.cache.clear();
        self.descriptor = None;
    }

    /// Recompute only if `desc` differs from the last prepared descriptor.
    ///
    /// Returns whether a layout pass ran.
    pub fn sync(
        &mut self,
        desc: &ContentDescriptor,
        provider: &dyn ItemMetadataProvider,
    ) -> LayoutResult<bool> {
        if self.cache.is_prepared() && self.descriptor.as_ref() == Some(desc) {
            return Ok(false);
        }
        desc.validate()?;
        self.invalidate();
        self.prepare(desc, provider)?;
        Ok(true)
    }

    /// Attributes intersecting `rect`, decorated for `scroll`, in key order.
    ///
    /// Returned values are copies; the cache is never modified.
    pub fn query(&self, rect: Rect, scroll: &ScrollState) -> Vec<LayoutAttributes> {
        let Some(desc) = self.descriptor.as_ref() else {
            return Vec::new();
        };
        let rect = rect.abs();
        let hits = self.cache.intersecting(rect).copied().collect();
        self.strategy.decorate(hits, rect, &self.cache, desc, scroll)
    }

    /// Attributes for everything inside `scroll.viewport`.
    pub fn visible_attributes(&self, scroll: &ScrollState) -> Vec<LayoutAttributes> {
        self.query(scroll.viewport, scroll)
    }

    /// Cached, undecorated attributes for `key`.
    pub fn attributes_for(&self, key: &ItemKey) -> Option<&LayoutAttributes> {
        self.cache.get(key)
    }

    /// Size of the scrollable content; zero until prepared.
    pub fn content_extent(&self) -> Size {
        self.cache.content_size()
    }

    /// Extra content insets the strategy relies on (carousel edge centering).
    ///
    /// These are already part of the frames and [`Self::content_extent`].
    pub fn content_insets(&self) -> Edges {
        self.descriptor
            .as_ref()
            .map(|desc| self.strategy.content_insets(desc))
            .unwrap_or_default()
    }

    /// Offset a drag ending at `proposed` should settle on.
    ///
    /// Only the carousel snaps; other strategies return `proposed`.
    pub fn resolve_snap_target(&self, proposed: Point, velocity: Vec2) -> Point {
        match (&self.strategy, self.descriptor.as_ref()) {
            (LayoutStrategy::Carousel(c), Some(desc)) => c
                .snap_resolver(&self.cache, desc.viewport.width)
                .resolve(proposed, velocity)
                .unwrap_or(proposed),
            _ => proposed,
        }
    }

    /// Topmost element drawn under `point` at `scroll`.
    ///
    /// Hits are tested against the drawn bounds, so scaled carousel items
    /// only claim their visible area.
    pub fn item_at(&self, point: Point, scroll: &ScrollState) -> Option<ItemKey> {
        let spot = Rect::from_center_size(point, (1e-6, 1e-6));
        self.query(scroll.viewport.union(spot), scroll)
            .into_iter()
            .filter(|a| a.render_transform().transform_rect_bbox(a.frame).contains(point))
            .max_by_key(|a| (a.z_order, a.key))
            .map(|a| a.key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/layout_engine.rs"]
mod tests;
