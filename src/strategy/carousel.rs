use crate::{
    engine::cache::AttributeCache,
    foundation::{
        core::{
            Point, Rect, Scale, Size, Vec2, require_finite_non_negative, require_unit_interval,
        },
        error::{LayoutError, LayoutResult},
    },
    model::{
        attributes::{ItemKey, LayoutAttributes},
        descriptor::ContentDescriptor,
        scroll::ScrollState,
    },
};

/// Tunables for [`CarouselLayout`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Width of every item.
    pub item_width: f64,
    /// Item height; defaults to the viewport height between the vertical insets.
    pub item_height: Option<f64>,
    /// Gap between neighbouring items.
    pub spacing: f64,
    /// Scale of items a full viewport width away from centre.
    pub min_scale: f64,
    /// Opacity of items a full viewport width away from centre.
    pub min_alpha: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: 200.0,
            item_height: None,
            spacing: 16.0,
            min_scale: 0.8,
            min_alpha: 0.5,
        }
    }
}

/// Horizontal strip whose items shrink and fade away from the viewport centre.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselLayout {
    config: CarouselConfig,
}

impl CarouselLayout {
    /// Carousel of `item_width`-wide items with the given decoration floors.
    pub fn new(
        item_width: f64,
        spacing: f64,
        min_scale: f64,
        min_alpha: f64,
    ) -> LayoutResult<Self> {
        Self::from_config(CarouselConfig {
            item_width,
            spacing,
            min_scale,
            min_alpha,
            ..CarouselConfig::default()
        })
    }

    /// Build from a config value.
    pub fn from_config(config: CarouselConfig) -> LayoutResult<Self> {
        if !config.item_width.is_finite() || config.item_width <= 0.0 {
            return Err(LayoutError::invalid_config(format!(
                "carousel item_width must be finite and > 0 (got {})",
                config.item_width
            )));
        }
        if let Some(h) = config.item_height {
            require_finite_non_negative("carousel item_height", h)?;
        }
        require_finite_non_negative("carousel spacing", config.spacing)?;
        require_unit_interval("carousel min_scale", config.min_scale)?;
        require_unit_interval("carousel min_alpha", config.min_alpha)?;
        Ok(Self { config })
    }

    /// Active tunables.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Leading and trailing inset that lets the first and last items sit centred.
    pub fn edge_inset(&self, viewport_width: f64) -> f64 {
        ((viewport_width - self.config.item_width) / 2.0).max(0.0)
    }

    pub(crate) fn prepare(&self, desc: &ContentDescriptor, cache: &mut AttributeCache) {
        let w = self.config.item_width;
        let inset = self.edge_inset(desc.viewport.width);
        let band = desc.content_height();
        let h = self.config.item_height.unwrap_or(band);
        let y = desc.insets.top + ((band - h) / 2.0).max(0.0);

        let mut x = inset;
        let mut placed = 0usize;
        for (section, &count) in desc.items_per_section.iter().enumerate() {
            for index in 0..count {
                if placed > 0 {
                    x += self.config.spacing;
                }
                let frame = Rect::from_origin_size((x, y), (w, h));
                cache.insert(LayoutAttributes::new(ItemKey::cell(section, index), frame));
                x += w;
                placed += 1;
            }
        }

        cache.set_content_size(Size::new(
            x + inset,
            desc.viewport.height.max(y + h + desc.insets.bottom),
        ));
    }

    /// Scale, opacity and z-order for copies of cached attributes at `scroll`.
    pub(crate) fn apply_scroll_effects(
        &self,
        mut hits: Vec<LayoutAttributes>,
        viewport_width: f64,
        scroll: &ScrollState,
    ) -> Vec<LayoutAttributes> {
        let center_x = scroll.offset.x + viewport_width / 2.0;
        for attr in &mut hits {
            let distance = (attr.center().x - center_x).abs();
            let scale = falloff(distance, viewport_width, self.config.min_scale);
            attr.transform = Scale::uniform(scale);
            attr.opacity = falloff(distance, viewport_width, self.config.min_alpha);
            attr.z_order = (scale * 100.0).round() as i32;
        }
        hits
    }

    /// Snap resolver over `cache`, searching one item step beyond the viewport.
    pub fn snap_resolver<'a>(
        &self,
        cache: &'a AttributeCache,
        viewport_width: f64,
    ) -> SnapResolver<'a> {
        SnapResolver {
            cache,
            viewport_width,
            search_slop: self.config.item_width + self.config.spacing,
        }
    }
}

/// `1` at the centre, falling linearly to `floor` one viewport width away.
fn falloff(distance: f64, viewport_width: f64, floor: f64) -> f64 {
    (1.0 - distance / viewport_width * (1.0 - floor)).max(floor)
}

/// Picks the scroll offset a paging carousel settles on after a drag.
#[derive(Clone, Copy, Debug)]
pub struct SnapResolver<'a> {
    cache: &'a AttributeCache,
    viewport_width: f64,
    search_slop: f64,
}

impl SnapResolver<'_> {
    /// Offset that centres the item closest to the centre at `proposed`.
    ///
    /// Ties go to the first item in key order. `None` when nothing is cached.
    pub fn resolve(&self, proposed: Point, velocity: Vec2) -> Option<Point> {
        tracing::trace!(x = proposed.x, vx = velocity.x, "resolving snap target");
        let center_x = proposed.x + self.viewport_width / 2.0;
        let x0 = proposed.x - self.search_slop;
        let x1 = proposed.x + self.viewport_width + self.search_slop;

        let nearby = self
            .cache
            .iter()
            .filter(|a| a.key.is_cell() && a.frame.x1 >= x0 && a.frame.x0 <= x1);
        let closest = closest_to(nearby, center_x)
            .or_else(|| closest_to(self.cache.iter().filter(|a| a.key.is_cell()), center_x))?;

        Some(Point::new(
            closest.center().x - self.viewport_width / 2.0,
            proposed.y,
        ))
    }
}

fn closest_to<'a>(
    candidates: impl Iterator<Item = &'a LayoutAttributes>,
    center_x: f64,
) -> Option<&'a LayoutAttributes> {
    let mut best: Option<(&LayoutAttributes, f64)> = None;
    for attr in candidates {
        let d = (attr.center().x - center_x).abs();
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((attr, d));
        }
    }
    best.map(|(attr, _)| attr)
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/carousel.rs"]
mod tests;
