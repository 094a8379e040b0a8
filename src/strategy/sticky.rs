use std::collections::BTreeSet;

use crate::{
    engine::cache::AttributeCache,
    foundation::{
        core::{Point, Rect, Size, overlaps, require_finite_non_negative},
        error::LayoutResult,
    },
    metadata::provider::{
        ItemMetadataProvider, resolve_cell_height, resolve_supplementary_height,
    },
    model::{
        attributes::{ItemKey, ItemKind, LayoutAttributes},
        descriptor::ContentDescriptor,
        scroll::ScrollState,
    },
};

/// Z-order given to pinned headers so they draw above every item.
pub const HEADER_Z_ORDER: i32 = 1024;

/// Tunables for [`StickyHeaderLayout`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StickyHeaderConfig {
    /// Header height when the metadata provider has none.
    pub header_height: f64,
    /// Footer height; 0 disables footers unless the provider supplies one.
    pub footer_height: f64,
    /// Vertical gap between items of one section.
    pub item_spacing: f64,
    /// Gap between a header and its first item.
    pub section_top_inset: f64,
    /// Gap after a section's last item.
    pub section_bottom_inset: f64,
    /// Distance from the viewport top at which headers pin (e.g. under a toolbar).
    pub viewport_top_inset: f64,
}

impl Default for StickyHeaderConfig {
    fn default() -> Self {
        Self {
            header_height: 44.0,
            footer_height: 0.0,
            item_spacing: 0.0,
            section_top_inset: 0.0,
            section_bottom_inset: 0.0,
            viewport_top_inset: 0.0,
        }
    }
}

/// Vertical list with one header per section that pins to the viewport top.
#[derive(Clone, Debug, PartialEq)]
pub struct StickyHeaderLayout {
    config: StickyHeaderConfig,
}

impl StickyHeaderLayout {
    /// Sticky list with `header_height` headers and otherwise default tunables.
    pub fn new(header_height: f64) -> LayoutResult<Self> {
        Self::from_config(StickyHeaderConfig {
            header_height,
            ..StickyHeaderConfig::default()
        })
    }

    /// Build from a config value.
    pub fn from_config(config: StickyHeaderConfig) -> LayoutResult<Self> {
        require_finite_non_negative("sticky header_height", config.header_height)?;
        require_finite_non_negative("sticky footer_height", config.footer_height)?;
        require_finite_non_negative("sticky item_spacing", config.item_spacing)?;
        require_finite_non_negative("sticky section_top_inset", config.section_top_inset)?;
        require_finite_non_negative("sticky section_bottom_inset", config.section_bottom_inset)?;
        require_finite_non_negative("sticky viewport_top_inset", config.viewport_top_inset)?;
        Ok(Self { config })
    }

    /// Active tunables.
    pub fn config(&self) -> &StickyHeaderConfig {
        &self.config
    }

    pub(crate) fn prepare(
        &self,
        desc: &ContentDescriptor,
        provider: &dyn ItemMetadataProvider,
        cache: &mut AttributeCache,
    ) {
        let cfg = &self.config;
        let x = desc.insets.left;
        let width = desc.content_width();
        let mut y = desc.insets.top;

        for (section, &count) in desc.items_per_section.iter().enumerate() {
            if count == 0 {
                continue;
            }

            let header_key = ItemKey::header(section);
            let header_h = resolve_supplementary_height(provider, &header_key, cfg.header_height);
            cache.insert(LayoutAttributes::new(
                header_key,
                Rect::from_origin_size((x, y), (width, header_h)),
            ));
            y += header_h + cfg.section_top_inset;

            for index in 0..count {
                if index > 0 {
                    y += cfg.item_spacing;
                }
                let key = ItemKey::cell(section, index);
                let h = resolve_cell_height(provider, &key);
                cache.insert(LayoutAttributes::new(
                    key,
                    Rect::from_origin_size((x, y), (width, h)),
                ));
                y += h;
            }
            y += cfg.section_bottom_inset;

            let footer_key = ItemKey::footer(section);
            let footer_h = resolve_supplementary_height(provider, &footer_key, cfg.footer_height);
            if footer_h > 0.0 {
                cache.insert(LayoutAttributes::new(
                    footer_key,
                    Rect::from_origin_size((x, y), (width, footer_h)),
                ));
                y += footer_h;
            }
        }

        cache.set_content_size(Size::new(desc.viewport.width, y + desc.insets.bottom));
    }

    /// Adds headers that draw inside `rect` or own visible items, then pins every header.
    pub(crate) fn pin_headers(
        &self,
        mut hits: Vec<LayoutAttributes>,
        rect: Rect,
        cache: &AttributeCache,
        desc: &ContentDescriptor,
        scroll: &ScrollState,
    ) -> Vec<LayoutAttributes> {
        let with_items: BTreeSet<usize> = hits
            .iter()
            .filter(|a| a.key.is_cell())
            .map(|a| a.key.section)
            .collect();
        let with_header: BTreeSet<usize> = hits
            .iter()
            .filter(|a| a.key.kind == ItemKind::Header)
            .map(|a| a.key.section)
            .collect();

        for section in 0..desc.section_count() {
            if with_header.contains(&section) {
                continue;
            }
            let Some(&header) = cache.get(&ItemKey::header(section)) else {
                continue;
            };
            if with_items.contains(&section) {
                hits.push(header);
                continue;
            }
            // A header pushed into its section's bottom inset can still reach `rect`.
            let mut pinned = header;
            self.pin(&mut pinned, cache, desc, scroll);
            if overlaps(pinned.frame, rect) {
                hits.push(header);
            }
        }

        for attr in hits.iter_mut().filter(|a| a.key.kind == ItemKind::Header) {
            self.pin(attr, cache, desc, scroll);
        }
        hits.sort_by_key(|a| a.key);
        hits
    }

    fn pin(
        &self,
        header: &mut LayoutAttributes,
        cache: &AttributeCache,
        desc: &ContentDescriptor,
        scroll: &ScrollState,
    ) {
        let section = header.key.section;
        let count = desc.item_count(section);
        if count == 0 {
            return;
        }
        let (Some(first), Some(last)) = (
            cache.get(&ItemKey::cell(section, 0)),
            cache.get(&ItemKey::cell(section, count - 1)),
        ) else {
            return;
        };

        let h = header.frame.height();
        let min_y = first.frame.y0 - h - self.config.section_top_inset;
        let max_y = (last.frame.y1 - h + self.config.section_bottom_inset).max(min_y);
        let y = (scroll.offset.y + self.config.viewport_top_inset).clamp(min_y, max_y);

        header.frame = header.frame.with_origin(Point::new(header.frame.x0, y));
        header.z_order = HEADER_Z_ORDER;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/sticky.rs"]
mod tests;
