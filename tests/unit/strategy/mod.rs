use super::*;

#[test]
fn config_is_tagged_by_kind_with_defaults() {
    let cfg: StrategyConfig = serde_json::from_str(r#"{"kind":"waterfall","columns":3}"#).unwrap();
    assert_eq!(
        cfg,
        StrategyConfig::Waterfall(WaterfallConfig {
            columns: 3,
            padding: 0.0
        })
    );

    let cfg: StrategyConfig = serde_json::from_str(r#"{"kind":"sticky_header"}"#).unwrap();
    assert_eq!(cfg, StrategyConfig::StickyHeader(StickyHeaderConfig::default()));
}

#[test]
fn from_config_validates_tunables() {
    let bad = StrategyConfig::Grid(GridConfig {
        columns: 0,
        ..GridConfig::default()
    });
    assert!(LayoutStrategy::from_config(&bad).is_err());

    let ok = StrategyConfig::Carousel(CarouselConfig::default());
    let strategy = LayoutStrategy::from_config(&ok).unwrap();
    assert_eq!(strategy.name(), "carousel");
    assert!(strategy.is_scroll_dependent());
}

#[test]
fn only_carousel_reports_content_insets() {
    let desc = ContentDescriptor::new(vec![1], kurbo::Size::new(500.0, 300.0));
    let carousel: LayoutStrategy = CarouselLayout::new(300.0, 0.0, 0.5, 0.5).unwrap().into();
    assert_eq!(carousel.content_insets(&desc), Edges::horizontal(100.0));

    let grid: LayoutStrategy = GridLayout::new(2, 0.0).unwrap().into();
    assert_eq!(grid.content_insets(&desc), Edges::default());
    assert!(!grid.is_scroll_dependent());
}
