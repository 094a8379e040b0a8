use super::*;

fn setup(items: usize) -> (CarouselLayout, ContentDescriptor, AttributeCache) {
    let layout = CarouselLayout::new(200.0, 20.0, 0.8, 0.5).unwrap();
    let desc = ContentDescriptor::new(vec![items], Size::new(400.0, 300.0));
    let mut cache = AttributeCache::new();
    layout.prepare(&desc, &mut cache);
    (layout, desc, cache)
}

fn at(x: f64) -> ScrollState {
    ScrollState::new(Point::new(x, 0.0), Size::new(400.0, 300.0))
}

#[test]
fn base_flow_is_inset_so_edges_can_center() {
    let (layout, _, cache) = setup(3);
    assert_eq!(layout.edge_inset(400.0), 100.0);
    assert_eq!(
        cache.get(&ItemKey::cell(0, 0)).unwrap().frame,
        Rect::new(100.0, 0.0, 300.0, 300.0)
    );
    assert_eq!(cache.get(&ItemKey::cell(0, 2)).unwrap().frame.x0, 540.0);
    assert_eq!(cache.content_size(), Size::new(840.0, 300.0));
}

#[test]
fn explicit_item_height_is_vertically_centered() {
    let layout = CarouselLayout::from_config(CarouselConfig {
        item_height: Some(100.0),
        ..CarouselConfig::default()
    })
    .unwrap();
    let desc = ContentDescriptor::new(vec![1], Size::new(400.0, 300.0));
    let mut cache = AttributeCache::new();
    layout.prepare(&desc, &mut cache);
    let frame = cache.get(&ItemKey::cell(0, 0)).unwrap().frame;
    assert_eq!(frame.y0, 100.0);
    assert_eq!(frame.height(), 100.0);
}

#[test]
fn centered_item_is_full_size_and_opaque() {
    let (layout, _, cache) = setup(3);
    let hits: Vec<_> = cache.iter().copied().collect();
    let out = layout.apply_scroll_effects(hits, 400.0, &at(220.0));

    let centered = &out[1];
    assert_eq!(centered.transform, Scale::uniform(1.0));
    assert_eq!(centered.opacity, 1.0);
    assert_eq!(centered.z_order, 100);

    let left = &out[0];
    assert!((left.transform.sx - 0.89).abs() < 1e-12);
    assert!((left.opacity - 0.725).abs() < 1e-12);
    assert_eq!(left.z_order, 89);
    assert!(left.z_order < centered.z_order);
}

#[test]
fn decoration_never_increases_with_distance() {
    let (layout, _, cache) = setup(12);
    for offset in [0.0, 37.5, 220.0, 555.0, 1300.0] {
        let center_x = offset + 200.0;
        let hits = cache.iter().copied().collect();
        let mut out = layout.apply_scroll_effects(hits, 400.0, &at(offset));
        out.sort_by(|a, b| {
            let da = (a.center().x - center_x).abs();
            let db = (b.center().x - center_x).abs();
            da.total_cmp(&db)
        });
        for pair in out.windows(2) {
            assert!(pair[1].transform.sx <= pair[0].transform.sx);
            assert!(pair[1].opacity <= pair[0].opacity);
        }
        assert!(out.iter().all(|a| a.transform.sx >= 0.8 && a.opacity >= 0.5));
    }
}

#[test]
fn snap_picks_closest_item() {
    let (layout, _, cache) = setup(5);
    let snap = layout.snap_resolver(&cache, 400.0);
    let target = snap.resolve(Point::new(150.0, 7.0), Vec2::new(-30.0, 0.0)).unwrap();
    assert_eq!(target, Point::new(220.0, 7.0));
}

#[test]
fn snap_tie_goes_to_first_item() {
    let (layout, _, cache) = setup(5);
    let snap = layout.snap_resolver(&cache, 400.0);
    // Centre 310 is exactly between item 0 (200) and item 1 (420).
    let target = snap.resolve(Point::new(110.0, 0.0), Vec2::ZERO).unwrap();
    assert_eq!(target.x, 0.0);
}

#[test]
fn snap_past_the_end_falls_back_to_last_item() {
    let (layout, _, cache) = setup(3);
    let snap = layout.snap_resolver(&cache, 400.0);
    let target = snap.resolve(Point::new(10_000.0, 0.0), Vec2::new(900.0, 0.0)).unwrap();
    assert_eq!(target.x, 440.0);
}

#[test]
fn snap_on_empty_cache_is_none() {
    let (layout, _, cache) = setup(0);
    assert!(layout.snap_resolver(&cache, 400.0).resolve(Point::ZERO, Vec2::ZERO).is_none());
}

#[test]
fn rejects_out_of_range_floors() {
    assert!(CarouselLayout::new(0.0, 0.0, 0.5, 0.5).is_err());
    assert!(CarouselLayout::new(100.0, 0.0, 1.5, 0.5).is_err());
    assert!(CarouselLayout::new(100.0, 0.0, 0.5, -0.1).is_err());
    assert!(CarouselLayout::new(100.0, -1.0, 0.5, 0.5).is_err());
}
