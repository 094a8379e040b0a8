use super::*;
use crate::{foundation::core::Edges, metadata::provider::HeightTable};

fn run(
    layout: &WaterfallLayout,
    desc: &ContentDescriptor,
    heights: &HeightTable,
) -> AttributeCache {
    let mut cache = AttributeCache::new();
    layout.prepare(desc, heights, &mut cache);
    cache
}

fn column_of(cache: &AttributeCache, key: ItemKey, column_width: f64) -> usize {
    (cache.get(&key).unwrap().frame.x0 / column_width).round() as usize
}

#[test]
fn three_column_assignment_trace() {
    let layout = WaterfallLayout::new(3, 0.0).unwrap();
    let desc = ContentDescriptor::new(vec![6], Size::new(300.0, 600.0));
    let heights = HeightTable::single(vec![100.0, 150.0, 80.0, 120.0, 90.0, 60.0]);
    let cache = run(&layout, &desc, &heights);

    let expected = [
        (0, 0.0, 100.0),
        (1, 0.0, 150.0),
        (2, 0.0, 80.0),
        (2, 80.0, 200.0),
        (0, 100.0, 190.0),
        (1, 150.0, 210.0),
    ];
    for (i, &(col, y0, y1)) in expected.iter().enumerate() {
        let key = ItemKey::cell(0, i);
        assert_eq!(column_of(&cache, key, 100.0), col, "item {i}");
        let frame = cache.get(&key).unwrap().frame;
        assert_eq!(frame.y0, y0, "item {i}");
        assert_eq!(frame.y1, y1, "item {i}");
        assert_eq!(frame.width(), 100.0);
    }
    assert_eq!(cache.content_size(), Size::new(300.0, 210.0));
}

#[test]
fn ties_go_to_lowest_column() {
    assert_eq!(shortest_column(&[0.0, 0.0, 0.0]), 0);
    assert_eq!(shortest_column(&[5.0, 3.0, 3.0]), 1);
    assert_eq!(shortest_column(&[4.0, 4.0, 1.0, 1.0]), 2);
    assert_eq!(shortest_column(&[7.0]), 0);

    // Equal heights fill columns left to right, row after row.
    let layout = WaterfallLayout::new(2, 0.0).unwrap();
    let desc = ContentDescriptor::new(vec![4], Size::new(200.0, 100.0));
    let cache = run(&layout, &desc, &HeightTable::single(vec![10.0; 4]));
    let cols: Vec<_> = (0..4)
        .map(|i| column_of(&cache, ItemKey::cell(0, i), 100.0))
        .collect();
    assert_eq!(cols, vec![0, 1, 0, 1]);
}

#[test]
fn columns_stay_within_one_item_of_each_other() {
    let mut seed = 0x2545_f491_u64;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((seed >> 33) % 300) as f64
    };

    for columns in 1..=5usize {
        let heights: Vec<f64> = (0..40).map(|_| next()).collect();
        let max_item = heights.iter().copied().fold(0.0, f64::max);
        let layout = WaterfallLayout::new(columns, 0.0).unwrap();
        let desc = ContentDescriptor::new(vec![heights.len()], Size::new(500.0, 500.0));
        let cache = run(&layout, &desc, &HeightTable::single(heights));

        let column_width = 500.0 / columns as f64;
        let mut bottoms = vec![0.0f64; columns];
        for a in cache.iter() {
            let col = (a.frame.x0 / column_width).round() as usize;
            bottoms[col] = bottoms[col].max(a.frame.y1);
        }
        let hi = bottoms.iter().copied().fold(f64::MIN, f64::max);
        let lo = bottoms.iter().copied().fold(f64::MAX, f64::min);
        assert!(hi - lo <= max_item, "columns={columns} spread={}", hi - lo);
    }
}

#[test]
fn padding_insets_displayed_frame_but_packs_full_slot() {
    let layout = WaterfallLayout::new(2, 5.0).unwrap();
    let desc = ContentDescriptor::new(vec![3], Size::new(200.0, 100.0));
    let cache = run(&layout, &desc, &HeightTable::single(vec![40.0, 20.0, 10.0]));

    let first = cache.get(&ItemKey::cell(0, 0)).unwrap().frame;
    assert_eq!(first, Rect::new(5.0, 5.0, 95.0, 45.0));
    // Column 1 slot is 30 tall, so item 2 lands there at y=30.
    let third = cache.get(&ItemKey::cell(0, 2)).unwrap().frame;
    assert_eq!(third, Rect::new(105.0, 35.0, 195.0, 45.0));
    assert_eq!(cache.content_size().height, 50.0);
}

#[test]
fn insets_offset_content_and_extend_extent() {
    let layout = WaterfallLayout::new(2, 0.0).unwrap();
    let desc = ContentDescriptor::new(vec![2], Size::new(220.0, 100.0)).with_insets(Edges {
        left: 10.0,
        right: 10.0,
        top: 8.0,
        bottom: 12.0,
    });
    let cache = run(&layout, &desc, &HeightTable::single(vec![30.0, 50.0]));
    assert_eq!(
        cache.get(&ItemKey::cell(0, 1)).unwrap().frame,
        Rect::new(110.0, 8.0, 210.0, 58.0)
    );
    assert_eq!(cache.content_size().height, 70.0);
}

#[test]
fn sections_never_interleave() {
    let layout = WaterfallLayout::new(2, 0.0).unwrap();
    let desc = ContentDescriptor::new(vec![2, 1], Size::new(200.0, 100.0));
    let heights = HeightTable {
        sections: vec![vec![100.0, 20.0], vec![10.0]],
        ..HeightTable::default()
    };
    let cache = run(&layout, &desc, &heights);
    let next = cache.get(&ItemKey::cell(1, 0)).unwrap().frame;
    assert_eq!(next.y0, 100.0);
    assert_eq!(next.x0, 0.0);
}

#[test]
fn missing_and_negative_heights_become_zero() {
    let layout = WaterfallLayout::new(1, 0.0).unwrap();
    let desc = ContentDescriptor::new(vec![3], Size::new(100.0, 100.0));
    let cache = run(&layout, &desc, &HeightTable::single(vec![-5.0, 25.0]));
    assert_eq!(cache.get(&ItemKey::cell(0, 0)).unwrap().frame.height(), 0.0);
    assert_eq!(cache.get(&ItemKey::cell(0, 1)).unwrap().frame.y0, 0.0);
    assert_eq!(cache.get(&ItemKey::cell(0, 2)).unwrap().frame.height(), 0.0);
    assert_eq!(cache.content_size().height, 25.0);
}

#[test]
fn rejects_zero_columns_and_bad_padding() {
    assert!(matches!(
        WaterfallLayout::new(0, 0.0),
        Err(LayoutError::InvalidConfig(_))
    ));
    assert!(WaterfallLayout::new(2, -1.0).is_err());
    assert!(WaterfallLayout::new(2, f64::NAN).is_err());
}
