// Checks the canonical icon table against the iOS asset catalog requirements
use std::collections::HashSet;
use irize::icon_spec::{app_icon_specs, find_spec, Idiom};

#[test]
fn test_table_matches_required_slots() {
    let ids: Vec<&str> = app_icon_specs().iter().map(|s| s.identifier).collect();
    assert_eq!(
        ids,
        vec![
            "Icon-20@2x",
            "Icon-20@3x",
            "Icon-29@2x",
            "Icon-29@3x",
            "Icon-40@2x",
            "Icon-40@3x",
            "Icon-60@2x",
            "Icon-60@3x",
            "Icon-iPad-20",
            "Icon-iPad-20@2x",
            "Icon-iPad-29",
            "Icon-iPad-29@2x",
            "Icon-iPad-40",
            "Icon-iPad-40@2x",
            "Icon-iPad-76",
            "Icon-iPad-76@2x",
            "Icon-iPad-83.5@2x",
            "Icon-1024",
        ]
    );
}

#[test]
fn test_identifiers_are_unique() {
    let mut seen = HashSet::new();
    for spec in app_icon_specs() {
        assert!(seen.insert(spec.identifier), "duplicate identifier {}", spec.identifier);
    }
}

#[test]
fn test_pixel_size_matches_points_and_scale() {
    for spec in app_icon_specs() {
        let expected = (spec.point_size * spec.scale as f32).round() as u32;
        assert_eq!(spec.pixel_size, expected, "{}", spec.identifier);
        assert!(spec.pixel_size > 0);
        assert!((1..=3).contains(&spec.scale));
    }
}

#[test]
fn test_iphone_sizes() {
    let mut sizes: Vec<u32> = app_icon_specs()
        .iter()
        .filter(|s| s.idiom == Idiom::IPhone)
        .map(|s| s.pixel_size)
        .collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![40, 58, 60, 80, 87, 120, 120, 180]);
}

#[test]
fn test_ipad_sizes() {
    let mut sizes: Vec<u32> = app_icon_specs()
        .iter()
        .filter(|s| s.idiom == Idiom::IPad)
        .map(|s| s.pixel_size)
        .collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![20, 29, 40, 40, 58, 76, 80, 152, 167]);
}

#[test]
fn test_single_store_icon() {
    let store: Vec<_> = app_icon_specs()
        .iter()
        .filter(|s| s.idiom == Idiom::Marketing)
        .collect();
    assert_eq!(store.len(), 1);
    assert_eq!(store[0].pixel_size, 1024);
    assert_eq!(store[0].scale, 1);
}

#[test]
fn test_find_spec() {
    let spec = find_spec("Icon-60@3x").expect("iPhone app icon");
    assert_eq!(spec.pixel_size, 180);
    assert_eq!(spec.idiom, Idiom::IPhone);
}
