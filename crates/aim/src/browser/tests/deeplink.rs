use super::*;

#[test]
fn valid_building_and_floor_are_adopted() {
    let selection = enter("/streetview?building=Sutherland&floor=2");
    assert_eq!(selection.building, "Sutherland");
    assert_eq!(selection.floor, "2");
    assert_eq!(selection.category, Category::Floorplan);
    // Floor 2 of Sutherland has no exterior images; entry still succeeds and
    // the category simply stays disabled.
    assert!(!selection.category_enabled(catalog(), Category::Exterior));
}

#[test]
fn unknown_building_falls_back_to_default_building_and_floor() {
    let selection = enter("/streetview?building=DoesNotExist");
    assert_eq!(selection.building, "Woodland");
    assert_eq!(selection.floor, "B");
    assert_eq!(selection.category, Category::Floorplan);
}

#[test]
fn floor_is_validated_against_the_adopted_building() {
    // Rydal has no floor 3: the floor param is ignored.
    let selection = enter("/streetview?building=Rydal&floor=3");
    assert_eq!(selection.building, "Rydal");
    assert_eq!(selection.floor, "1");
}

#[test]
fn floor_without_building_applies_to_the_default_building() {
    let selection = enter("/streetview?floor=2");
    assert_eq!(selection.building, "Woodland");
    assert_eq!(selection.floor, "2");
}

#[test]
fn directory_slugs_are_not_floor_ids_and_fall_back() {
    // QR codes carry slugs like woodland-1st; those are map-page parameters,
    // not per-building floor ids, so the browser ignores them.
    let selection = enter("/streetview?floor=woodland-1st");
    assert_eq!(selection.building, "Woodland");
    assert_eq!(selection.floor, "B");
}

#[test]
fn full_scanned_urls_are_accepted() {
    let selection = enter("https://aim.example.edu/streetview?building=Rydal&floor=2");
    assert_eq!(selection.building, "Rydal");
    assert_eq!(selection.floor, "2");
}
