use super::*;
use crate::browser::ViewContent;

#[test]
fn initial_selection_is_first_building_first_floor_floorplan() {
    let selection = ViewSelection::initial(catalog());
    assert_eq!(selection.building, "Woodland");
    assert_eq!(selection.floor, "B");
    assert_eq!(selection.category, Category::Floorplan);
    assert_eq!(selection.index, 0);
}

#[test]
fn selecting_a_building_resets_floor_and_category() {
    let selection = at("Woodland", "3");
    let selection = step(
        &step(&selection, BrowserEvent::SelectCategory(Category::Exterior)),
        BrowserEvent::SelectBuilding("Sutherland".to_string()),
    );
    assert_eq!(selection.building, "Sutherland");
    assert_eq!(selection.floor, "1");
    assert_eq!(selection.category, Category::Floorplan);
    assert_eq!(selection.index, 0);
}

#[test]
fn selecting_a_floor_resets_category_to_floorplan() {
    let mut selection = at("Woodland", "1");
    selection = step(&selection, BrowserEvent::SelectCategory(Category::Hallways));
    selection = step(&selection, BrowserEvent::NavNext);
    assert_eq!(selection.index, 1);

    selection = step(&selection, BrowserEvent::SelectFloor("2".to_string()));
    assert_eq!(selection.building, "Woodland");
    assert_eq!(selection.floor, "2");
    assert_eq!(selection.category, Category::Floorplan);
    assert_eq!(selection.index, 0);
}

#[test]
fn selecting_an_unknown_building_falls_back_to_default() {
    let selection = step(
        &at("Woodland", "2"),
        BrowserEvent::SelectBuilding("DoesNotExist".to_string()),
    );
    assert_eq!(selection.building, "Woodland");
    assert_eq!(selection.floor, "B");
}

#[test]
fn empty_categories_are_disabled_and_selecting_them_is_a_noop() {
    // Sutherland 2 has neither exterior photos nor hallways.
    let selection = at("Sutherland", "2");
    assert!(!selection.category_enabled(catalog(), Category::Exterior));
    assert!(!selection.category_enabled(catalog(), Category::Hallways));

    let after = step(&selection, BrowserEvent::SelectCategory(Category::Exterior));
    assert_eq!(after, selection);
    let after = step(&selection, BrowserEvent::SelectCategory(Category::Hallways));
    assert_eq!(after, selection);
}

#[test]
fn floorplan_is_never_disabled_even_without_a_plan_image() {
    // Woodland B has no floor plan image.
    let selection = at("Woodland", "B");
    assert!(selection.category_enabled(catalog(), Category::Floorplan));
    match selection.resolve(catalog()) {
        ViewContent::Missing { caption } => assert!(caption.contains("No floor plan")),
        other => panic!("expected missing-plan fallback, got {other:?}"),
    }
}

#[test]
fn exterior_sequence_resolves_to_a_gallery_of_all_images() {
    let mut selection = at("Woodland", "1");
    selection = step(&selection, BrowserEvent::SelectCategory(Category::Exterior));
    match selection.resolve(catalog()) {
        ViewContent::Gallery { images, caption } => {
            assert_eq!(images.len(), 3);
            assert!(caption.contains("labs and offices"));
        }
        other => panic!("expected gallery, got {other:?}"),
    }
}

#[test]
fn single_exterior_resolves_alone_with_the_floor_description() {
    let mut selection = at("Woodland", "2");
    selection = step(&selection, BrowserEvent::SelectCategory(Category::Exterior));
    match selection.resolve(catalog()) {
        ViewContent::Single { image, caption } => {
            assert!(image.ends_with("woodland-2nd-exterior.jpg"));
            assert!(caption.contains("library"));
        }
        other => panic!("expected single exterior, got {other:?}"),
    }
}

#[test]
fn hallways_resolve_to_the_full_ordered_list() {
    let mut selection = at("Woodland", "1");
    selection = step(&selection, BrowserEvent::SelectCategory(Category::Hallways));
    match selection.resolve(catalog()) {
        ViewContent::Hallways { entries, index } => {
            assert_eq!(entries.len(), 3);
            assert_eq!(index, 0);
            assert_eq!(entries[0].caption, "Hallway near front entrance");
        }
        other => panic!("expected hallway list, got {other:?}"),
    }
}

#[test]
fn every_catalog_pair_resolves_in_every_category_without_panicking() {
    for building in catalog().buildings() {
        for floor in building.floors() {
            for category in Category::ALL {
                let selection = ViewSelection {
                    building: building.name.clone(),
                    floor: floor.id.clone(),
                    category,
                    index: 0,
                };
                // Resolution must always produce something displayable.
                let _ = selection.resolve(catalog());
            }
        }
    }
}
