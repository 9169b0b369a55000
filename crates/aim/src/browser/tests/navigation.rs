use super::*;

fn hallways(building: &str, floor: &str) -> ViewSelection {
    step(
        &at(building, floor),
        BrowserEvent::SelectCategory(Category::Hallways),
    )
}

#[test]
fn next_cycles_forward_modulo_sequence_length() {
    // Woodland 1 has three hallway photos.
    let mut selection = hallways("Woodland", "1");
    for expected in [1, 2, 0, 1] {
        selection = step(&selection, BrowserEvent::NavNext);
        assert_eq!(selection.index, expected);
    }
}

#[test]
fn prev_wraps_from_zero_to_the_last_entry() {
    let mut selection = hallways("Woodland", "1");
    selection = step(&selection, BrowserEvent::NavPrev);
    assert_eq!(selection.index, 2);
    selection = step(&selection, BrowserEvent::NavPrev);
    assert_eq!(selection.index, 1);
    selection = step(&selection, BrowserEvent::NavPrev);
    assert_eq!(selection.index, 0);
}

#[test]
fn prev_and_next_cancel_out() {
    let start = hallways("Sutherland", "1");
    let roundtrip = step(&step(&start, BrowserEvent::NavNext), BrowserEvent::NavPrev);
    assert_eq!(roundtrip, start);
}

#[test]
fn navigation_is_a_noop_for_single_image_categories() {
    // Floor plan is always a single image.
    let selection = at("Woodland", "1");
    assert_eq!(step(&selection, BrowserEvent::NavNext), selection);
    assert_eq!(step(&selection, BrowserEvent::NavPrev), selection);
}

#[test]
fn navigation_is_a_noop_for_the_exterior_gallery() {
    // Exterior shows all images at once; prev/next must not move an index.
    let selection = step(
        &at("Woodland", "1"),
        BrowserEvent::SelectCategory(Category::Exterior),
    );
    assert_eq!(step(&selection, BrowserEvent::NavNext), selection);
}

#[test]
fn navigation_is_a_noop_for_empty_categories() {
    // Sutherland 2 has no hallways at all; the selector is disabled, but a
    // stray nav event must still be harmless.
    let selection = ViewSelection {
        building: "Sutherland".to_string(),
        floor: "2".to_string(),
        category: Category::Hallways,
        index: 0,
    };
    assert_eq!(step(&selection, BrowserEvent::NavNext), selection);
    assert_eq!(step(&selection, BrowserEvent::NavPrev), selection);
}

#[test]
fn stale_index_is_clamped_when_resolving() {
    use crate::browser::ViewContent;
    let selection = ViewSelection {
        index: 99,
        ..hallways("Woodland", "1")
    };
    match selection.resolve(catalog()) {
        ViewContent::Hallways { entries, index } => {
            assert_eq!(index, entries.len() - 1);
        }
        other => panic!("expected hallway list, got {other:?}"),
    }
}
