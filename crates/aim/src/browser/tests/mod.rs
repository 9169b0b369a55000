mod deeplink;
mod navigation;
mod selection;

use super::{BrowserEvent, Category, ViewSelection};
use crate::catalog::Catalog;
use crate::link::Route;

/// Shared catalog for the whole suite.
fn catalog() -> &'static Catalog {
    Catalog::shared()
}

/// Selection pointing at a known (building, floor) pair.
fn at(building: &str, floor: &str) -> ViewSelection {
    ViewSelection {
        building: building.to_string(),
        floor: floor.to_string(),
        category: Category::Floorplan,
        index: 0,
    }
}

/// Apply a single event.
fn step(selection: &ViewSelection, event: BrowserEvent) -> ViewSelection {
    selection.apply(catalog(), &event)
}

/// Build a selection the way the page does on entry: parse the route string
/// and adopt its parameters.
fn enter(route: &str) -> ViewSelection {
    let (_, params) = Route::parse(route);
    ViewSelection::from_params(catalog(), &params)
}
