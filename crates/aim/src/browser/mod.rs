//! View selection for the street-view image browser.
//!
//! The browser shows one of three content categories per (building, floor)
//! pair. All state changes go through a single reducer so that a building
//! click, a floor click and a category click each produce the next selection
//! atomically — there is no window where the floor has changed but the
//! category still points at content that no longer exists.

#[cfg(test)]
mod tests;

use crate::catalog::{Catalog, Floor, FloorRecord, HallwayImage};
use crate::link::QueryParams;

/// The three content categories of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Floorplan,
    Exterior,
    Hallways,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Floorplan, Category::Exterior, Category::Hallways];

    pub fn label(self) -> &'static str {
        match self {
            Category::Floorplan => "Floor plan",
            Category::Exterior => "Exterior",
            Category::Hallways => "Hallways",
        }
    }
}

/// A user interaction or inbound deep link, fed to [`ViewSelection::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    SelectBuilding(String),
    SelectFloor(String),
    SelectCategory(Category),
    NavPrev,
    NavNext,
}

/// What the browser is currently pointed at. Ephemeral page state: created
/// on page entry, dropped on page exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelection {
    pub building: String,
    pub floor: String,
    pub category: Category,
    pub index: usize,
}

/// Resolved content for a selection. Lookups behind this never fail; a
/// category with nothing to show resolves to [`ViewContent::Missing`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewContent<'a> {
    /// No image for the selected category; render the placeholder.
    Missing { caption: String },
    /// One image with a caption (floor plan, or a lone exterior photo).
    Single { image: &'a str, caption: String },
    /// All images shown at once as a scrolling gallery (exterior sequences).
    Gallery { images: &'a [String], caption: String },
    /// The full ordered hallway list; `index` marks the current pair.
    Hallways {
        entries: &'a [HallwayImage],
        index: usize,
    },
}

impl ViewSelection {
    /// Default selection: first building in authored order, its first floor
    /// by display order, landing on the floor plan.
    pub fn initial(catalog: &Catalog) -> Self {
        let building = catalog.default_building();
        Self {
            building: building.name.clone(),
            floor: building.first_floor().id.clone(),
            category: Category::Floorplan,
            index: 0,
        }
    }

    /// One-shot deep-link adoption on page entry. Adopt `building` if it is
    /// a catalog key; independently adopt `floor` if it names a floor of the
    /// (possibly just-adopted) building, else that building's first floor.
    /// Never fails — stale links land on defaults.
    pub fn from_params(catalog: &Catalog, params: &QueryParams) -> Self {
        let building = catalog.resolve_building(params.building.as_deref());
        let floor = building.resolve_floor(params.floor.as_deref());
        Self {
            building: building.name.clone(),
            floor: floor.id.clone(),
            category: Category::Floorplan,
            index: 0,
        }
    }

    /// The reducer. Consumes one event and returns the next selection.
    /// Events that are currently disabled (empty category, non-sequential
    /// navigation) return the selection unchanged.
    pub fn apply(&self, catalog: &Catalog, event: &BrowserEvent) -> Self {
        match event {
            BrowserEvent::SelectBuilding(name) => {
                let building = catalog.resolve_building(Some(name));
                Self {
                    building: building.name.clone(),
                    floor: building.first_floor().id.clone(),
                    category: Category::Floorplan,
                    index: 0,
                }
            }
            BrowserEvent::SelectFloor(id) => {
                let building = catalog.resolve_building(Some(&self.building));
                let floor = building.resolve_floor(Some(id));
                Self {
                    floor: floor.id.clone(),
                    category: Category::Floorplan,
                    index: 0,
                    ..self.clone()
                }
            }
            BrowserEvent::SelectCategory(category) => {
                if !self.category_enabled(catalog, *category) {
                    return self.clone();
                }
                Self {
                    category: *category,
                    index: 0,
                    ..self.clone()
                }
            }
            BrowserEvent::NavPrev => self.navigated(catalog, |index, len| {
                if index == 0 { len - 1 } else { index - 1 }
            }),
            BrowserEvent::NavNext => self.navigated(catalog, |index, len| (index + 1) % len),
        }
    }

    /// Whether a category selector should be clickable. `Floorplan` is never
    /// disabled; a missing plan shows the no-image fallback instead.
    pub fn category_enabled(&self, catalog: &Catalog, category: Category) -> bool {
        let record = self.record(catalog);
        match category {
            Category::Floorplan => true,
            Category::Exterior => !record.exterior.is_empty(),
            Category::Hallways => !record.hallways.is_empty(),
        }
    }

    /// Resolve the selection to displayable content.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> ViewContent<'a> {
        let record = self.record(catalog);
        match self.category {
            Category::Floorplan => match &record.floor_plan_image {
                Some(image) => ViewContent::Single {
                    image,
                    caption: record
                        .floor_plan_label
                        .clone()
                        .unwrap_or_else(|| format!("{} – Floor {}", self.building, self.floor)),
                },
                None => ViewContent::Missing {
                    caption: format!("No floor plan yet for {} – Floor {}", self.building, self.floor),
                },
            },
            Category::Exterior => {
                let images = record.exterior.images();
                match images {
                    [] => ViewContent::Missing {
                        caption: record.description.clone(),
                    },
                    [image] => ViewContent::Single {
                        image,
                        caption: record.description.clone(),
                    },
                    _ => ViewContent::Gallery {
                        images,
                        caption: record.description.clone(),
                    },
                }
            }
            Category::Hallways => {
                if record.hallways.is_empty() {
                    ViewContent::Missing {
                        caption: record.description.clone(),
                    }
                } else {
                    ViewContent::Hallways {
                        entries: &record.hallways,
                        index: self.index.min(record.hallways.len() - 1),
                    }
                }
            }
        }
    }

    /// Length of the current category's navigable sequence. Exterior is a
    /// gallery (all images at once) and the floor plan is a single image, so
    /// only hallways navigate.
    pub fn sequence_len(&self, catalog: &Catalog) -> usize {
        let record = self.record(catalog);
        match self.category {
            Category::Hallways => record.hallways.len(),
            Category::Floorplan | Category::Exterior => 0,
        }
    }

    fn navigated(&self, catalog: &Catalog, step: impl Fn(usize, usize) -> usize) -> Self {
        let len = self.sequence_len(catalog);
        if len <= 1 {
            return self.clone();
        }
        Self {
            index: step(self.index.min(len - 1), len),
            ..self.clone()
        }
    }

    fn record<'a>(&self, catalog: &'a Catalog) -> &'a FloorRecord {
        &self.floor_ref(catalog).record
    }

    fn floor_ref<'a>(&self, catalog: &'a Catalog) -> &'a Floor {
        catalog
            .resolve_building(Some(&self.building))
            .resolve_floor(Some(&self.floor))
    }
}
