use std::cmp::Ordering;
use std::sync::LazyLock;

/// Exterior content for a floor. Some floors have a single photo, others an
/// ordered walk-around sequence; the variant makes the difference explicit
/// instead of leaving it to runtime shape checks.
#[derive(Debug, Clone, PartialEq)]
pub enum Exterior {
    None,
    Single(String),
    Sequence(Vec<String>),
}

impl Default for Exterior {
    fn default() -> Self {
        Exterior::None
    }
}

impl Exterior {
    pub fn is_empty(&self) -> bool {
        match self {
            Exterior::None => true,
            Exterior::Single(_) => false,
            Exterior::Sequence(images) => images.is_empty(),
        }
    }

    /// All exterior images in order, regardless of variant.
    pub fn images(&self) -> &[String] {
        match self {
            Exterior::None => &[],
            Exterior::Single(image) => std::slice::from_ref(image),
            Exterior::Sequence(images) => images,
        }
    }
}

/// One hallway photo with its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct HallwayImage {
    pub image: String,
    pub caption: String,
}

impl HallwayImage {
    fn new(image: &str, caption: &str) -> Self {
        Self {
            image: image.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// Everything the image browser can show for one floor. Absent or empty
/// categories mean "no content", never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloorRecord {
    pub floor_plan_image: Option<String>,
    pub floor_plan_label: Option<String>,
    pub exterior: Exterior,
    pub description: String,
    pub hallways: Vec<HallwayImage>,
}

#[derive(Debug, Clone)]
pub struct Floor {
    pub id: String,
    pub record: FloorRecord,
}

#[derive(Debug, Clone)]
pub struct Building {
    pub name: String,
    floors: Vec<Floor>,
}

impl Building {
    fn new(name: &str, mut floors: Vec<Floor>) -> Self {
        floors.sort_by(|a, b| compare_floor_ids(&a.id, &b.id));
        Self {
            name: name.to_string(),
            floors,
        }
    }

    /// Floors in display order ("B" first, then numeric ascending).
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor(&self, id: &str) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id == id)
    }

    /// First floor by display order. Every building in the catalog has at
    /// least one floor.
    pub fn first_floor(&self) -> &Floor {
        &self.floors[0]
    }

    /// Floor lookup with the silent-fallback policy: an unknown or missing
    /// id resolves to the first floor by display order.
    pub fn resolve_floor(&self, id: Option<&str>) -> &Floor {
        id.and_then(|id| self.floor(id))
            .unwrap_or_else(|| self.first_floor())
    }
}

/// The static building/floor lookup table. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    buildings: Vec<Building>,
}

impl Catalog {
    /// The process-wide catalog.
    pub fn shared() -> &'static Catalog {
        static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::builtin);
        &CATALOG
    }

    /// Buildings in authored order. The first entry is the default building
    /// for deep links that name no (or an unknown) building.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn building(&self, name: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.name == name)
    }

    pub fn default_building(&self) -> &Building {
        &self.buildings[0]
    }

    /// Building lookup with the silent-fallback policy: stale or malformed
    /// deep links resolve to the default building rather than erroring.
    pub fn resolve_building(&self, name: Option<&str>) -> &Building {
        name.and_then(|name| self.building(name))
            .unwrap_or_else(|| self.default_building())
    }

    fn builtin() -> Catalog {
        let woodland = Building::new(
            "Woodland",
            vec![
                Floor {
                    id: "B".to_string(),
                    record: FloorRecord {
                        floor_plan_image: None,
                        floor_plan_label: None,
                        exterior: Exterior::None,
                        description: "Woodland basement – mechanical rooms and storage."
                            .to_string(),
                        hallways: Vec::new(),
                    },
                },
                Floor {
                    id: "1".to_string(),
                    record: FloorRecord {
                        floor_plan_image: Some("images/woodland-1st-plan.png".to_string()),
                        floor_plan_label: Some("Woodland 1st Floor plan".to_string()),
                        exterior: Exterior::Sequence(vec![
                            "images/woodland-1st-exterior.jpg".to_string(),
                            "images/woodland-entrance-north.jpg".to_string(),
                            "images/woodland-entrance-south.jpg".to_string(),
                        ]),
                        description: "Woodland 1st Floor – labs and offices.".to_string(),
                        hallways: vec![
                            HallwayImage::new(
                                "images/woodland-1st-hallway1.jpg",
                                "Hallway near front entrance",
                            ),
                            HallwayImage::new(
                                "images/woodland-1st-hallway2.jpg",
                                "Main corridor toward the labs",
                            ),
                            HallwayImage::new(
                                "images/woodland-1st-hallway3.jpg",
                                "Stairwell landing, south end",
                            ),
                        ],
                    },
                },
                Floor {
                    id: "2".to_string(),
                    record: FloorRecord {
                        floor_plan_image: Some("images/woodland-2nd-plan.png".to_string()),
                        floor_plan_label: Some("Woodland 2nd Floor plan".to_string()),
                        exterior: Exterior::Single(
                            "images/woodland-2nd-exterior.jpg".to_string(),
                        ),
                        description: "Woodland 2nd Floor – library and lounge.".to_string(),
                        hallways: Vec::new(),
                    },
                },
                Floor {
                    id: "3".to_string(),
                    record: FloorRecord {
                        floor_plan_image: Some("images/woodland-3rd-plan.png".to_string()),
                        floor_plan_label: Some("Woodland 3rd Floor plan".to_string()),
                        exterior: Exterior::Single(
                            "images/woodland-3rd-exterior.jpg".to_string(),
                        ),
                        description: "Woodland 3rd Floor – staff offices.".to_string(),
                        hallways: Vec::new(),
                    },
                },
            ],
        );

        let sutherland = Building::new(
            "Sutherland",
            vec![
                Floor {
                    id: "1".to_string(),
                    record: FloorRecord {
                        floor_plan_image: Some("images/sutherland-1st-plan.png".to_string()),
                        floor_plan_label: Some("Sutherland 1st Floor plan".to_string()),
                        exterior: Exterior::Single(
                            "images/sutherland-1st-exterior.jpg".to_string(),
                        ),
                        description: "Sutherland 1st Floor – main lobby.".to_string(),
                        hallways: vec![
                            HallwayImage::new(
                                "images/sutherland-1st-hallway1.jpg",
                                "Lobby corridor toward the auditorium",
                            ),
                            HallwayImage::new(
                                "images/sutherland-1st-hallway2.jpg",
                                "East wing, near the elevators",
                            ),
                        ],
                    },
                },
                Floor {
                    id: "2".to_string(),
                    record: FloorRecord {
                        floor_plan_image: Some("images/sutherland-2nd-plan.png".to_string()),
                        floor_plan_label: Some("Sutherland 2nd Floor plan".to_string()),
                        // No exterior photos exist for this floor; the
                        // category stays disabled in the browser.
                        exterior: Exterior::None,
                        description: "Sutherland 2nd Floor – classrooms.".to_string(),
                        hallways: Vec::new(),
                    },
                },
                Floor {
                    id: "3".to_string(),
                    record: FloorRecord {
                        floor_plan_image: Some("images/sutherland-3rd-plan.png".to_string()),
                        floor_plan_label: Some("Sutherland 3rd Floor plan".to_string()),
                        exterior: Exterior::Single(
                            "images/sutherland-3rd-exterior.jpg".to_string(),
                        ),
                        description: "Sutherland 3rd Floor – advanced labs.".to_string(),
                        hallways: Vec::new(),
                    },
                },
            ],
        );

        let rydal = Building::new(
            "Rydal",
            vec![
                Floor {
                    id: "1".to_string(),
                    record: FloorRecord {
                        floor_plan_image: Some("images/rydal-1st-plan.png".to_string()),
                        floor_plan_label: Some("Rydal 1st Floor plan".to_string()),
                        exterior: Exterior::Single("images/rydal-1st-exterior.jpg".to_string()),
                        description: "Rydal 1st Floor – lounge area.".to_string(),
                        hallways: Vec::new(),
                    },
                },
                Floor {
                    id: "2".to_string(),
                    record: FloorRecord {
                        floor_plan_image: None,
                        floor_plan_label: None,
                        exterior: Exterior::Single("images/rydal-2nd-exterior.jpg".to_string()),
                        description: "Rydal 2nd Floor – offices, smaller labs.".to_string(),
                        hallways: Vec::new(),
                    },
                },
            ],
        );

        Catalog {
            buildings: vec![woodland, sutherland, rydal],
        }
    }
}

/// Display order for floor identifiers: "B" sorts first, all-numeric ids
/// sort ascending numerically, anything else comes last lexicographically.
pub fn compare_floor_ids(a: &str, b: &str) -> Ordering {
    floor_sort_key(a).cmp(&floor_sort_key(b))
}

fn floor_sort_key(id: &str) -> (u8, i64, &str) {
    if id == "B" {
        return (0, 0, "");
    }
    match id.parse::<i64>() {
        Ok(n) => (1, n, ""),
        Err(_) => (2, 0, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_sort_puts_basement_first_then_numeric_ascending() {
        let mut ids = vec!["2", "B", "1", "10"];
        ids.sort_by(|a, b| compare_floor_ids(a, b));
        assert_eq!(ids, vec!["B", "1", "2", "10"]);
    }

    #[test]
    fn floor_sort_handles_the_full_documented_set() {
        let mut ids = vec!["10", "3", "B", "2", "1"];
        ids.sort_by(|a, b| compare_floor_ids(a, b));
        assert_eq!(ids, vec!["B", "1", "2", "3", "10"]);
    }

    #[test]
    fn non_numeric_ids_sort_after_numeric_ones() {
        let mut ids = vec!["M", "1", "B", "2"];
        ids.sort_by(|a, b| compare_floor_ids(a, b));
        assert_eq!(ids, vec!["B", "1", "2", "M"]);
    }

    #[test]
    fn builtin_catalog_has_unique_buildings_and_floors() {
        let catalog = Catalog::shared();
        let names: Vec<_> = catalog.buildings().iter().map(|b| &b.name).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);

        for building in catalog.buildings() {
            let ids: Vec<_> = building.floors().iter().map(|f| &f.id).collect();
            for (i, id) in ids.iter().enumerate() {
                assert!(
                    !ids[i + 1..].contains(id),
                    "duplicate floor {id} in {}",
                    building.name
                );
            }
        }
    }

    #[test]
    fn every_catalog_pair_resolves_without_error() {
        let catalog = Catalog::shared();
        for building in catalog.buildings() {
            for floor in building.floors() {
                let resolved = catalog
                    .resolve_building(Some(&building.name))
                    .resolve_floor(Some(&floor.id));
                assert_eq!(resolved.id, floor.id);
                assert!(!resolved.record.description.is_empty());
            }
        }
    }

    #[test]
    fn unknown_building_falls_back_to_default() {
        let catalog = Catalog::shared();
        let resolved = catalog.resolve_building(Some("DoesNotExist"));
        assert_eq!(resolved.name, catalog.default_building().name);
    }

    #[test]
    fn unknown_floor_falls_back_to_first_by_display_order() {
        let catalog = Catalog::shared();
        let woodland = catalog.resolve_building(Some("Woodland"));
        assert_eq!(woodland.resolve_floor(Some("99")).id, "B");
        assert_eq!(woodland.resolve_floor(None).id, "B");
    }

    #[test]
    fn exterior_images_flatten_both_variants() {
        assert!(Exterior::None.images().is_empty());
        assert_eq!(
            Exterior::Single("a.jpg".to_string()).images(),
            ["a.jpg".to_string()]
        );
        let seq = Exterior::Sequence(vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        assert_eq!(seq.images().len(), 2);
        assert!(!seq.is_empty());
        assert!(Exterior::Sequence(Vec::new()).is_empty());
    }

    #[test]
    fn woodland_floors_are_in_display_order() {
        let catalog = Catalog::shared();
        let woodland = catalog.resolve_building(Some("Woodland"));
        let ids: Vec<_> = woodland.floors().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["B", "1", "2", "3"]);
    }
}
