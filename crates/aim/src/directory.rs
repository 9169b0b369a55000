//! The fixed floor directory behind the QR code pages.
//!
//! QR payloads never carry arbitrary user text; every floor id that can end
//! up inside a code comes from this table. Each entry also records which
//! catalog building/floor the slug stands for, so in-app navigation can
//! translate a slug into explicit `building`/`floor` parameters.

/// One row of the directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorEntry {
    /// Slug used in deep links, e.g. `woodland-1st`.
    pub id: &'static str,
    /// Human label, e.g. `Woodland 1st Floor`.
    pub label: &'static str,
    /// Catalog building name this slug belongs to.
    pub building: &'static str,
    /// Catalog floor identifier within that building.
    pub floor: &'static str,
}

pub const FLOOR_DIRECTORY: [FloorEntry; 8] = [
    FloorEntry {
        id: "woodland-1st",
        label: "Woodland 1st Floor",
        building: "Woodland",
        floor: "1",
    },
    FloorEntry {
        id: "woodland-2nd",
        label: "Woodland 2nd Floor",
        building: "Woodland",
        floor: "2",
    },
    FloorEntry {
        id: "woodland-3rd",
        label: "Woodland 3rd Floor",
        building: "Woodland",
        floor: "3",
    },
    FloorEntry {
        id: "sutherland-1st",
        label: "Sutherland 1st Floor",
        building: "Sutherland",
        floor: "1",
    },
    FloorEntry {
        id: "sutherland-2nd",
        label: "Sutherland 2nd Floor",
        building: "Sutherland",
        floor: "2",
    },
    FloorEntry {
        id: "sutherland-3rd",
        label: "Sutherland 3rd Floor",
        building: "Sutherland",
        floor: "3",
    },
    FloorEntry {
        id: "rydal-1st",
        label: "Rydal 1st Floor",
        building: "Rydal",
        floor: "1",
    },
    FloorEntry {
        id: "rydal-2nd",
        label: "Rydal 2nd Floor",
        building: "Rydal",
        floor: "2",
    },
];

pub fn entry(id: &str) -> Option<&'static FloorEntry> {
    FLOOR_DIRECTORY.iter().find(|e| e.id == id)
}

/// Human label for a floor slug; unknown slugs get a generic label rather
/// than an error.
pub fn floor_label(id: &str) -> &'static str {
    entry(id).map(|e| e.label).unwrap_or("Unknown Floor")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn known_slugs_resolve_to_their_labels() {
        assert_eq!(floor_label("woodland-1st"), "Woodland 1st Floor");
        assert_eq!(floor_label("rydal-2nd"), "Rydal 2nd Floor");
    }

    #[test]
    fn unknown_slugs_resolve_to_the_generic_label() {
        assert_eq!(floor_label("atrium-9th"), "Unknown Floor");
        assert_eq!(floor_label(""), "Unknown Floor");
    }

    #[test]
    fn every_entry_points_at_a_real_catalog_floor() {
        let catalog = Catalog::shared();
        for entry in &FLOOR_DIRECTORY {
            let building = catalog
                .building(entry.building)
                .unwrap_or_else(|| panic!("missing building {}", entry.building));
            assert!(
                building.floor(entry.floor).is_some(),
                "missing floor {} in {}",
                entry.floor,
                entry.building
            );
        }
    }

    #[test]
    fn slugs_are_unique() {
        for (i, entry) in FLOOR_DIRECTORY.iter().enumerate() {
            assert!(
                !FLOOR_DIRECTORY[i + 1..].iter().any(|e| e.id == entry.id),
                "duplicate slug {}",
                entry.id
            );
        }
    }
}
