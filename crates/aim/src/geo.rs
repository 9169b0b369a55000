//! Small geographic helpers for the map page.

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lng: f64,
    pub lat: f64,
}

/// Fixed map center: the PSU Abington campus.
pub const CAMPUS_CENTER: Point = Point {
    lng: -75.1652,
    lat: 40.1406,
};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Average walking speed used for route ETAs, in meters per second.
const WALKING_SPEED_M_S: f64 = 1.4;

/// Great-circle distance in meters.
pub fn haversine_m(a: Point, b: Point) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Walking time in whole minutes, rounded up, never less than one.
pub fn walk_minutes(distance_m: f64) -> u32 {
    let minutes = distance_m / (WALKING_SPEED_M_S * 60.0);
    (minutes.ceil() as u32).max(1)
}

/// Project a coordinate to local meters east/north of the campus center.
/// An equirectangular approximation is plenty at campus scale.
pub fn to_local_meters(p: Point) -> (f64, f64) {
    let x = (p.lng - CAMPUS_CENTER.lng).to_radians()
        * EARTH_RADIUS_M
        * CAMPUS_CENTER.lat.to_radians().cos();
    let y = (p.lat - CAMPUS_CENTER.lat).to_radians() * EARTH_RADIUS_M;
    (x, y)
}

/// Parse a `"lat,lng"` pair, the format of the position override.
pub fn parse_lat_lng(value: &str) -> Option<Point> {
    let (lat, lng) = value.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    Some(Point { lng, lat })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campus_center_projects_to_the_origin() {
        let (x, y) = to_local_meters(CAMPUS_CENTER);
        assert!(x.abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn distances_across_campus_are_a_few_hundred_meters() {
        // Woodland and Sutherland are neighboring campus buildings.
        let woodland = Point {
            lng: -75.1640,
            lat: 40.1411,
        };
        let sutherland = Point {
            lng: -75.1664,
            lat: 40.1399,
        };
        let d = haversine_m(woodland, sutherland);
        assert!(d > 100.0 && d < 500.0, "implausible distance {d}");
    }

    #[test]
    fn haversine_is_zero_for_identical_points() {
        assert_eq!(haversine_m(CAMPUS_CENTER, CAMPUS_CENTER), 0.0);
    }

    #[test]
    fn walk_minutes_rounds_up_and_floors_at_one() {
        assert_eq!(walk_minutes(0.0), 1);
        assert_eq!(walk_minutes(84.0), 1);
        assert_eq!(walk_minutes(85.0), 2);
        assert_eq!(walk_minutes(840.0), 10);
    }

    #[test]
    fn lat_lng_parsing_accepts_valid_pairs_and_rejects_garbage() {
        let p = parse_lat_lng("40.1406, -75.1652").expect("valid pair");
        assert_eq!(p.lat, 40.1406);
        assert_eq!(p.lng, -75.1652);

        assert!(parse_lat_lng("").is_none());
        assert!(parse_lat_lng("40.1406").is_none());
        assert!(parse_lat_lng("abc,def").is_none());
        assert!(parse_lat_lng("91.0,0.0").is_none());
        assert!(parse_lat_lng("0.0,181.0").is_none());
    }
}
