//! Route strings and deep-link payloads.
//!
//! The app navigates between pages the way the original site did: every
//! destination is a route string like `/streetview?building=Woodland&floor=2`.
//! Routes arrive from the command line (a scanned QR code's URL pasted or
//! opened through a handler) and from in-app navigation.

/// A page of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Map,
    StreetView,
    Floors,
    Floor(String),
    Faq,
}

/// Query parameters consumed on page entry. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub building: Option<String>,
    pub floor: Option<String>,
}

impl Route {
    /// Parse a route string or a full URL into a route and its query
    /// parameters. Any unmatched path resolves to the home page.
    pub fn parse(input: &str) -> (Route, QueryParams) {
        let path_and_query = strip_origin(input.trim());
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path_and_query, None),
        };

        let params = query.map(parse_query).unwrap_or_default();
        let path = path.trim_end_matches('/');

        let route = match path {
            "" => Route::Home,
            "/map" => Route::Map,
            "/streetview" => Route::StreetView,
            "/floors" => Route::Floors,
            "/faq" => Route::Faq,
            _ => match path.strip_prefix("/floors/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::Floor(percent_decode(id))
                }
                // Unmatched routes redirect home.
                _ => Route::Home,
            },
        };

        (route, params)
    }
}

/// Deep-link payload encoded into a floor's QR code: opens the map focused
/// on that floor.
pub fn map_link(origin: &str, floor_id: &str) -> String {
    format!("{}/map?floor={}", origin.trim_end_matches('/'), floor_id)
}

/// Secondary navigation target: the image browser for a floor.
pub fn streetview_link(origin: &str, floor_id: &str) -> String {
    format!(
        "{}/streetview?floor={}",
        origin.trim_end_matches('/'),
        floor_id
    )
}

/// Drop a `scheme://host[:port]` prefix so full URLs parse like routes.
fn strip_origin(input: &str) -> &str {
    if let Some(scheme_end) = input.find("://") {
        let rest = &input[scheme_end + 3..];
        match rest.find('/') {
            Some(slash) => &rest[slash..],
            None => "",
        }
    } else {
        input
    }
}

fn parse_query(query: &str) -> QueryParams {
    let mut params = QueryParams::default();
    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => continue,
        };
        let value = percent_decode(value);
        match key {
            "building" => params.building = Some(value),
            "floor" => params.floor = Some(value),
            _ => {}
        }
    }
    params
}

/// Minimal percent decoding (plus `+` as space), enough for the two known
/// parameters. Malformed escapes pass through unchanged.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 3 <= bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi * 16 + lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}
