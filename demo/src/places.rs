//! Places shown by the showcase maps.

use staticmaps::{Error, GeoPoint, lat_lon};

/// Icons hosted next to the sources of the original Android application.
const ICONS_URL: &str =
    "http://raw.githubusercontent.com/renaudcerrato/static-maps-api/master/app/src/main/res/drawable/";

pub fn icon(name: &str) -> String {
    format!("{ICONS_URL}{name}.png")
}

/// Hook & Ladder 8, the Ghostbusters' firehouse.
/// https://en.wikipedia.org/wiki/Hook_%26_Ladder_8_Firehouse
pub fn firehouse() -> GeoPoint {
    lat_lon(40.7195532, -74.0067987)
}

/// New York Public Library, where the movie opens.
pub fn public_library() -> GeoPoint {
    lat_lon(40.7529234, -73.9827515)
}

/// Geocoded by the provider.
pub fn address(address: &'static str) -> Result<GeoPoint, Error> {
    GeoPoint::from_address(address)
}
