//! Types and functions for working with positions.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Error;

/// Geographical location of a map element. Either a free-form address, geocoded by the
/// provider, or a latitude/longitude pair.
#[derive(Debug, Clone)]
pub struct GeoPoint(Location);

#[derive(Debug, Clone)]
enum Location {
    Address(String),
    Coordinates { latitude: f64, longitude: f64 },
}

/// Construct [`GeoPoint`] from latitude and longitude.
pub fn lat_lon(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::from_coordinates(lat, lon)
}

impl GeoPoint {
    /// Location described by an address, e.g. `"Tour Eiffel"` or `"Columbia University, NYC"`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the address is empty.
    pub fn from_address(address: impl Into<String>) -> Result<Self, Error> {
        let address = address.into();
        if address.is_empty() {
            return Err(Error::InvalidArgument("address can't be empty"));
        }
        Ok(Self(Location::Address(address)))
    }

    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self(Location::Coordinates {
            latitude,
            longitude,
        })
    }

    /// Whether this point was constructed from a latitude/longitude pair.
    pub fn has_coordinates(&self) -> bool {
        matches!(self.0, Location::Coordinates { .. })
    }

    /// Latitude and longitude, if the point is not an address.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self.0 {
            Location::Coordinates {
                latitude,
                longitude,
            } => Some((latitude, longitude)),
            Location::Address(_) => None,
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates().map(|(latitude, _)| latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates().map(|(_, longitude)| longitude)
    }

    pub fn address(&self) -> Option<&str> {
        match &self.0 {
            Location::Address(address) => Some(address),
            Location::Coordinates { .. } => None,
        }
    }
}

/// Canonical form used in request parameters: `lat,lon` with six decimal places, or the
/// address verbatim. Percent-encoding happens later, when the query is assembled.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Location::Address(address) => f.write_str(address),
            Location::Coordinates {
                latitude,
                longitude,
            } => write!(f, "{latitude:.6},{longitude:.6}"),
        }
    }
}

// Coordinates are compared bitwise, which keeps `Eq` and `Hash` consistent.
impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Location::Address(a), Location::Address(b)) => a == b,
            (
                Location::Coordinates {
                    latitude: lat_a,
                    longitude: lon_a,
                },
                Location::Coordinates {
                    latitude: lat_b,
                    longitude: lon_b,
                },
            ) => lat_a.to_bits() == lat_b.to_bits() && lon_a.to_bits() == lon_b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Location::Address(address) => {
                0u8.hash(state);
                address.hash(state);
            }
            Location::Coordinates {
                latitude,
                longitude,
            } => {
                1u8.hash(state);
                latitude.to_bits().hash(state);
                longitude.to_bits().hash(state);
            }
        }
    }
}

/// `(latitude, longitude)` tuple.
impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::from_coordinates(latitude, longitude)
    }
}

/// Note that `geo_types` stores the longitude as `x` and the latitude as `y`.
impl From<geo_types::Point<f64>> for GeoPoint {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::from_coordinates(point.y(), point.x())
    }
}

impl From<geo_types::Coord<f64>> for GeoPoint {
    fn from(coord: geo_types::Coord<f64>) -> Self {
        Self::from_coordinates(coord.y, coord.x)
    }
}
