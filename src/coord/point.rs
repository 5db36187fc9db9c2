use std::{convert::TryFrom, fmt};

use geopos_types::OutOfRange;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{lat::Latitude, lon::Longitude};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The point on the surface of an ellipsoid, represented as the pair (longitude, latitude)
pub struct Point {
    lon: Longitude,
    lat: Latitude,
}

impl Point {
    /// Construct a point from the given longitude and latitude
    pub const fn new(lon: Longitude, lat: Latitude) -> Self {
        Self { lon, lat }
    }

    /// Construct a point from the decimal degrees.
    ///
    /// # Errors
    /// The longitude is not in `-180..=180` or the latitude is not in `-90..=90`.
    pub fn with_coordinates(lon: f64, lat: f64) -> Result<Self, OutOfRange> {
        let lon = Longitude::try_from(lon)?;
        let lat = Latitude::try_from(lat)?;
        Ok(Self { lon, lat })
    }

    /// The longitude of the point
    pub const fn lon(&self) -> Longitude {
        self.lon
    }

    /// The latitude of the point
    pub const fn lat(&self) -> Latitude {
        self.lat
    }

    /// Is the point represents a pole?
    /// All the longitudes at pole are singular, so the longitude of the pole can be any meridian.
    pub fn is_pole(&self) -> bool {
        self.lat.is_pole()
    }
}

impl From<Point> for (Longitude, Latitude) {
    fn from(point: Point) -> Self {
        (point.lon, point.lat)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Long: {}, Lat: {}", self.lon, self.lat)
        } else {
            write!(f, "{} {}", self.lon, self.lat)
        }
    }
}
