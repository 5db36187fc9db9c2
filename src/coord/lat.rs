use std::{convert::TryFrom, fmt, ops::Neg, str::FromStr};

use geopos_types::{Axis, Error, Notation, OutOfRange, Pole};
use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{dms::Dms, parse_dmsh_re};

use super::DmshCoordinate;

lazy_static! {
    static ref RE_LATITUDE: Regex =
        Regex::new(&parse_dmsh_re(Axis::Latitude)).expect("Latitude regex is valid");
}

/// The angle measured between the equatorial plane and the point along the meridian,
/// in decimal degrees. The northern latitudes are positive, the southern ones are negative.
/// [Read more](https://en.wikipedia.org/wiki/Latitude).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Latitude(f64);

impl Latitude {
    /// Only for the values already checked to be in the range
    pub(crate) const fn from_valid(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Construct a northern latitude.
    ///
    /// # Errors
    /// Valid latitude is in the range `0 <= lat <= 90 deg`.
    pub fn north(degrees: f64) -> Result<Self, OutOfRange> {
        Self::with_angle_and_direction(degrees, Pole::North)
    }

    /// Construct a southern latitude.
    ///
    /// # Errors
    /// Valid latitude is in the range `0 <= lat <= 90 deg`.
    pub fn south(degrees: f64) -> Result<Self, OutOfRange> {
        Self::with_angle_and_direction(degrees, Pole::South)
    }

    fn with_angle_and_direction(degrees: f64, hemisphere: Pole) -> Result<Self, OutOfRange> {
        if degrees < 0.0 {
            return Err(OutOfRange::Latitude);
        }

        let value = if hemisphere.into() { degrees } else { -degrees };
        Self::try_from(value)
    }

    /// The central latitude of the sphere equidistant from the poles
    pub const fn equator() -> Self {
        Self(0.0)
    }

    /// The signed value in decimal degrees
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// The signed value in radians
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Angle between the latitude and the equator (absolute value of the latitude).
    pub fn angle_from_equator(self) -> f64 {
        self.0.abs()
    }

    /// Which pole are closer to the given latitude.
    /// The equator itself is considered northern.
    pub fn hemisphere(self) -> Pole {
        Pole::from(self.0 >= 0.0)
    }

    /// Is the given latitude belongs to a pole
    pub fn is_pole(self) -> bool {
        self.angle_from_equator() >= f64::from(Axis::Latitude.max_degrees())
    }

    /// Degrees, minutes and seconds of the [`angle_from_equator`](#method.angle_from_equator)
    /// as they are printed in the DMSH notation
    pub fn dms(self) -> Dms {
        self.to_dms().0
    }
}

impl DmshCoordinate for Latitude {
    const AXIS: Axis = Axis::Latitude;
    const NOTATION: Notation = Notation::LatitudeDmsh;

    type Direction = Pole;

    fn grammar() -> &'static Regex {
        &RE_LATITUDE
    }

    fn decimal_degrees(self) -> f64 {
        self.0
    }
}

impl From<Pole> for Latitude {
    fn from(pole: Pole) -> Self {
        let right = f64::from(Axis::Latitude.max_degrees());
        match pole {
            Pole::North => Self(right),
            Pole::South => Self(-right),
        }
    }
}

impl TryFrom<f64> for Latitude {
    type Error = OutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if Axis::Latitude.contains(value) {
            Ok(Self(value))
        } else {
            Err(OutOfRange::Latitude)
        }
    }
}

impl From<Latitude> for f64 {
    fn from(lat: Latitude) -> Self {
        lat.0
    }
}

impl Neg for Latitude {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl FromStr for Latitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_dmsh(s)
    }
}

impl fmt::Display for Latitude {
    /// Latitude in the `DD MM SS.ssss H` notation
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dmsh(f)
    }
}



#[cfg(test)]
mod bad_parse_tests {
    use geopos_types::MalformedFormat;

    use super::*;

    fn parse_err(s: &str) -> Error {
        s.parse::<Latitude>().unwrap_err()
    }

    #[test]
    fn malformed() {
        for s in [
            "test",
            "45 30 00.00",
            "45 30 00.00 A",
            "1 05 32.00 N",
            "45 5 3 E",
            "45 30 00.00 E",
            "045 30 00.00 N",
        ] {
            assert_eq!(
                parse_err(s),
                Error::MalformedFormat(MalformedFormat::new(Notation::LatitudeDmsh, s)),
                "{s}"
            );
        }
    }

    #[test]
    fn out_of_range() {
        for s in ["91 00 00.00 N", "90 01 00.00 S", "90 00 01 N", "90 00 00.1 N"] {
            assert_eq!(
                parse_err(s),
                Error::OutOfRange(OutOfRange::Latitude),
                "{s}"
            );
        }
    }
}
