use std::{convert::TryFrom, fmt, ops::Neg, str::FromStr};

use geopos_types::{Axis, Error, Notation, OutOfRange, RotationalDirection};
use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{dms::Dms, parse_dmsh_re};

use super::DmshCoordinate;

lazy_static! {
    static ref RE_LONGITUDE: Regex =
        Regex::new(&parse_dmsh_re(Axis::Longitude)).expect("Longitude regex is valid");
}

/// The angle measured on the equatorial plane between the meridian of the point
/// and the prime meridian (Greenwich, UK), in decimal degrees.
/// The eastern longitudes are positive, the western ones are negative.
/// [Read more](https://en.wikipedia.org/wiki/Longitude).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Longitude(f64);

impl Longitude {
    /// Only for the values already checked to be in the range
    pub(crate) const fn from_valid(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Construct an eastern longitude.
    ///
    /// # Errors
    /// Valid longitude is in the range `0 <= lon <= 180 deg`.
    pub fn east(degrees: f64) -> Result<Self, OutOfRange> {
        Self::with_angle_and_direction(degrees, RotationalDirection::East)
    }

    /// Construct a western longitude.
    ///
    /// # Errors
    /// Valid longitude is in the range `0 <= lon <= 180 deg`.
    pub fn west(degrees: f64) -> Result<Self, OutOfRange> {
        Self::with_angle_and_direction(degrees, RotationalDirection::West)
    }

    fn with_angle_and_direction(
        degrees: f64,
        direction: RotationalDirection,
    ) -> Result<Self, OutOfRange> {
        if degrees < 0.0 {
            return Err(OutOfRange::Longitude);
        }

        let value = if direction.into() { degrees } else { -degrees };
        Self::try_from(value)
    }

    /// The chosen by convention [0-meridian](https://en.wikipedia.org/wiki/Prime_meridian)
    pub const fn prime() -> Self {
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

    /// Angle between the longitude and the prime meridian (absolute value of the longitude).
    pub fn angle(self) -> f64 {
        self.0.abs()
    }

    /// In which direction (from the prime) should we move to reach the longitude.
    /// The prime meridian itself is considered eastern.
    pub fn direction(self) -> RotationalDirection {
        RotationalDirection::from(self.0 >= 0.0)
    }

    /// Degrees, minutes and seconds of the [`angle`](#method.angle)
    /// as they are printed in the DMSH notation
    pub fn dms(self) -> Dms {
        self.to_dms().0
    }
}

impl DmshCoordinate for Longitude {
    const AXIS: Axis = Axis::Longitude;
    const NOTATION: Notation = Notation::LongitudeDmsh;

    type Direction = RotationalDirection;

    fn grammar() -> &'static Regex {
        &RE_LONGITUDE
    }

    fn decimal_degrees(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Longitude {
    type Error = OutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if Axis::Longitude.contains(value) {
            Ok(Self(value))
        } else {
            Err(OutOfRange::Longitude)
        }
    }
}

impl From<Longitude> for f64 {
    fn from(lon: Longitude) -> Self {
        lon.0
    }
}

impl Neg for Longitude {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl FromStr for Longitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_dmsh(s)
    }
}

impl fmt::Display for Longitude {
    /// Longitude in the `DDD MM SS.ssss H` notation
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dmsh(f)
    }
}

#[cfg(test)]
mod tests {
    use geopos_types::{East, West};

    use super::*;

    #[test]
    fn default_is_prime() {
        assert_eq!(Longitude::default(), Longitude::prime());
        assert_eq!(Longitude::prime().direction(), East);
    }

    #[test]
    fn east_and_west() {
        let lon = Longitude::west(45.5).unwrap();
        assert!((lon.degrees() + 45.5).abs() < f64::EPSILON);
        assert_eq!(lon.direction(), West);
        assert_eq!(-lon, Longitude::east(45.5).unwrap());
    }

    #[test]
    fn anti_meridian_both_sides() {
        assert!(Longitude::try_from(180.0).is_ok());
        assert!(Longitude::try_from(-180.0).is_ok());
    }

    #[test]
    #[should_panic(expected = "Longitude")]
    fn bad_longitude_max() {
        let _l = Longitude::try_from(180.000_1).unwrap();
    }

    #[test]
    #[should_panic(expected = "Longitude")]
    fn east_with_negative_angle() {
        let _l = Longitude::east(-1.0).unwrap();
    }

    #[test]
    #[should_panic(expected = "Longitude")]
    fn nan() {
        let _l = Longitude::try_from(f64::NAN).unwrap();
    }

    #[test]
    fn dms_parts() {
        let lon = Longitude::west(114.785_358_333_333_33).unwrap();
        let dms = lon.dms();
        assert_eq!(dms.degrees(), 114);
        assert_eq!(dms.minutes(), 47);
        assert!((dms.seconds() - 7.29).abs() < 1e-9);
    }

    #[test]
    fn print() {
        let lon = Longitude::west(114.785_358_333_333_33).unwrap();
        assert_eq!(lon.to_string(), "114 47 07.2900 W");
        assert_eq!(Longitude::prime().to_string(), "000 00 00.0000 E");
        assert_eq!(Longitude::try_from(-180.0).unwrap().to_string(), "180 00 00.0000 W");
    }
}
