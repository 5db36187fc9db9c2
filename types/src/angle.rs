//! Which coordinate an angle measures, and the sexagesimal constants

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod errors;

/// The number of arc minutes in a degree
pub const MINUTES_IN_DEGREE: u8 = 60;
/// The number of arc seconds in an arc minute
pub const SECONDS_IN_MINUTE: u8 = 60;

const HALF_TURN_DEG: u16 = 180;
const QUARTER_TURN_DEG: u16 = HALF_TURN_DEG >> 1;

/// The kind of a decimal angle: the same number means different things
/// depending on the axis it is measured along.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// East-west position, `-180..=180` degrees
    Longitude,
    /// North-south position, `-90..=90` degrees
    Latitude,
}

impl Axis {
    /// The largest absolute value (in degrees) allowed for the axis
    pub const fn max_degrees(self) -> u16 {
        match self {
            Self::Longitude => HALF_TURN_DEG,
            Self::Latitude => QUARTER_TURN_DEG,
        }
    }

    /// The number of digits in the zero-padded degrees field of the DMSH notation
    pub const fn degree_digits(self) -> usize {
        match self {
            Self::Longitude => 3,
            Self::Latitude => 2,
        }
    }

    /// Whether the decimal value lies in the valid range of the axis
    pub fn contains(self, degrees: f64) -> bool {
        let max = f64::from(self.max_degrees());
        degrees.is_finite() && (-max..=max).contains(&degrees)
    }

    /// The hemisphere letter for the value of the given sign:
    /// non-negative values are northern or eastern.
    pub fn hemisphere_letter(self, is_positive: bool) -> char {
        match (self, is_positive) {
            (Self::Longitude, true) => 'E',
            (Self::Longitude, false) => 'W',
            (Self::Latitude, true) => 'N',
            (Self::Latitude, false) => 'S',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_degrees() {
        assert_eq!(Axis::Longitude.max_degrees(), 180);
        assert_eq!(Axis::Latitude.max_degrees(), 90);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(Axis::Longitude.contains(180.0));
        assert!(Axis::Longitude.contains(-180.0));
        assert!(!Axis::Longitude.contains(180.000_001));

        assert!(Axis::Latitude.contains(-90.0));
        assert!(!Axis::Latitude.contains(90.5));
    }

    #[test]
    fn not_finite_is_out_of_range() {
        assert!(!Axis::Longitude.contains(f64::NAN));
        assert!(!Axis::Latitude.contains(f64::INFINITY));
    }

    #[test]
    fn letters() {
        assert_eq!(Axis::Longitude.hemisphere_letter(true), 'E');
        assert_eq!(Axis::Longitude.hemisphere_letter(false), 'W');
        assert_eq!(Axis::Latitude.hemisphere_letter(true), 'N');
        assert_eq!(Axis::Latitude.hemisphere_letter(false), 'S');
    }
}
