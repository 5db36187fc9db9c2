//! The numeric inputs of the direct solution: the initial azimuth and the distance

use std::{convert::TryFrom, fmt, str::FromStr};

use geopos_types::InvalidParameter;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const FULL_TURN_DEG: f64 = 360.0;

fn parse_number(s: &str) -> Result<f64, InvalidParameter> {
    s.trim()
        .parse()
        .map_err(|_| InvalidParameter::NotANumber(s.to_string()))
}

/// The direction from the north, clockwise, in decimal degrees `0..=360`
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Azimuth(f64);

impl Azimuth {
    /// The value in decimal degrees
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// The value in radians
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl TryFrom<f64> for Azimuth {
    type Error = InvalidParameter;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (0.0..=FULL_TURN_DEG).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidParameter::Azimuth(value))
        }
    }
}

impl From<Azimuth> for f64 {
    fn from(azimuth: Azimuth) -> Self {
        azimuth.0
    }
}

impl FromStr for Azimuth {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(parse_number(s)?)
    }
}

impl fmt::Display for Azimuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// The units of length accepted for the distance
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    /// Metre
    #[default]
    Metre,
    /// Kilometre
    Kilometre,
    /// International foot
    Foot,
    /// Statute mile
    StatuteMile,
    /// International nautical mile
    NauticalMile,
}

impl LengthUnit {
    /// The number of metres in the unit
    pub const fn metres(self) -> f64 {
        match self {
            Self::Metre => 1.0,
            Self::Kilometre => 1_000.0,
            Self::Foot => 0.304_8,
            Self::StatuteMile => 1_609.344,
            Self::NauticalMile => 1_852.0,
        }
    }

    /// The abbreviation of the unit
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Metre => "M",
            Self::Kilometre => "KM",
            Self::Foot => "FEET",
            Self::StatuteMile => "SM",
            Self::NauticalMile => "NM",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.to_ascii_uppercase().as_str() {
            "M" => Self::Metre,
            "KM" => Self::Kilometre,
            "FT" | "FEET" => Self::Foot,
            "SM" => Self::StatuteMile,
            "NM" => Self::NauticalMile,
            _ => return Err(InvalidParameter::LengthUnit(s.to_string())),
        };
        Ok(unit)
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The positive length along the geodesic, stored in metres
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Distance(f64);

impl Distance {
    /// Construct the distance measured in the given units.
    ///
    /// # Errors
    /// The value in metres is not positive or not finite.
    pub fn new(value: f64, unit: LengthUnit) -> Result<Self, InvalidParameter> {
        let metres = value * unit.metres();
        if !(metres.is_finite() && metres > 0.0) {
            return Err(InvalidParameter::Distance(value));
        }

        Ok(Self(metres))
    }

    /// The distance in metres
    pub const fn metres(self) -> f64 {
        self.0
    }

    /// The distance in the given units
    pub fn to_units(self, unit: LengthUnit) -> f64 {
        self.0 / unit.metres()
    }
}

impl TryFrom<f64> for Distance {
    type Error = InvalidParameter;

    /// The value in metres
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value, LengthUnit::Metre)
    }
}

impl From<Distance> for f64 {
    fn from(distance: Distance) -> Self {
        distance.0
    }
}

impl FromStr for Distance {
    type Err = InvalidParameter;

    /// The number optionally followed by the space and the unit symbol,
    /// e.g. `26377.435`, `10 NM` or `1200 FEET`. Without the unit the metres are assumed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (value, unit) = match trimmed.split_once(' ') {
            Some((value, unit)) => (value, unit.trim().parse()?),
            None => (trimmed, LengthUnit::Metre),
        };

        Self::new(parse_number(value)?, unit)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, LengthUnit::Metre)
    }
}
