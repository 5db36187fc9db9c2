use std::{error::Error as StdError, fmt};

use crate::enum_trivial_from_impl;

/// The textual notations recognized by the codecs
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notation {
    /// `DDD MM SS[.fff] H`, H is `E` or `W`
    LongitudeDmsh,
    /// `DD MM SS[.fff] H`, H is `N` or `S`
    LatitudeDmsh,
    /// `DDD00H`, H is `E` or `W`
    FullDegreeLongitude,
    /// `DD00H`, H is `N` or `S`
    FullDegreeLatitude,
    /// `LLllH` or `LLHll`
    ShorthandCode,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::LongitudeDmsh => "longitude in DMSH format, e.g. 114 47 07.29 W",
            Self::LatitudeDmsh => "latitude in DMSH format, e.g. 14 47 07.29 N",
            Self::FullDegreeLongitude => "full degrees longitude, e.g. 12200E",
            Self::FullDegreeLatitude => "full degrees latitude, e.g. 3500N",
            Self::ShorthandCode => "ARINC 424 full degrees code, e.g. 5060N or 50N60",
        };
        write!(f, "{msg}")
    }
}

/// The text does not match the expected grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedFormat {
    expected: Notation,
    failed: String,
}

impl MalformedFormat {
    /// The text `failed` does not follow the `expected` notation
    pub fn new(expected: Notation, failed: &str) -> Self {
        Self {
            expected,
            failed: failed.to_string(),
        }
    }

    /// The notation the text was supposed to follow
    pub const fn expected(&self) -> Notation {
        self.expected
    }

    /// The rejected text
    pub fn failed(&self) -> &str {
        &self.failed
    }
}

impl fmt::Display for MalformedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a {}", self.failed, self.expected)
    }
}

impl StdError for MalformedFormat {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// The value is well-formed, but too big for its domain
pub enum OutOfRange {
    /// Longitude beyond 180 degrees
    Longitude,
    /// Latitude beyond 90 degrees
    Latitude,
    /// min >= 60
    ArcMinutes,
    /// sec >= 60
    ArcSeconds,
    /// Longitude part of the shorthand code > 80
    ShorthandLongitude,
    /// Latitude part of the shorthand code > 90
    ShorthandLatitude,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Longitude => "Longitude should be within the range [-180..180] degrees",
            Self::Latitude => "Latitude should be within the range [-90..90] degrees",
            Self::ArcMinutes => "Angle's arc minute value not in range [0..60)",
            Self::ArcSeconds => "Angle's arc second value not in range [0..60)",
            Self::ShorthandLongitude => "Longitude part of the code can't be greater than 80",
            Self::ShorthandLatitude => "Latitude part of the code can't be greater than 90",
        };

        write!(f, "{msg}")
    }
}

impl StdError for OutOfRange {}

#[derive(Debug, Clone, PartialEq)]
/// The numeric parameter of the direct solution is not acceptable
pub enum InvalidParameter {
    /// Azimuth outside of `0..=360` degrees
    Azimuth(f64),
    /// Zero, negative or infinite distance
    Distance(f64),
    /// The text is not a number
    NotANumber(String),
    /// The distance is given in unknown units
    LengthUnit(String),
    /// The ellipsoid axes or flattening are not positive or `a < b`
    Ellipsoid,
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Azimuth(value) => write!(
                f,
                "Azimuth should be a number within interval <0, 360>, got {value}"
            ),
            Self::Distance(value) => write!(f, "Distance should be a positive number, got {value}"),
            Self::NotANumber(text) => write!(f, "{text:?} is not a number"),
            Self::LengthUnit(text) => write!(
                f,
                "{text:?} is not a unit of length, expected one of M, KM, FEET, SM, NM"
            ),
            Self::Ellipsoid => write!(
                f,
                "Ellipsoid axes and flattening should be positive, semi-major axis not less than semi-minor"
            ),
        }
    }
}

impl StdError for InvalidParameter {}

/// All the failures of the codecs and the direct solution
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The text does not follow the grammar
    MalformedFormat(MalformedFormat),
    /// The value is beyond its domain
    OutOfRange(OutOfRange),
    /// Bad azimuth, distance or ellipsoid
    InvalidParameter(InvalidParameter),
    /// The iterative solution has not reached the tolerance
    NonConvergence {
        /// The number of steps made before giving up
        iterations: usize,
    },
}

enum_trivial_from_impl!(MalformedFormat => Error:MalformedFormat);
enum_trivial_from_impl!(OutOfRange => Error:OutOfRange);
enum_trivial_from_impl!(InvalidParameter => Error:InvalidParameter);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedFormat(inner) => write!(f, "Malformed input: {inner}"),
            Self::OutOfRange(inner) => write!(f, "Out of range: {inner}"),
            Self::InvalidParameter(inner) => write!(f, "Invalid parameter: {inner}"),
            Self::NonConvergence { iterations } => write!(
                f,
                "The direct solution did not converge after {iterations} iterations"
            ),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::MalformedFormat(inner) => Some(inner),
            Self::OutOfRange(inner) => Some(inner),
            Self::InvalidParameter(inner) => Some(inner),
            Self::NonConvergence { .. } => None,
        }
    }
}
