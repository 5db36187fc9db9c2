//! ARINC 424 shorthand code for the full degrees coordinates.
//!
//! The code packs a full degree (zero minutes) longitude and latitude
//! into five characters: two digits of the latitude, two last digits of the longitude
//! and the letter standing for the pair of hemispheres:
//!
//! | lat / lon | W | E |
//! |-----------|---|---|
//! | N         | N | E |
//! | S         | W | S |
//!
//! The letter trails the code for the longitudes less than 100 degrees (`5060N`)
//! and separates the latitude from the longitude otherwise (`50N60`).

use std::{convert::TryFrom, fmt, str::FromStr};

use geopos_types::{
    Axis, Error, MalformedFormat, Notation, OutOfRange, Pole, RotationalDirection,
};
use lazy_static::lazy_static;
use log::warn;
use regex::{Captures, Regex};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::parse_full_degree_re,
    coord::{Latitude, Longitude},
};

const HUNDRED_DEG: u8 = 100;
const MAX_LONGITUDE_PART: u8 = 80;
const MAX_LATITUDE_PART: u8 = 90;

lazy_static! {
    static ref RE_FULL_DEGREE_LON: Regex = Regex::new(&parse_full_degree_re(Axis::Longitude))
        .expect("Full degree longitude regex is valid");
    static ref RE_FULL_DEGREE_LAT: Regex = Regex::new(&parse_full_degree_re(Axis::Latitude))
        .expect("Full degree latitude regex is valid");
    static ref RE_LON_BELOW_HUNDRED: Regex = Regex::new(
        r"(?x)
        ^
        (?P<lat>\d{2})          # latitude
        (?P<lon>\d{2})          # second and third digits of longitude
        (?P<letter>[NSEW])      # letter designator
        $"
    )
    .expect("Below hundred code regex is valid");
    static ref RE_LON_HUNDRED_OR_MORE: Regex = Regex::new(
        r"(?x)
        ^
        (?P<lat>\d{2})          # latitude
        (?P<letter>[NSEW])      # letter designator
        (?P<lon>\d{2})          # second and third digits of longitude
        $"
    )
    .expect("Hundred or more code regex is valid");
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> Option<&'h str> {
    caps.name(name).map(|m| m.as_str())
}

/// Is the text a full degrees longitude without delimiters, e.g. `12200E`
pub fn is_full_degree_longitude(text: &str) -> bool {
    RE_FULL_DEGREE_LON.is_match(text)
}

/// Is the text a full degrees latitude without delimiters, e.g. `3500N`
pub fn is_full_degree_latitude(text: &str) -> bool {
    RE_FULL_DEGREE_LAT.is_match(text)
}

/// Parse the degrees and the hemisphere letter of a full degrees coordinate
fn parse_full_degree(re: &Regex, notation: Notation, s: &str) -> Result<(u8, char), Error> {
    let malformed = || MalformedFormat::new(notation, s);

    let caps = re.captures(s).ok_or_else(malformed)?;
    let degrees = group(&caps, "deg")
        .and_then(|deg| deg.parse().ok())
        .ok_or_else(malformed)?;
    let hemisphere = group(&caps, "hem")
        .and_then(|hem| hem.chars().next())
        .ok_or_else(malformed)?;
    Ok((degrees, hemisphere))
}

/// The longitude with zero minutes, written as `DDD00H`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FullDegreeLongitude {
    degrees: u8,
    direction: RotationalDirection,
}

impl FullDegreeLongitude {
    /// Construct the longitude from the whole degrees.
    ///
    /// # Errors
    /// The degrees are more than 180.
    pub fn new(degrees: u8, direction: RotationalDirection) -> Result<Self, OutOfRange> {
        if u16::from(degrees) > Axis::Longitude.max_degrees() {
            return Err(OutOfRange::Longitude);
        }

        Ok(Self { degrees, direction })
    }

    /// The whole number of degrees
    pub const fn degrees(self) -> u8 {
        self.degrees
    }

    /// The hemisphere
    pub const fn direction(self) -> RotationalDirection {
        self.direction
    }
}

impl FromStr for FullDegreeLongitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (degrees, hemisphere) =
            parse_full_degree(&RE_FULL_DEGREE_LON, Notation::FullDegreeLongitude, s)?;
        let direction = RotationalDirection::try_from(hemisphere)
            .map_err(|_| MalformedFormat::new(Notation::FullDegreeLongitude, s))?;
        Ok(Self::new(degrees, direction)?)
    }
}

impl fmt::Display for FullDegreeLongitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}00{}", self.degrees, self.direction)
    }
}

impl From<FullDegreeLongitude> for Longitude {
    fn from(lon: FullDegreeLongitude) -> Self {
        let degrees = f64::from(lon.degrees);
        let value = if lon.direction.into() { degrees } else { -degrees };
        Self::from_valid(value)
    }
}

/// The latitude with zero minutes, written as `DD00H`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FullDegreeLatitude {
    degrees: u8,
    pole: Pole,
}

impl FullDegreeLatitude {
    /// Construct the latitude from the whole degrees.
    ///
    /// # Errors
    /// The degrees are more than 90.
    pub fn new(degrees: u8, pole: Pole) -> Result<Self, OutOfRange> {
        if u16::from(degrees) > Axis::Latitude.max_degrees() {
            return Err(OutOfRange::Latitude);
        }

        Ok(Self { degrees, pole })
    }

    /// The whole number of degrees
    pub const fn degrees(self) -> u8 {
        self.degrees
    }

    /// The hemisphere
    pub const fn pole(self) -> Pole {
        self.pole
    }
}

impl FromStr for FullDegreeLatitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (degrees, hemisphere) =
            parse_full_degree(&RE_FULL_DEGREE_LAT, Notation::FullDegreeLatitude, s)?;
        let pole = Pole::try_from(hemisphere)
            .map_err(|_| MalformedFormat::new(Notation::FullDegreeLatitude, s))?;
        Ok(Self::new(degrees, pole)?)
    }
}

impl fmt::Display for FullDegreeLatitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}00{}", self.degrees, self.pole)
    }
}

impl From<FullDegreeLatitude> for Latitude {
    fn from(lat: FullDegreeLatitude) -> Self {
        let degrees = f64::from(lat.degrees);
        let value = if lat.pole.into() { degrees } else { -degrees };
        Self::from_valid(value)
    }
}

/// The pair of hemispheres encoded with a single letter
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quadrant {
    pole: Pole,
    direction: RotationalDirection,
}

impl Quadrant {
    /// The quadrant of the latitude and longitude hemispheres
    pub const fn new(pole: Pole, direction: RotationalDirection) -> Self {
        Self { pole, direction }
    }

    /// The latitude hemisphere
    pub const fn pole(self) -> Pole {
        self.pole
    }

    /// The longitude hemisphere
    pub const fn direction(self) -> RotationalDirection {
        self.direction
    }

    /// The letter designator of the code
    pub const fn letter(self) -> char {
        match (self.pole, self.direction) {
            (Pole::North, RotationalDirection::West) => 'N',
            (Pole::North, RotationalDirection::East) => 'E',
            (Pole::South, RotationalDirection::West) => 'W',
            (Pole::South, RotationalDirection::East) => 'S',
        }
    }

    /// The quadrant designated by the letter
    pub const fn from_letter(letter: char) -> Option<Self> {
        let (pole, direction) = match letter {
            'N' => (Pole::North, RotationalDirection::West),
            'E' => (Pole::North, RotationalDirection::East),
            'W' => (Pole::South, RotationalDirection::West),
            'S' => (Pole::South, RotationalDirection::East),
            _ => return None,
        };
        Some(Self { pole, direction })
    }
}

/// The five characters code of the full degrees coordinates.
///
/// The layout depends on whether the longitude is less than 100 degrees.
/// The numeric parts are stored as they appear in the code,
/// the range check is made on [decoding](#method.to_coordinates).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShorthandCode {
    /// `LLllH`: longitude is in `0..100`
    BelowHundred {
        /// latitude degrees
        lat: u8,
        /// longitude degrees without the leading zero
        lon_tail: u8,
        /// hemispheres
        quadrant: Quadrant,
    },
    /// `LLHll`: longitude is `100` or more
    HundredOrMore {
        /// latitude degrees
        lat: u8,
        /// longitude degrees without the leading one
        lon_tail: u8,
        /// hemispheres
        quadrant: Quadrant,
    },
}

impl ShorthandCode {
    /// Encode the full degrees coordinates.
    ///
    /// No range checks are done: the longitude tail
    /// can exceed the one accepted by [`to_coordinates`](#method.to_coordinates).
    pub fn encode(lon: FullDegreeLongitude, lat: FullDegreeLatitude) -> Self {
        let quadrant = Quadrant::new(lat.pole(), lon.direction());
        let lat = lat.degrees();
        let lon = lon.degrees();

        if lon < HUNDRED_DEG {
            Self::BelowHundred {
                lat,
                lon_tail: lon,
                quadrant,
            }
        } else {
            Self::HundredOrMore {
                lat,
                lon_tail: lon - HUNDRED_DEG,
                quadrant,
            }
        }
    }

    const fn parts(self) -> (u8, u8, Quadrant) {
        match self {
            Self::BelowHundred {
                lat,
                lon_tail,
                quadrant,
            }
            | Self::HundredOrMore {
                lat,
                lon_tail,
                quadrant,
            } => (lat, lon_tail, quadrant),
        }
    }

    /// The hemispheres of the code
    pub const fn quadrant(self) -> Quadrant {
        self.parts().2
    }

    /// Decode the coordinates.
    ///
    /// # Errors
    /// The latitude part is more than 90 or the longitude part is more than 80.
    pub fn to_coordinates(self) -> Result<(FullDegreeLongitude, FullDegreeLatitude), OutOfRange> {
        let (lat, lon_tail, quadrant) = self.parts();

        let lon_in_range = lon_tail <= MAX_LONGITUDE_PART;
        let lat_in_range = lat <= MAX_LATITUDE_PART;
        if !lon_in_range {
            warn!("{self}: longitude part can't be greater than {MAX_LONGITUDE_PART}");
        }
        if !lat_in_range {
            warn!("{self}: latitude part can't be greater than {MAX_LATITUDE_PART}");
        }
        if !lon_in_range {
            return Err(OutOfRange::ShorthandLongitude);
        }
        if !lat_in_range {
            return Err(OutOfRange::ShorthandLatitude);
        }

        let lon = match self {
            Self::BelowHundred { .. } => lon_tail,
            Self::HundredOrMore { .. } => HUNDRED_DEG + lon_tail,
        };

        let lon = FullDegreeLongitude::new(lon, quadrant.direction())?;
        let lat = FullDegreeLatitude::new(lat, quadrant.pole())?;
        Ok((lon, lat))
    }

    fn from_captures(caps: &Captures<'_>) -> Option<(u8, u8, Quadrant)> {
        let lat = group(caps, "lat")?.parse().ok()?;
        let lon_tail = group(caps, "lon")?.parse().ok()?;
        let quadrant = group(caps, "letter")?
            .chars()
            .next()
            .and_then(Quadrant::from_letter)?;
        Some((lat, lon_tail, quadrant))
    }
}

impl FromStr for ShorthandCode {
    type Err = MalformedFormat;

    /// Only the structure of the code is checked here,
    /// the layout is chosen by the position of the letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedFormat::new(Notation::ShorthandCode, s);

        if let Some(caps) = RE_LON_BELOW_HUNDRED.captures(s) {
            let (lat, lon_tail, quadrant) = Self::from_captures(&caps).ok_or_else(malformed)?;
            return Ok(Self::BelowHundred {
                lat,
                lon_tail,
                quadrant,
            });
        }

        if let Some(caps) = RE_LON_HUNDRED_OR_MORE.captures(s) {
            let (lat, lon_tail, quadrant) = Self::from_captures(&caps).ok_or_else(malformed)?;
            return Ok(Self::HundredOrMore {
                lat,
                lon_tail,
                quadrant,
            });
        }

        Err(malformed())
    }
}

impl fmt::Display for ShorthandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat, lon_tail, quadrant) = self.parts();
        let letter = quadrant.letter();
        match self {
            Self::BelowHundred { .. } => write!(f, "{lat:02}{lon_tail:02}{letter}"),
            Self::HundredOrMore { .. } => write!(f, "{lat:02}{letter}{lon_tail:02}"),
        }
    }
}

/// Encode the full degrees coordinates into the shorthand code
pub fn encode(lon: FullDegreeLongitude, lat: FullDegreeLatitude) -> ShorthandCode {
    ShorthandCode::encode(lon, lat)
}

/// Decode the shorthand code into the full degrees coordinates.
///
/// # Errors
/// - [`Error::MalformedFormat`] if the text is not a code;
/// - [`Error::OutOfRange`] if the latitude part is more than 90 or the longitude part is more than 80.
///
/// ```
/// let (lon, lat) = geopos::decode("50N60").unwrap();
/// assert_eq!(lon.to_string(), "16000W");
/// assert_eq!(lat.to_string(), "5000N");
/// ```
pub fn decode(code: &str) -> Result<(FullDegreeLongitude, FullDegreeLatitude), Error> {
    let code: ShorthandCode = code.parse()?;
    Ok(code.to_coordinates()?)
}

/// Encode the pair of textual full degrees coordinates, e.g. `16000W` and `5000N`.
///
/// # Errors
/// Any of the coordinates does not follow its full degrees notation.
pub fn encode_text(lon: &str, lat: &str) -> Result<String, Error> {
    let lon: FullDegreeLongitude = lon.parse()?;
    let lat: FullDegreeLatitude = lat.parse()?;
    Ok(encode(lon, lat).to_string())
}

/// Decode the code into the space separated pair of the textual
/// full degrees coordinates, e.g. `16000W 5000N`.
///
/// # Errors
/// Same as for the [`decode`].
pub fn decode_text(code: &str) -> Result<String, Error> {
    let (lon, lat) = decode(code)?;
    Ok(format!("{lon} {lat}"))
}
