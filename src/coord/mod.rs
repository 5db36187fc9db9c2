use std::{convert::TryFrom, fmt};

use geopos_types::{Axis, Error, MalformedFormat, Notation, OutOfRange, SECONDS_IN_MINUTE};
use regex::{Captures, Regex};

use crate::{angle::dms::Dms, utils::ToUnsigned};

pub use self::{lat::Latitude, lon::Longitude, point::Point};

mod lat;
mod lon;
mod point;

/// The capture group guaranteed to exist by the grammar
fn group<'h>(caps: &Captures<'h>, name: &str) -> Option<&'h str> {
    caps.name(name).map(|m| m.as_str())
}

/// The grammar allows at most 59 whole seconds, but a long enough fraction
/// of the 59th second (`59.99999999999999999`) reads as exactly 60.0
fn below_full_minute(seconds: f64) -> f64 {
    let full_minute = f64::from(SECONDS_IN_MINUTE);
    if seconds >= full_minute {
        // the largest float below the minute
        f64::from_bits(full_minute.to_bits() - 1)
    } else {
        seconds
    }
}

/// A decimal angle along one of the axes, parsed from and formatted to the DMSH notation
trait DmshCoordinate: Copy + TryFrom<f64, Error = OutOfRange> {
    const AXIS: Axis;
    const NOTATION: Notation;

    /// The hemisphere letters of the axis
    type Direction: TryFrom<char> + Into<bool>;

    fn grammar() -> &'static Regex;

    fn decimal_degrees(self) -> f64;

    fn parse_dmsh(s: &str) -> Result<Self, Error> {
        let malformed = || MalformedFormat::new(Self::NOTATION, s);

        let caps = Self::grammar().captures(s).ok_or_else(malformed)?;
        let degrees: u16 = group(&caps, "deg")
            .and_then(|deg| deg.parse().ok())
            .ok_or_else(malformed)?;
        let minutes: u8 = group(&caps, "min")
            .and_then(|min| min.parse().ok())
            .ok_or_else(malformed)?;
        let seconds: f64 = group(&caps, "sec")
            .and_then(|sec| sec.parse().ok())
            .map(below_full_minute)
            .ok_or_else(malformed)?;
        let direction = group(&caps, "hem")
            .and_then(|hem| hem.chars().next())
            .and_then(|hem| Self::Direction::try_from(hem).ok())
            .ok_or_else(malformed)?;

        // the sum of the parts can round up past the maximum
        let angle = Dms::with_dms(degrees, minutes, seconds, Self::AXIS)?
            .to_decimal()
            .min(f64::from(Self::AXIS.max_degrees()));
        let value = if direction.into() { angle } else { -angle };
        Ok(Self::try_from(value)?)
    }

    fn to_dms(self) -> (Dms, bool) {
        let (angle, is_positive) = self.decimal_degrees().unsigned_abs();
        let dms = Dms::from_decimal(angle, Self::AXIS)
            .expect("Absolute value of a valid coordinate is a valid angle");
        (dms, is_positive)
    }

    fn write_dmsh(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dms, is_positive) = self.to_dms();
        dms.write_padded(f, Self::AXIS.degree_digits())?;
        write!(f, " {}", Self::AXIS.hemisphere_letter(is_positive))
    }
}

/// Parse the longitude in the `DDD MM SS[.fff] H` notation.
///
/// # Errors
/// - [`Error::MalformedFormat`] when the text does not match the notation exactly;
/// - [`Error::OutOfRange`] for the degrees more than 180
///   or for the 180 degrees with non-zero minutes or seconds.
///
/// ```
/// let lon = geopos::parse_longitude("045 30 00.00 W").unwrap();
/// assert_eq!(lon.degrees(), -45.5);
/// ```
pub fn parse_longitude(text: &str) -> Result<Longitude, Error> {
    text.parse()
}

/// Parse the latitude in the `DD MM SS[.fff] H` notation.
///
/// # Errors
/// - [`Error::MalformedFormat`] when the text does not match the notation exactly;
/// - [`Error::OutOfRange`] for the degrees more than 90
///   or for the 90 degrees with non-zero minutes or seconds.
pub fn parse_latitude(text: &str) -> Result<Latitude, Error> {
    text.parse()
}

/// Format the decimal angle in the DMSH notation of the given axis
/// with the seconds rounded to 4 decimal places.
///
/// # Errors
/// The angle is not in the range of the axis.
///
/// ```
/// use geopos::{format, Axis};
///
/// assert_eq!(format(1.000_005_55, Axis::Longitude).unwrap(), "001 00 00.0200 E");
/// assert_eq!(format(-73.755_566_332_555_78, Axis::Latitude).unwrap(), "73 45 20.0388 S");
/// ```
pub fn format(angle: f64, axis: Axis) -> Result<String, Error> {
    let text = match axis {
        Axis::Longitude => Longitude::try_from(angle)?.to_string(),
        Axis::Latitude => Latitude::try_from(angle)?.to_string(),
    };
    Ok(text)
}
