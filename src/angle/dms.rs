//! The sexagesimal (degree, minute, second) decomposition of an unsigned angle.
//!
//! The seconds keep their fractional part as a floating number,
//! so the decimal and sexagesimal representations convert back and forth
//! with the precision of the text notation (10<sup>-4</sup> arcsecond).

use std::fmt;

use geopos_types::{Axis, OutOfRange, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE};
use num_traits::ToPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::round_to_places;

/// Degrees, minutes and seconds of an angle without the hemisphere
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    degrees: u16,
    minutes: u8,
    seconds: f64,
}

impl Dms {
    /// The number of arcseconds' decimal digits when formatting
    pub const SECONDS_FD: usize = 4;

    /// Degree, minute, second with the decimal fraction.
    ///
    /// # Errors
    /// When some part of the angle is out of scope for the given axis
    /// (e.g. minutes >= 60 or degree > 180 for a longitude),
    /// the [`OutOfRange`] returned.
    /// The maximum degree value should have zero minutes and seconds.
    pub fn with_dms(
        degrees: u16,
        minutes: u8,
        seconds: f64,
        axis: Axis,
    ) -> Result<Self, OutOfRange> {
        Self::check_dms(degrees, minutes, seconds, axis)?;
        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    fn check_dms(degrees: u16, minutes: u8, seconds: f64, axis: Axis) -> Result<(), OutOfRange> {
        let range_err = Self::range_err(axis);

        let max_degrees = axis.max_degrees();
        if degrees > max_degrees {
            return Err(range_err);
        }

        if !(0..MINUTES_IN_DEGREE).contains(&minutes) {
            return Err(OutOfRange::ArcMinutes);
        }

        let valid_seconds = 0.0..f64::from(SECONDS_IN_MINUTE);
        if !valid_seconds.contains(&seconds) {
            return Err(OutOfRange::ArcSeconds);
        }

        if degrees == max_degrees && (minutes > 0 || seconds > 0.0) {
            return Err(range_err);
        }

        Ok(())
    }

    const fn range_err(axis: Axis) -> OutOfRange {
        match axis {
            Axis::Longitude => OutOfRange::Longitude,
            Axis::Latitude => OutOfRange::Latitude,
        }
    }

    /// Decompose the absolute value of a decimal angle:
    /// - the degrees and minutes are truncated;
    /// - the seconds are rounded to [`SECONDS_FD`](#associatedconstant.SECONDS_FD) places.
    ///
    /// Whenever the seconds round up to a whole minute (or the minutes to a whole degree),
    /// the overflow is carried into the next part.
    ///
    /// # Errors
    /// The value is negative, not finite or bigger than the axis allows.
    pub fn from_decimal(value: f64, axis: Axis) -> Result<Self, OutOfRange> {
        let range_err = Self::range_err(axis);
        if value < 0.0 || !axis.contains(value) {
            return Err(range_err);
        }

        let degrees = value.floor();
        let total_minutes = (value - degrees) * f64::from(MINUTES_IN_DEGREE);
        let minutes = total_minutes.floor();
        let seconds = round_to_places(
            (total_minutes - minutes) * f64::from(SECONDS_IN_MINUTE),
            Self::SECONDS_FD as i32,
        );

        let mut degrees = degrees.to_u16().ok_or(range_err)?;
        let mut minutes = minutes.to_u8().ok_or(OutOfRange::ArcMinutes)?;
        let mut seconds = seconds;

        if seconds >= f64::from(SECONDS_IN_MINUTE) {
            seconds = 0.0;
            minutes += 1;
        }

        if minutes >= MINUTES_IN_DEGREE {
            minutes = 0;
            degrees += 1;
        }

        Self::with_dms(degrees, minutes, seconds, axis)
    }

    /// The whole number of degrees in the angle
    pub const fn degrees(self) -> u16 {
        self.degrees
    }

    /// The arc minutes component of the angle
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// The arc seconds component of the angle with its fraction
    pub const fn seconds(self) -> f64 {
        self.seconds
    }

    /// The unsigned value in decimal degrees
    pub fn to_decimal(self) -> f64 {
        f64::from(self.degrees)
            + f64::from(self.minutes) / f64::from(MINUTES_IN_DEGREE)
            + self.seconds / (f64::from(MINUTES_IN_DEGREE) * f64::from(SECONDS_IN_MINUTE))
    }

    /// Write the parts separated by a space.
    /// The degrees are zero-padded to the `degree_digits` width,
    /// the minutes to 2 digits and the seconds to 2 digits before the decimal point.
    pub(crate) fn write_padded(self, f: &mut fmt::Formatter<'_>, degree_digits: usize) -> fmt::Result {
        let seconds_width = Self::SECONDS_FD + 3;
        write!(
            f,
            "{:0deg_w$} {:02} {:0sec_w$.sec_fd$}",
            self.degrees,
            self.minutes,
            self.seconds,
            deg_w = degree_digits,
            sec_w = seconds_width,
            sec_fd = Self::SECONDS_FD,
        )
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree_digits = f.width().unwrap_or(0);
        self.write_padded(f, degree_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_parts(dms: Dms, parts: (u16, u8, f64)) {
        assert_eq!(dms.degrees(), parts.0);
        assert_eq!(dms.minutes(), parts.1);
        assert!(
            (dms.seconds() - parts.2).abs() < 1e-9,
            "{} != {}",
            dms.seconds(),
            parts.2
        );
    }

    #[test]
    fn default_is_zero() {
        let zero = Dms::default();
        assert_parts(zero, (0, 0, 0.0));
        assert!(zero.to_decimal().abs() < f64::EPSILON);
    }

    #[test]
    fn max_longitude() {
        let anti_meridian = Dms::with_dms(180, 0, 0.0, Axis::Longitude).unwrap();
        assert!((anti_meridian.to_decimal() - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "Longitude")]
    fn max_longitude_with_minutes() {
        let _a = Dms::with_dms(180, 1, 0.0, Axis::Longitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "Latitude")]
    fn max_latitude_with_seconds() {
        let _a = Dms::with_dms(90, 0, 0.1, Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "Latitude")]
    fn latitude_degrees_overflow() {
        let _a = Dms::with_dms(91, 0, 0.0, Axis::Latitude).unwrap();
    }

    #[test]
    fn latitude_degrees_are_fine_for_longitude() {
        assert!(Dms::with_dms(91, 0, 0.0, Axis::Longitude).is_ok());
    }

    #[test]
    #[should_panic(expected = "ArcMinutes")]
    fn bad_minutes() {
        let _a = Dms::with_dms(10, 60, 0.0, Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcSeconds")]
    fn bad_seconds() {
        let _a = Dms::with_dms(10, 59, 60.0, Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcSeconds")]
    fn negative_seconds() {
        let _a = Dms::with_dms(10, 59, -1.0, Axis::Longitude).unwrap();
    }

    #[test]
    fn to_decimal() {
        let dms = Dms::with_dms(1, 25, 47.0, Axis::Longitude).unwrap();
        assert!((dms.to_decimal() - 1.429_722_222_222_222_3).abs() < f64::EPSILON);

        let dms = Dms::with_dms(114, 47, 7.29, Axis::Longitude).unwrap();
        assert!((dms.to_decimal() - 114.785_358_333_333_33).abs() < 1e-12);
    }

    #[test]
    fn from_decimal() {
        let dms = Dms::from_decimal(103.755_566_332_555_78, Axis::Longitude).unwrap();
        assert_parts(dms, (103, 45, 20.0388));

        let dms = Dms::from_decimal(32.5, Axis::Latitude).unwrap();
        assert_parts(dms, (32, 30, 0.0));
    }

    #[test]
    fn from_decimal_small_fraction() {
        let dms = Dms::from_decimal(1.000_005_55, Axis::Latitude).unwrap();
        assert_parts(dms, (1, 0, 0.02));
    }

    #[test]
    fn seconds_overflow_carries_into_minutes() {
        let dms = Dms::from_decimal(0.999_999_999_99, Axis::Latitude).unwrap();
        assert_parts(dms, (1, 0, 0.0));

        let dms = Dms::from_decimal(10.516_666_666_66, Axis::Latitude).unwrap();
        assert_parts(dms, (10, 31, 0.0));
    }

    #[test]
    fn carry_up_to_the_max_degree() {
        let dms = Dms::from_decimal(179.999_999_999_9, Axis::Longitude).unwrap();
        assert_parts(dms, (180, 0, 0.0));
    }

    #[test]
    fn from_decimal_negative_zero() {
        let dms = Dms::from_decimal(-0.0, Axis::Latitude).unwrap();
        assert_parts(dms, (0, 0, 0.0));
    }

    #[test]
    #[should_panic(expected = "Latitude")]
    fn from_decimal_negative() {
        let _a = Dms::from_decimal(-10.0, Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "Longitude")]
    fn from_decimal_overflow() {
        let _a = Dms::from_decimal(180.5, Axis::Longitude).unwrap();
    }

    #[test]
    fn print_padded() {
        let dms = Dms::with_dms(1, 2, 7.29, Axis::Longitude).unwrap();
        assert_eq!(format!("{:3}", dms), "001 02 07.2900");
        assert_eq!(format!("{:2}", dms), "01 02 07.2900");
    }
}
