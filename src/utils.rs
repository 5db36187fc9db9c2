//! Utilities functions which do not linked to domain

use std::ops::Neg;

/// Allow conversion of a signed value into its unsigned equivalent
/// by dropping the sign away
pub(crate) trait ToUnsigned<U>: Default + Copy + PartialOrd + Neg<Output = Self> {
    /// represent the source (signed) type as target (unsigned) type
    fn as_type(self) -> U;

    /// Converts to unsigned absolute value
    /// and tells whether the original value was non-negative
    fn unsigned_abs(self) -> (U, bool) {
        if self >= Self::default() {
            (self.as_type(), true)
        } else {
            ((-self).as_type(), false)
        }
    }
}

impl ToUnsigned<Self> for f64 {
    fn as_type(self) -> Self {
        self
    }
}

/// Round to the given number of decimal places.
///
/// The ties are rounded half away from zero (the behaviour of [`f64::round`])
/// on the value scaled by `10^places`.
pub(crate) fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned() {
        assert_eq!(7.5_f64.unsigned_abs(), (7.5, true));
        assert_eq!((-7.5_f64).unsigned_abs(), (7.5, false));
    }

    #[test]
    fn negative_zero_is_positive() {
        let (abs, is_positive) = (-0.0_f64).unsigned_abs();
        assert!(is_positive);
        assert!(abs.abs() < f64::EPSILON);
    }

    #[test]
    fn rounding() {
        assert!((round_to_places(20.038_797_200_8, 4) - 20.0388).abs() < 1e-12);
        assert!((round_to_places(0.019_98, 4) - 0.02).abs() < 1e-12);
    }

    #[test]
    fn half_rounds_away_from_zero() {
        assert!((round_to_places(2.5, 0) - 3.0).abs() < f64::EPSILON);
        assert!((round_to_places(-2.5, 0) + 3.0).abs() < f64::EPSILON);
    }
}
