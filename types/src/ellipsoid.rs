//! The reference surface of the direct solution,
//! given by its semi-major axis, semi-minor axis and flattening.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::errors::InvalidParameter;

/// The parameters of a reference ellipsoid, all in metres except the flattening ratio
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    a: f64,
    b: f64,
    f: f64,
}

impl Ellipsoid {
    /// WGS 84 semi-major axis, metres
    pub const WGS84_A: f64 = 6_378_137.0;
    /// WGS 84 semi-minor axis, metres
    pub const WGS84_B: f64 = 6_356_752.314_1;
    /// WGS 84 flattening
    pub const WGS84_F: f64 = 1.0 / 298.257_222_100_88;

    /// Construct the ellipsoid with the arbitrary parameters.
    ///
    /// # Errors
    /// All the parameters should be positive and finite,
    /// and the semi-major axis should not be less than the semi-minor one.
    pub fn new(a: f64, b: f64, f: f64) -> Result<Self, InvalidParameter> {
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if !(positive(a) && positive(b) && positive(f)) || a < b {
            return Err(InvalidParameter::Ellipsoid);
        }

        Ok(Self { a, b, f })
    }

    /// The World Geodetic System 1984 ellipsoid
    pub const fn wgs84() -> Self {
        Self {
            a: Self::WGS84_A,
            b: Self::WGS84_B,
            f: Self::WGS84_F,
        }
    }

    /// Semi-major axis (equatorial radius)
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Semi-minor axis (polar radius)
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Flattening, `(a - b) / a`
    pub const fn f(&self) -> f64 {
        self.f
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::wgs84()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs84_is_default() {
        let e = Ellipsoid::default();
        assert_eq!(e, Ellipsoid::wgs84());
        assert!((e.a() - 6_378_137.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wgs84_flattening_matches_axes() {
        let e = Ellipsoid::wgs84();
        let f = (e.a() - e.b()) / e.a();
        assert!((f - e.f()).abs() < 1e-10);
    }

    #[test]
    fn sphere_is_rejected() {
        assert_eq!(
            Ellipsoid::new(6_371_000.0, 6_371_000.0, 0.0),
            Err(InvalidParameter::Ellipsoid)
        );
    }

    #[test]
    #[should_panic(expected = "Ellipsoid")]
    fn prolate_is_rejected() {
        let _e = Ellipsoid::new(6_356_752.0, 6_378_137.0, 0.003).unwrap();
    }

    #[test]
    fn arbitrary_parameters() {
        let grs80 = Ellipsoid::new(6_378_137.0, 6_356_752.314_140, 1.0 / 298.257_222_101).unwrap();
        assert!(grs80.b() < grs80.a());
    }
}
