//! The direct geodetic problem on the ellipsoid: given the start point,
//! the initial azimuth and the distance, find the end point.
//!
//! Uses the iterative algorithm by Thaddeus Vincenty,
//! [Direct and inverse solutions of geodesics on the ellipsoid](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).

#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]

use std::f64::consts::PI;

use geopos_types::{Ellipsoid, Error};
use log::{debug, warn};

use crate::coord::{Latitude, Longitude, Point};

pub use self::params::{Azimuth, Distance, LengthUnit};

mod params;

/// Solver of the direct problem with the configurable stop conditions
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectSolver {
    ellipsoid: Ellipsoid,
    tolerance: f64,
    max_iterations: usize,
}

impl Default for DirectSolver {
    fn default() -> Self {
        Self::new(Ellipsoid::wgs84())
    }
}

impl DirectSolver {
    /// The change of the angular distance on the auxiliary sphere (radians)
    /// small enough to stop the iterations
    pub const DEFAULT_TOLERANCE: f64 = 1e-12;

    /// The number of iterations after which the solution is considered diverging
    pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

    /// The solver on the given ellipsoid with the default stop conditions
    pub const fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Override the tolerance (radians)
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override the iterations limit
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// The reference surface of the solution
    pub const fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Compute the end point.
    ///
    /// # Errors
    /// [`Error::NonConvergence`] if the angular distance on the auxiliary sphere
    /// does not settle within the iterations limit or becomes not a number.
    pub fn solve(&self, start: Point, azimuth: Azimuth, distance: Distance) -> Result<Point, Error> {
        let (a, b, f) = (self.ellipsoid.a(), self.ellipsoid.b(), self.ellipsoid.f());
        let s = distance.metres();

        let lon1 = start.lon().radians();
        let lat1 = start.lat().radians();
        let alpha1 = azimuth.radians();

        let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

        // reduced latitude
        let tan_u1 = (1.0 - f) * lat1.tan();
        let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
        let sin_u1 = tan_u1 * cos_u1;

        // angular distance on the sphere from the equator to the start point
        let sigma1 = tan_u1.atan2(cos_alpha1);

        // azimuth of the geodesic at the equator
        let sin_alpha = cos_u1 * sin_alpha1;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let coef_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let coef_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        let first_approx = s / (b * coef_a);
        let mut sigma = first_approx;
        let mut iterations = 0;

        let (sin_sigma, cos_sigma, cos_2sigma_m) = loop {
            if iterations >= self.max_iterations {
                warn!("Direct solution did not converge in {iterations} iterations");
                return Err(Error::NonConvergence { iterations });
            }
            iterations += 1;

            let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
            let (sin_sigma, cos_sigma) = sigma.sin_cos();
            let delta_sigma = coef_b
                * sin_sigma
                * (cos_2sigma_m
                    + coef_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - coef_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

            let previous = sigma;
            sigma = first_approx + delta_sigma;

            if !sigma.is_finite() {
                warn!("Direct solution diverged after {iterations} iterations");
                return Err(Error::NonConvergence { iterations });
            }

            if (sigma - previous).abs() <= self.tolerance {
                break (sin_sigma, cos_sigma, cos_2sigma_m);
            }
        };
        debug!("Direct solution converged in {iterations} iterations");

        let aux = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
        let lat2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
            .atan2((1.0 - f) * (sin_alpha * sin_alpha + aux * aux).sqrt());

        let lambda =
            (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let l = lambda
            - (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
        end_point(wrap_longitude(lon1 + l), lat2, iterations)
    }
}

/// Convert the solution (radians) into the point.
/// The non-finite terms computed after the loop are reported
/// along with the iterations made.
fn end_point(lon: f64, lat: f64, iterations: usize) -> Result<Point, Error> {
    if !(lon.is_finite() && lat.is_finite()) {
        warn!("Direct solution gives non-finite end point after {iterations} iterations");
        return Err(Error::NonConvergence { iterations });
    }

    // keep the rounding error of the radians conversion in the valid range
    let lon = lon.to_degrees().clamp(-180.0, 180.0);
    let lat = lat.to_degrees().clamp(-90.0, 90.0);
    Ok(Point::new(
        Longitude::from_valid(lon),
        Latitude::from_valid(lat),
    ))
}

/// Normalize the longitude (radians) into `(-PI..=PI]`
fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 3.0 * PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// Compute the end point on the ellipsoid with the default stop conditions.
///
/// # Errors
/// [`Error::NonConvergence`] if the iterations do not settle.
///
/// ```
/// use std::convert::TryFrom;
///
/// use geopos::{direct, Azimuth, Distance, Ellipsoid, Point};
///
/// let start = Point::with_coordinates(30.0, 30.0).unwrap();
/// let azimuth = Azimuth::try_from(0.0).unwrap();
/// let distance = Distance::try_from(1000.0).unwrap();
/// let end = direct(start, azimuth, distance, &Ellipsoid::wgs84()).unwrap();
/// assert!((end.lat().degrees() - 30.009_020_994_857_025).abs() < 1e-9);
/// ```
pub fn direct(
    start: Point,
    azimuth: Azimuth,
    distance: Distance,
    ellipsoid: &Ellipsoid,
) -> Result<Point, Error> {
    DirectSolver::new(*ellipsoid).solve(start, azimuth, distance)
}

#[cfg(test)]
mod tests {
    use std::{convert::TryFrom, f64::consts::FRAC_PI_2};

    use super::*;

    fn solve(lon: f64, lat: f64, azimuth: f64, distance: f64) -> (f64, f64) {
        let start = Point::with_coordinates(lon, lat).unwrap();
        let end = direct(
            start,
            Azimuth::try_from(azimuth).unwrap(),
            Distance::try_from(distance).unwrap(),
            &Ellipsoid::wgs84(),
        )
        .unwrap();
        (end.lon().degrees(), end.lat().degrees())
    }

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn north_along_meridian() {
        assert_close(
            solve(30.0, 30.0, 0.0, 1000.0),
            (29.999_999_999_999_964, 30.009_020_994_857_025),
        );
    }

    #[test]
    fn south_east_high_latitude() {
        assert_close(
            solve(-100.5, -63.5, 127.5, 26_377.435),
            (-100.077_700_652_804_57, -63.643_432_508_426_56),
        );
    }

    #[test]
    fn east_along_equator() {
        let (lon, lat) = solve(0.0, 0.0, 90.0, 100_000.0);
        assert!((lon - (100_000.0 / Ellipsoid::WGS84_A).to_degrees()).abs() < 1e-9);
        assert!(lat.abs() < 1e-9);
    }

    #[test]
    fn crossing_anti_meridian() {
        assert_close(
            solve(179.5, 10.0, 90.0, 200_000.0),
            (-178.675_856_231_153_94, 9.995_002_113_327_69),
        );
    }

    #[test]
    fn wrap() {
        assert!((wrap_longitude(PI) - PI).abs() < 1e-15);
        assert!((wrap_longitude(-PI) - PI).abs() < 1e-15);
        assert!((wrap_longitude(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!(wrap_longitude(0.0).abs() < 1e-15);
    }

    #[test]
    fn end_point_at_the_edges() {
        let p = end_point(PI + 1e-12, FRAC_PI_2 + 1e-12, 3).unwrap();
        assert!((p.lon().degrees() - 180.0).abs() < f64::EPSILON);
        assert!((p.lat().degrees() - 90.0).abs() < f64::EPSILON);
        assert!(p.is_pole());
    }

    #[test]
    fn end_point_not_finite() {
        assert_eq!(
            end_point(f64::NAN, 0.0, 4),
            Err(Error::NonConvergence { iterations: 4 })
        );
        assert_eq!(
            end_point(0.0, f64::INFINITY, 5),
            Err(Error::NonConvergence { iterations: 5 })
        );
    }

    #[test]
    fn iterations_limit() {
        let solver = DirectSolver::default().with_max_iterations(1);
        let start = Point::with_coordinates(0.0, 45.0).unwrap();
        let res = solver.solve(
            start,
            Azimuth::try_from(180.0).unwrap(),
            Distance::try_from(10_000_000.0).unwrap(),
        );
        assert_eq!(res, Err(Error::NonConvergence { iterations: 1 }));
    }

    #[test]
    fn no_iterations_allowed() {
        let solver = DirectSolver::default().with_max_iterations(0);
        let res = solver.solve(
            Point::default(),
            Azimuth::default(),
            Distance::try_from(1.0).unwrap(),
        );
        assert_eq!(res, Err(Error::NonConvergence { iterations: 0 }));
    }

    #[test]
    fn default_solver_is_wgs84() {
        let solver = DirectSolver::default();
        assert_eq!(solver.ellipsoid(), &Ellipsoid::wgs84());
    }

    #[test]
    fn custom_ellipsoid() {
        let grs80 = Ellipsoid::new(6_378_137.0, 6_356_752.314_140, 1.0 / 298.257_222_101).unwrap();
        let start = Point::with_coordinates(30.0, 30.0).unwrap();
        let end = direct(
            start,
            Azimuth::try_from(0.0).unwrap(),
            Distance::try_from(1000.0).unwrap(),
            &grs80,
        )
        .unwrap();
        assert!((end.lat().degrees() - 30.009_020_994_857_025).abs() < 1e-8);
    }
}
