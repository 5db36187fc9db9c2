//! The end point of a geodesic given in the textual form,
//! as it comes from a form or a command line.

use std::{error::Error as StdError, fmt};

use geopos_types::{Ellipsoid, Error};

use crate::{
    coord::{parse_latitude, parse_longitude, Point},
    geodesic::{Azimuth, Distance, DirectSolver},
};

/// All the problems found in the textual inputs of the [`compute_position`]
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidInput {
    errors: Vec<Error>,
}

impl InvalidInput {
    /// The problems in the order of the inputs
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}

impl From<Error> for InvalidInput {
    fn from(err: Error) -> Self {
        Self { errors: vec![err] }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl StdError for InvalidInput {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.errors
            .first()
            .map(|err| -> &(dyn StdError + 'static) { err })
    }
}

/// Keep the successfully parsed value or remember the failure
fn collect<T, E>(res: Result<T, E>, errors: &mut Vec<Error>) -> Option<T>
where
    E: Into<Error>,
{
    res.map_err(|err| errors.push(err.into())).ok()
}

/// Parse the start point in the DMSH notation, the azimuth in decimal degrees
/// and the distance (metres if no unit is given) and solve the direct problem.
///
/// # Errors
/// Every input that could not be parsed is reported at once.
/// The failed solution is reported as the only error.
///
/// ```
/// use geopos::{compute_position, Ellipsoid};
///
/// let end = compute_position(
///     "014 47 07.29 E",
///     "50 06 00.00 N",
///     "225",
///     "500000",
///     &Ellipsoid::wgs84(),
/// )
/// .unwrap();
/// assert_eq!(end.to_string(), "010 09 06.0901 E 46 49 24.3486 N");
/// ```
pub fn compute_position(
    lon: &str,
    lat: &str,
    azimuth: &str,
    distance: &str,
    ellipsoid: &Ellipsoid,
) -> Result<Point, InvalidInput> {
    let mut errors = Vec::new();

    let lon = collect(parse_longitude(lon), &mut errors);
    let lat = collect(parse_latitude(lat), &mut errors);
    let azimuth = collect(azimuth.parse::<Azimuth>(), &mut errors);
    let distance = collect(distance.parse::<Distance>(), &mut errors);

    match (lon, lat, azimuth, distance) {
        (Some(lon), Some(lat), Some(azimuth), Some(distance)) => {
            let start = Point::new(lon, lat);
            Ok(DirectSolver::new(*ellipsoid).solve(start, azimuth, distance)?)
        }
        _ => Err(InvalidInput { errors }),
    }
}
