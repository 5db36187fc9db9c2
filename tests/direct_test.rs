use std::convert::TryFrom;

use csv::ReaderBuilder;
use geopos::{direct, Azimuth, DirectSolver, Distance, Ellipsoid, Error, Point};

/// Start longitude, start latitude, azimuth, distance (metres),
/// end longitude, end latitude
const REFERENCE: &str = "\
30.0,30.0,0.0,1000.0,29.999999999999964,30.009020994857025
-100.5,-63.5,127.5,26377.435,-100.07770065280457,-63.64343250842656
14.785358333333333,50.1,225.0,500000.0,10.151691702481962,46.82343016515964
179.5,10.0,90.0,200000.0,-178.67585623115394,9.99500211332769
0.0,45.0,180.0,10000000.0,0.0,-45.27094434837499
";

fn field(record: &csv::StringRecord, i: usize) -> f64 {
    record[i].trim().parse().unwrap()
}

#[test]
fn reference_solutions() {
    let wgs84 = Ellipsoid::wgs84();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(REFERENCE.as_bytes());

    let mut line_number = 0;
    for result in reader.records() {
        let record = result.unwrap();
        line_number += 1;

        let start = Point::with_coordinates(field(&record, 0), field(&record, 1)).unwrap();
        let azimuth = Azimuth::try_from(field(&record, 2)).unwrap();
        let distance = Distance::try_from(field(&record, 3)).unwrap();

        let end = direct(start, azimuth, distance, &wgs84).unwrap();

        let delta_lon = (end.lon().degrees() - field(&record, 4)).abs();
        let delta_lat = (end.lat().degrees() - field(&record, 5)).abs();
        assert!(
            delta_lon < 1e-9 && delta_lat < 1e-9,
            "line: {line_number} delta: ({delta_lon}, {delta_lat})"
        );
    }
    assert_eq!(line_number, 5);
}

#[test]
fn formatted_solution() {
    let start: Point = Point::new(
        "014 47 07.29 E".parse().unwrap(),
        "50 06 00.00 N".parse().unwrap(),
    );
    let end = DirectSolver::default()
        .solve(start, "225".parse().unwrap(), "500000".parse().unwrap())
        .unwrap();

    assert_eq!(end.lon().to_string(), "010 09 06.0901 E");
    assert_eq!(end.lat().to_string(), "46 49 24.3486 N");
}

#[test]
fn tight_iterations_limit() {
    let start = Point::with_coordinates(0.0, 45.0).unwrap();
    let res = DirectSolver::new(Ellipsoid::wgs84())
        .with_max_iterations(2)
        .with_tolerance(0.0)
        .solve(
            start,
            Azimuth::try_from(180.0).unwrap(),
            Distance::try_from(10_000_000.0).unwrap(),
        );

    assert_eq!(res, Err(Error::NonConvergence { iterations: 2 }));
}
