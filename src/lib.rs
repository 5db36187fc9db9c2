//! Aeronautical geographic positions: the DMSH angle notation,
//! the ARINC 424 shorthand codes for the full degree coordinates
//! and the direct geodetic problem on the ellipsoid.

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use geopos_types::{
    Axis, East, Ellipsoid, Error, InvalidParameter, MalformedFormat, North, Notation, OutOfRange,
    Pole, RotationalDirection, South, West,
};

pub use self::{
    angle::dms::Dms,
    coord::{format, parse_latitude, parse_longitude, Latitude, Longitude, Point},
    geodesic::{direct, Azimuth, DirectSolver, Distance, LengthUnit},
    position::{compute_position, InvalidInput},
    shorthand::{
        decode, decode_text, encode, encode_text, is_full_degree_latitude,
        is_full_degree_longitude, FullDegreeLatitude, FullDegreeLongitude, Quadrant,
        ShorthandCode,
    },
};

mod angle;
mod coord;
mod geodesic;
mod position;
mod shorthand;
mod utils;
