//! The sexagesimal angle and the grammars of its textual notations

mod degree;
pub mod dms;

pub(crate) use degree::{parse_dmsh_re, parse_full_degree_re};
