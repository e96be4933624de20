//! Module for reading chemical data out of strings
pub mod formula_parse;
