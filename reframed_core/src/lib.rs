//! Core rust implementation of ReFramed, a crate for constraint based metabolic modeling.
//!
//! The crate root re-exports the commonly used functions, so
//! `use reframed_core::{parse_formula, molecular_weight};` is all most callers need.

pub mod chemistry;
pub mod io;

pub use chemistry::elements::{
    atomic_weight, formula_weight, missing_elements, molecular_weight, try_molecular_weight,
    ElementError, ATOMIC_WEIGHTS,
};
pub use io::formula_parse::{parse_formula, ElementToken, Formula};
