//! Module providing elemental data and calculations on chemical formulas.

pub mod elements;
