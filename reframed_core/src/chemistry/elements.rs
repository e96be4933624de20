//! This module provides the table of standard atomic weights, and molecular weight calculation
//! for chemical formulas
use std::sync::LazyLock;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::warn;

use crate::io::formula_parse::{parse_formula, Formula};

/// Standard atomic weights (in atomic mass units) indexed by element symbol
pub static ATOMIC_WEIGHTS: LazyLock<IndexMap<&'static str, f64>> =
    LazyLock::new(|| ATOMIC_WEIGHT_TABLE.iter().copied().collect());

#[rustfmt::skip]
const ATOMIC_WEIGHT_TABLE: &[(&str, f64)] = &[
    ("H", 1.0079), ("He", 4.0026), ("Li", 6.941), ("Be", 9.0122), ("B", 10.811),
    ("C", 12.0107), ("N", 14.0067), ("O", 15.9994), ("F", 18.9984), ("Ne", 20.1797),
    ("Na", 22.9897), ("Mg", 24.305), ("Al", 26.9815), ("Si", 28.0855), ("P", 30.9738),
    ("S", 32.065), ("Cl", 35.453), ("Ar", 39.948), ("K", 39.0983), ("Ca", 40.078),
    ("Sc", 44.9559), ("Ti", 47.867), ("V", 50.9415), ("Cr", 51.9961), ("Mn", 54.938),
    ("Fe", 55.845), ("Co", 58.9332), ("Ni", 58.6934), ("Cu", 63.546), ("Zn", 65.39),
    ("Ga", 69.723), ("Ge", 72.64), ("As", 74.9216), ("Se", 78.96), ("Br", 79.904),
    ("Kr", 83.8), ("Rb", 85.4678), ("Sr", 87.62), ("Y", 88.9059), ("Zr", 91.224),
    ("Nb", 92.9064), ("Mo", 95.94), ("Tc", 98.), ("Ru", 101.07), ("Rh", 102.9055),
    ("Pd", 106.42), ("Ag", 107.8682), ("Cd", 112.411), ("In", 114.818), ("Sn", 118.71),
    ("Sb", 121.76), ("Te", 127.6), ("I", 126.9045), ("Xe", 131.293), ("Cs", 132.9055),
    ("Ba", 137.327), ("La", 138.9055), ("Ce", 140.116), ("Pr", 140.9077), ("Nd", 144.24),
    ("Pm", 145.), ("Sm", 150.36), ("Eu", 151.964), ("Gd", 157.25), ("Tb", 158.9253),
    ("Dy", 162.5), ("Ho", 164.9303), ("Er", 167.259), ("Tm", 168.9342), ("Yb", 173.04),
    ("Lu", 174.967), ("Hf", 178.49), ("Ta", 180.9479), ("W", 183.84), ("Re", 186.207),
    ("Os", 190.23), ("Ir", 192.217), ("Pt", 195.078), ("Au", 196.9665), ("Hg", 200.59),
    ("Tl", 204.3833), ("Pb", 207.2), ("Bi", 208.9804), ("Po", 209.), ("At", 210.),
    ("Rn", 222.), ("Fr", 223.), ("Ra", 226.), ("Ac", 227.), ("Th", 232.0381),
    ("Pa", 231.0359), ("U", 238.0289), ("Np", 237.), ("Pu", 244.), ("Am", 243.),
    ("Cm", 247.), ("Bk", 247.), ("Cf", 251.), ("Es", 252.), ("Fm", 257.),
    ("Md", 258.), ("No", 259.), ("Lr", 262.), ("Rf", 261.), ("Db", 262.),
    ("Sg", 266.), ("Bh", 264.), ("Hs", 277.), ("Mt", 268.),
];

/// Errors from molecular weight calculation
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ElementError {
    /// One or more elements of the formula have no tabulated atomic weight
    #[error("Atomic weight not listed for elements: {}", .0.join(", "))]
    MissingAtomicWeights(Vec<String>),
}

/// Look up the standard atomic weight of an element
pub fn atomic_weight(symbol: &str) -> Option<f64> {
    ATOMIC_WEIGHTS.get(symbol).copied()
}

/// Find the elements of a parsed formula which are not in [`ATOMIC_WEIGHTS`]
///
/// Symbols are returned in the order they appear in the formula.
pub fn missing_elements(formula: &Formula) -> Vec<String> {
    formula
        .keys()
        .filter(|symbol| !ATOMIC_WEIGHTS.contains_key(symbol.as_str()))
        .cloned()
        .collect()
}

/// Calculate the molecular weight of an already parsed formula
///
/// # Returns
/// - `Ok`: Sum of count × atomic weight over all elements
/// - `Err`: [`ElementError::MissingAtomicWeights`] naming every element without a weight,
///     no partial sum is computed
pub fn formula_weight(formula: &Formula) -> Result<f64, ElementError> {
    let missing = missing_elements(formula);
    if !missing.is_empty() {
        return Err(ElementError::MissingAtomicWeights(missing));
    }
    Ok(formula
        .iter()
        .map(|(symbol, count)| ATOMIC_WEIGHTS[symbol.as_str()] * (*count as f64))
        .sum())
}

/// Calculate the molecular weight of a formula string, returning an error for unknown elements
///
/// # Examples
/// ```rust
/// use reframed_core::chemistry::elements::{try_molecular_weight, ElementError};
/// let water = try_molecular_weight("H2O").unwrap();
/// assert!((water - 18.0152).abs() < 1e-4);
/// assert_eq!(
///     try_molecular_weight("Xx2O"),
///     Err(ElementError::MissingAtomicWeights(vec!["Xx".to_string()]))
/// );
/// ```
pub fn try_molecular_weight(formula: &str) -> Result<f64, ElementError> {
    formula_weight(&parse_formula(formula))
}

/// Calculate the molecular weight of a formula string
///
/// # Parameters
/// - `formula`: &str such as `"C6H12O6"`, parsed with [`parse_formula`]
///
/// # Returns
/// The molecular weight, or `None` if any element of the formula has no listed atomic
/// weight. In that case a warning naming the missing elements is emitted through
/// `tracing`, and the caller is not interrupted.
///
/// # Examples
/// ```rust
/// use reframed_core::chemistry::elements::molecular_weight;
/// let glucose = molecular_weight("C6H12O6").unwrap();
/// assert!((glucose - 180.1554).abs() < 1e-4);
/// assert_eq!(molecular_weight("Xx2O"), None);
/// ```
pub fn molecular_weight(formula: &str) -> Option<f64> {
    match try_molecular_weight(formula) {
        Ok(weight) => Some(weight),
        Err(err) => {
            let ElementError::MissingAtomicWeights(ref missing) = err;
            warn!(%formula, ?missing, "{}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn table_covers_hydrogen_through_meitnerium() {
        assert_eq!(ATOMIC_WEIGHTS.len(), 109);
        assert_eq!(ATOMIC_WEIGHTS.first(), Some((&"H", &1.0079)));
        assert_eq!(ATOMIC_WEIGHTS.last(), Some((&"Mt", &268.)));
        assert!(ATOMIC_WEIGHTS.values().all(|w| *w > 0.));
    }

    #[test]
    fn lookup() {
        assert_eq!(atomic_weight("C"), Some(12.0107));
        assert_eq!(atomic_weight("Na"), Some(22.9897));
        assert_eq!(atomic_weight("Tc"), Some(98.));
        assert_eq!(atomic_weight("Xx"), None);
        assert_eq!(atomic_weight("c"), None);
    }

    #[test]
    fn water() {
        let weight = molecular_weight("H2O").unwrap();
        assert!((weight - (2. * 1.0079 + 15.9994)).abs() < TOLERANCE);
    }

    #[test]
    fn glucose() {
        let weight = molecular_weight("C6H12O6").unwrap();
        let expected = 6. * 12.0107 + 12. * 1.0079 + 6. * 15.9994;
        assert!((weight - expected).abs() < TOLERANCE);
    }

    #[test]
    fn empty_formula_weighs_nothing() {
        assert_eq!(molecular_weight(""), Some(0.));
    }

    #[test]
    fn repeated_element_uses_last_count() {
        let weight = molecular_weight("C2C3").unwrap();
        assert!((weight - 3. * 12.0107).abs() < TOLERANCE);
    }

    #[test]
    fn missing_elements_in_formula_order() {
        let formula = parse_formula("XxC6QqH12Xx");
        assert_eq!(missing_elements(&formula), vec!["Xx", "Qq"]);
        assert_eq!(
            formula_weight(&formula),
            Err(ElementError::MissingAtomicWeights(vec![
                "Xx".to_string(),
                "Qq".to_string()
            ]))
        );
    }

    #[test]
    fn error_message_names_elements() {
        let err = try_molecular_weight("Xx2QqO").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Atomic weight not listed for elements: Xx, Qq"
        );
    }

    #[traced_test]
    #[test]
    fn unknown_element_warns_and_returns_none() {
        assert_eq!(molecular_weight("Xx2O"), None);
        assert!(logs_contain("Atomic weight not listed for elements: Xx"));
    }

    #[traced_test]
    #[test]
    fn known_elements_do_not_warn() {
        assert!(molecular_weight("NaCl").is_some());
        assert!(!logs_contain("Atomic weight not listed"));
    }
}
