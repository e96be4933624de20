//! Module for parsing chemical formula strings into element counts

use indexmap::IndexMap;

pub mod lexer;
pub mod token;

pub use token::ElementToken;

/// Parsed chemical formula, a map of element symbols to atom counts
///
/// Elements are kept in the order they first appear in the formula string.
pub type Formula = IndexMap<String, u64>;

/// Parse a chemical formula string into a map of element counts
///
/// # Parameters
/// - `formula`: &str such as `"C6H12O6"`
///
/// # Returns
/// A [`Formula`] mapping each element symbol to its count. Characters which are not part
/// of an `Element Count` group are ignored, so this never fails, and input without any
/// element gives an empty map.
///
/// # Note
/// If an element symbol occurs more than once, the last count replaces the earlier ones
/// rather than being added to them, so `"C2C3"` parses to `{C: 3}`.
///
/// # Examples
/// ```rust
/// use reframed_core::io::formula_parse::parse_formula;
/// let glucose = parse_formula("C6H12O6");
/// assert_eq!(glucose["C"], 6);
/// assert_eq!(glucose["H"], 12);
/// assert_eq!(glucose["O"], 6);
/// ```
pub fn parse_formula(formula: &str) -> Formula {
    lexer::Lexer::new(formula)
        .lex()
        .into_iter()
        .map(|token| (token.symbol, token.count))
        .collect()
}
