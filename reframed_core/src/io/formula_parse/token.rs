//! Module providing the ElementToken struct for lexing

use serde::{Deserialize, Serialize};

/// Represents a single `Element Count` group of a chemical formula
#[derive(Debug, PartialEq, Clone, Eq, Hash, Serialize, Deserialize)]
pub struct ElementToken {
    /// Element symbol, one uppercase letter optionally followed by a lowercase letter
    pub symbol: String,
    /// Number of atoms, 1 when the formula gives no count
    pub count: u64,
}
