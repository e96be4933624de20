use std::ffi::CString;

use pyo3::exceptions::PyUserWarning;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Convert compound formula from string to dictionary.
///
/// For example, C6H12O6 (glucose) becomes {C: 6, H: 12, O: 6}.
#[pyfunction]
fn parse_formula<'py>(py: Python<'py>, formula: &str) -> PyResult<Bound<'py, PyDict>> {
    let elements = PyDict::new(py);
    for (symbol, count) in reframed_core::parse_formula(formula) {
        elements.set_item(symbol, count)?;
    }
    Ok(elements)
}

/// Molecular weight of a compound formula, or None (with a UserWarning) if an element has
/// no listed atomic weight.
#[pyfunction]
fn molecular_weight(py: Python<'_>, formula: &str) -> PyResult<Option<f64>> {
    match reframed_core::try_molecular_weight(formula) {
        Ok(weight) => Ok(Some(weight)),
        Err(err) => {
            let message = CString::new(err.to_string())?;
            PyErr::warn(py, py.get_type::<PyUserWarning>().as_any(), &message, 1)?;
            Ok(None)
        }
    }
}

/// Table of atomic weights indexed by element symbol
#[pyfunction]
fn atomic_weights(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    let weights = PyDict::new(py);
    for (symbol, weight) in reframed_core::ATOMIC_WEIGHTS.iter() {
        weights.set_item(*symbol, *weight)?;
    }
    Ok(weights)
}

/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
/// import the module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_formula, m)?)?;
    m.add_function(wrap_pyfunction!(molecular_weight, m)?)?;
    m.add_function(wrap_pyfunction!(atomic_weights, m)?)?;
    Ok(())
}
