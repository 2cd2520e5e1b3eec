pub mod core;
#[cfg(feature = "python")]
pub mod cpython_funcs;
pub mod display;
pub mod errors;
pub mod pyo3_wrappers;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
use cpython_funcs::extension::{
    compare_rules, display_quadrature, display_quadrature_settings, display_rule_comparison,
    PyApproximation, PyQuadDisplay, PyRegion, PySubinterval,
};

#[cfg(feature = "python")]
#[pymodule]
fn numint(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PySubinterval>()?;
    m.add_class::<PyApproximation>()?;
    m.add_class::<PyRegion>()?;
    m.add_class::<PyQuadDisplay>()?;
    m.add_function(wrap_pyfunction!(display_quadrature, m)?)?;
    m.add_function(wrap_pyfunction!(display_quadrature_settings, m)?)?;
    m.add_function(wrap_pyfunction!(display_rule_comparison, m)?)?;
    m.add_function(wrap_pyfunction!(compare_rules, m)?)?;
    Ok(())
}
