use pyo3::prelude::*;

use pyo3::PyResult;

use crate::core::integrate::{Approximation, SubintervalRecord};
use crate::display::{QuadDisplay, RegionDisplay};
use crate::pyo3_wrappers;

#[pyclass(name = "Subinterval")]
#[derive(Clone)]
pub struct PySubinterval {
    #[pyo3(get)]
    pub a: f64,
    #[pyo3(get)]
    pub b: f64,
    #[pyo3(get)]
    pub width: f64,
    #[pyo3(get)]
    pub heights: Vec<f64>,
    #[pyo3(get)]
    pub area: f64,
}

impl From<&SubintervalRecord> for PySubinterval {
    fn from(s: &SubintervalRecord) -> Self {
        Self {
            a: s.a,
            b: s.b,
            width: s.width,
            heights: s.height.values(),
            area: s.area,
        }
    }
}

#[pyclass(name = "Approximation")]
#[derive(Clone)]
pub struct PyApproximation {
    #[pyo3(get)]
    pub rule: String,
    #[pyo3(get)]
    pub subintervals: Vec<PySubinterval>,
    #[pyo3(get)]
    pub total_area: f64,
    #[pyo3(get)]
    pub reference_area: f64,
    #[pyo3(get)]
    pub percentage_error: Option<f64>,
}

impl From<Approximation> for PyApproximation {
    fn from(a: Approximation) -> Self {
        Self {
            rule: a.rule.to_string(),
            subintervals: a.subintervals.iter().map(PySubinterval::from).collect(),
            total_area: a.total_area,
            reference_area: a.reference_area,
            percentage_error: a.percentage_error,
        }
    }
}

#[pyclass(name = "Region")]
#[derive(Clone)]
pub struct PyRegion {
    #[pyo3(get)]
    pub a: f64,
    #[pyo3(get)]
    pub b: f64,
    #[pyo3(get)]
    pub heights: Vec<f64>,
    #[pyo3(get)]
    pub outline: Vec<[f64; 2]>,
    #[pyo3(get)]
    pub label: [f64; 2],
    #[pyo3(get)]
    pub area: f64,
}

impl From<RegionDisplay> for PyRegion {
    fn from(r: RegionDisplay) -> Self {
        Self {
            a: r.a,
            b: r.b,
            heights: r.heights,
            outline: r.outline,
            label: r.label,
            area: r.area,
        }
    }
}

#[pyclass(name = "QuadDisplay")]
#[derive(Clone)]
pub struct PyQuadDisplay {
    #[pyo3(get)]
    pub curve_xv: Vec<f64>,
    #[pyo3(get)]
    pub curve_yv: Vec<f64>,
    #[pyo3(get)]
    pub y_max: f64,
    #[pyo3(get)]
    pub regions: Vec<PyRegion>,
    #[pyo3(get)]
    pub approximation: PyApproximation,
}

impl From<QuadDisplay> for PyQuadDisplay {
    fn from(d: QuadDisplay) -> Self {
        Self {
            curve_xv: d.curve_xv,
            curve_yv: d.curve_yv,
            y_max: d.y_max,
            regions: d.regions.into_iter().map(PyRegion::from).collect(),
            approximation: d.approximation.into(),
        }
    }
}

#[pyfunction]
pub fn display_quadrature(
    alpha: f64,
    beta: f64,
    n: i64,
    rule: String,
    mu: f64,
    sigma: f64,
    x_min: f64,
    x_max: f64,
    curve_res: usize,
) -> PyResult<PyQuadDisplay> {
    Ok(pyo3_wrappers::display_quadrature(
        alpha, beta, n, rule, mu, sigma, x_min, x_max, curve_res,
    )?
    .into())
}

#[pyfunction]
pub fn display_quadrature_settings(
    settings: String,
    window: String,
    curve_res: usize,
) -> PyResult<PyQuadDisplay> {
    Ok(pyo3_wrappers::display_quadrature_settings(settings, window, curve_res)?.into())
}

#[pyfunction]
pub fn display_rule_comparison(
    settings: String,
    rules: Vec<String>,
) -> PyResult<Vec<PyQuadDisplay>> {
    Ok(pyo3_wrappers::display_rule_comparison(settings, rules)?
        .into_iter()
        .map(PyQuadDisplay::from)
        .collect())
}

#[pyfunction]
pub fn compare_rules(settings: String) -> PyResult<Vec<PyApproximation>> {
    Ok(pyo3_wrappers::compare_rules(settings)?
        .into_iter()
        .map(PyApproximation::from)
        .collect())
}
