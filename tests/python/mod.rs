use approx::assert_abs_diff_eq;
use numint::{
    core::{config::QuadratureConfig, rules::Rule},
    cpython_funcs::extension::{PyApproximation, PyQuadDisplay},
    display::{gen_display, DisplayConfig},
};

#[test]
fn approximation_conversion() {
    let approx = QuadratureConfig::default()
        .with_rule(Rule::Trapezoidal)
        .run()
        .unwrap();
    let py = PyApproximation::from(approx.clone());

    assert_eq!(py.rule, "Trapezoidal");
    assert_eq!(py.subintervals.len(), 10);
    assert_eq!(py.subintervals[0].heights.len(), 2);
    assert_eq!(py.subintervals[0].a, approx.subintervals[0].a);
    assert_eq!(py.total_area, approx.total_area);
    assert_eq!(py.percentage_error, approx.percentage_error);
}

#[test]
fn display_conversion() {
    let config = QuadratureConfig {
        n: 4,
        rule: Rule::Simpson,
        ..QuadratureConfig::default()
    };
    let display = gen_display(&config, &DisplayConfig::default()).unwrap();
    let py = PyQuadDisplay::from(display.clone());

    assert_eq!(py.curve_xv, display.curve_xv);
    assert_abs_diff_eq!(py.y_max, display.y_max, epsilon = 1e-15);
    assert_eq!(py.regions.len(), 4);
    assert_eq!(py.regions[2].outline, display.regions[2].outline);
    assert_eq!(py.approximation.rule, "Simpson");
}
