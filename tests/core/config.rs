use approx::assert_abs_diff_eq;
use numint::{
    core::{
        config::{QuadratureConfig, MAX_SUBINTERVALS},
        rules::Rule,
    },
    errors::IntegError,
};

#[test]
fn defaults() {
    let config = QuadratureConfig::default();
    assert_eq!(config.alpha, -2f64);
    assert_eq!(config.beta, 2f64);
    assert_eq!(config.n, 10);
    assert_eq!(config.rule, Rule::Midpoint);
    assert_eq!(config.mu, 0f64);
    assert_eq!(config.sigma, 1f64);
}

#[test]
fn run_defaults() {
    let approx = QuadratureConfig::default().run().unwrap();
    assert_eq!(approx.rule, Rule::Midpoint);
    assert_eq!(approx.subintervals.len(), 10);
    assert_abs_diff_eq!(approx.width(), 0.4, epsilon = 1e-15);
    assert_abs_diff_eq!(approx.total_area, 0.9559325162584305, epsilon = 1e-9);
    assert_abs_diff_eq!(approx.reference_area, 0.9544997361036416, epsilon = 1e-10);
}

#[test]
fn with_rule() {
    let config = QuadratureConfig::default().with_rule(Rule::Simpson);
    assert_eq!(config.rule, Rule::Simpson);
    assert_eq!(config.n, 10);
}

#[test]
fn rejects_degenerate_interval() {
    let config = QuadratureConfig {
        beta: -2f64,
        ..QuadratureConfig::default()
    };
    assert_eq!(
        config.run(),
        Err(IntegError::InvalidInterval {
            alpha: -2f64,
            beta: -2f64
        })
    );
}

#[test]
fn rejects_zero_sigma() {
    let config = QuadratureConfig {
        sigma: 0f64,
        ..QuadratureConfig::default()
    };
    assert_eq!(config.run(), Err(IntegError::InvalidScaleParameter(0f64)));
}

#[test]
fn subdivision_limits() {
    let at_limit = QuadratureConfig {
        n: MAX_SUBINTERVALS,
        ..QuadratureConfig::default()
    };
    assert!(at_limit.validate().is_ok());

    let over = QuadratureConfig {
        n: MAX_SUBINTERVALS + 1,
        ..QuadratureConfig::default()
    };
    assert_eq!(
        over.validate(),
        Err(IntegError::InvalidSubdivisionCount(MAX_SUBINTERVALS + 1))
    );

    let zero = QuadratureConfig {
        n: 0,
        ..QuadratureConfig::default()
    };
    assert_eq!(zero.run(), Err(IntegError::InvalidSubdivisionCount(0)));
}
