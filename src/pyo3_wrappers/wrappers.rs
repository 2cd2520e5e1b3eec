use crate::core::config::QuadratureConfig;
use crate::core::integrate::Approximation;
use crate::core::parsing::{parse_config, parse_interval, parse_rule};
use crate::core::rules::Rule;
use crate::display::{gen_display, gen_display_comparison, DisplayConfig, QuadDisplay};
use crate::errors::{IntegError, ProxyError};

/// Generates a visualization of a normal density integral approximation from numeric input.
///
/// * `alpha` - Lower integration bound
/// * `beta` - Upper integration bound
/// * `n` - The number of subintervals
/// * `rule` - The rule label, e.g. `Left`, `Midpoint` or `Simpson`
/// * `mu` - The mean of the normal density
/// * `sigma` - The standard deviation of the normal density
/// * `x_min` - Lower bound of the x-axis window
/// * `x_max` - Upper bound of the x-axis window
/// * `curve_res` - The number of samples of the density curve
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
) -> Result<QuadDisplay, ProxyError> {
    let config = QuadratureConfig {
        alpha,
        beta,
        n: usize::try_from(n).map_err(|_| IntegError::NegativeSubdivisionCount(n))?,
        rule: parse_rule(&rule)?,
        mu,
        sigma,
    };
    Ok(gen_display(
        &config,
        &DisplayConfig {
            x_min,
            x_max,
            curve_res,
            ..DisplayConfig::default()
        },
    )?)
}

/// Generates a visualization from a settings string.
///
/// * `settings` - `key = value` pairs separated by `;`, omitted keys take defaults
/// * `window` - The x-axis window as `[x_min, x_max]`
/// * `curve_res` - The number of samples of the density curve
pub fn display_quadrature_settings(
    settings: String,
    window: String,
    curve_res: usize,
) -> Result<QuadDisplay, ProxyError> {
    let config = parse_config(&settings)?;
    let (x_min, x_max) = parse_interval(&window)?;
    Ok(gen_display(
        &config,
        &DisplayConfig {
            x_min,
            x_max,
            curve_res,
            ..DisplayConfig::default()
        },
    )?)
}

/// Approximations of one settings string under every rule, in declaration order.
pub fn compare_rules(settings: String) -> Result<Vec<Approximation>, ProxyError> {
    let config = parse_config(&settings)?;
    Ok(Rule::ALL
        .iter()
        .map(|&rule| config.with_rule(rule).run())
        .collect::<Result<Vec<_>, _>>()?)
}

/// Visualizations of one settings string under each listed rule.
///
/// * `settings` - `key = value` pairs separated by `;`, the rule key is ignored
/// * `rules` - Rule labels, e.g. `["Left", "Right"]`
pub fn display_rule_comparison(
    settings: String,
    rules: Vec<String>,
) -> Result<Vec<QuadDisplay>, ProxyError> {
    let config = parse_config(&settings)?;
    let rules = rules
        .iter()
        .map(|r| parse_rule(r))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(gen_display_comparison(
        &config,
        &DisplayConfig::default(),
        &rules,
    )?)
}
