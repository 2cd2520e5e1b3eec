use approx::abs_diff_eq;
use log::{debug, trace, warn};

use crate::{
    core::{helpers::partition, integrand::Integrand, rules::Height, rules::Rule},
    errors::IntegError,
};

/// Reference areas within this distance of zero admit no percentage error.
pub const DEGENERATE_REFERENCE_TOL: f64 = 1e-15;

/// The approximation over one subinterval of the partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubintervalRecord {
    pub a: f64,
    pub b: f64,
    pub width: f64,
    pub height: Height,
    pub area: f64,
}

/// The outcome of approximating an integral with a single rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Approximation {
    pub rule: Rule,
    /// Ordered left to right.
    pub subintervals: Vec<SubintervalRecord>,
    pub total_area: f64,
    pub reference_area: f64,
    /// `None` when the reference area is degenerate or the percentage is not finite.
    pub percentage_error: Option<f64>,
}

impl Approximation {
    pub fn checked_percentage_error(&self) -> Result<f64, IntegError> {
        percentage_error(self.total_area, self.reference_area)
    }

    pub fn absolute_error(&self) -> f64 {
        (self.total_area - self.reference_area).abs()
    }

    pub fn width(&self) -> f64 {
        self.subintervals.first().map(|s| s.width).unwrap_or_default()
    }
}

/// Signed relative error of `total` against `reference`, in percent.
///
/// Fails rather than returning an infinite or NaN percentage.
pub fn percentage_error(total: f64, reference: f64) -> Result<f64, IntegError> {
    if abs_diff_eq!(reference, 0f64, epsilon = DEGENERATE_REFERENCE_TOL) {
        return Err(IntegError::DegenerateReference(reference));
    }
    let err = (total - reference) / reference * 100f64;
    if !err.is_finite() {
        return Err(IntegError::NonFiniteError { total, reference });
    }
    Ok(err)
}

pub(crate) fn validate_bounds(alpha: f64, beta: f64, n: usize) -> Result<(), IntegError> {
    if !(alpha.is_finite() && beta.is_finite() && (beta - alpha).is_finite()) || alpha >= beta {
        return Err(IntegError::InvalidInterval { alpha, beta });
    }
    if n < 1 || n.checked_add(1).is_none() {
        return Err(IntegError::InvalidSubdivisionCount(n));
    }
    Ok(())
}

/// Approximates the integral of `f` over `[alpha, beta]` on a uniform
/// partition of `n` subintervals and compares it with the exact value.
///
/// * `f` - The integrand
/// * `alpha` - Lower integration bound, must be finite and less than `beta`
/// * `beta` - Upper integration bound, must be finite, as must `beta - alpha`
/// * `n` - The number of subintervals, at least 1
/// * `rule` - The rule applied on each subinterval
///
/// Precision loss for very large `n` is not detected.
pub fn approximate(
    f: impl Integrand,
    alpha: f64,
    beta: f64,
    n: usize,
    rule: Rule,
) -> Result<Approximation, IntegError> {
    validate_bounds(alpha, beta, n)?;
    debug!(
        "Approximating over [{}, {}] with {} subintervals using the {} rule",
        alpha, beta, n, rule
    );

    let width = (beta - alpha) / n as f64;
    let xv = partition(alpha, beta, n);
    let subintervals: Vec<SubintervalRecord> = xv
        .windows(2)
        .map(|ab| {
            let (a, b) = (ab[0], ab[1]);
            let (height, area) = rule.apply(|x| f.eval(x), a, b, width);
            trace!("[{}, {}]: height {:?}, area {}", a, b, height, area);
            SubintervalRecord {
                a,
                b,
                width,
                height,
                area,
            }
        })
        .collect();

    let total_area = subintervals.iter().fold(0f64, |acc, s| acc + s.area);
    let reference_area = f.exact_integral(alpha, beta);
    let percentage_error = match percentage_error(total_area, reference_area) {
        Ok(err) => Some(err),
        Err(e) => {
            warn!("{}", e);
            None
        }
    };

    Ok(Approximation {
        rule,
        subintervals,
        total_area,
        reference_area,
        percentage_error,
    })
}

/// The total area of the approximation of any function `f`, without a reference value.
pub fn riemann_sum(
    f: impl Fn(f64) -> f64,
    alpha: f64,
    beta: f64,
    n: usize,
    rule: Rule,
) -> Result<f64, IntegError> {
    validate_bounds(alpha, beta, n)?;
    let width = (beta - alpha) / n as f64;
    Ok(partition(alpha, beta, n)
        .windows(2)
        .map(|ab| rule.apply(&f, ab[0], ab[1], width).1)
        .fold(0f64, |acc, area| acc + area))
}
