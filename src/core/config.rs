use crate::{
    core::{
        integrand::Gaussian,
        integrate::{approximate, validate_bounds, Approximation},
        rules::Rule,
    },
    errors::IntegError,
};

/// Largest subdivision count accepted from the front end.
pub const MAX_SUBINTERVALS: usize = 200;

/// Every input of one approximation of the normal density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureConfig {
    pub alpha: f64,
    pub beta: f64,
    pub n: usize,
    pub rule: Rule,
    pub mu: f64,
    pub sigma: f64,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            alpha: -2f64,
            beta: 2f64,
            n: 10,
            rule: Rule::Midpoint,
            mu: 0f64,
            sigma: 1f64,
        }
    }
}

impl QuadratureConfig {
    pub fn validate(&self) -> Result<(), IntegError> {
        validate_bounds(self.alpha, self.beta, self.n)?;
        if self.n > MAX_SUBINTERVALS {
            return Err(IntegError::InvalidSubdivisionCount(self.n));
        }
        self.integrand().map(|_| ())
    }

    pub fn integrand(&self) -> Result<Gaussian, IntegError> {
        Gaussian::new(self.mu, self.sigma)
    }

    pub fn run(&self) -> Result<Approximation, IntegError> {
        self.validate()?;
        approximate(self.integrand()?, self.alpha, self.beta, self.n, self.rule)
    }

    /// The same configuration evaluated with another rule.
    pub fn with_rule(self, rule: Rule) -> Self {
        Self { rule, ..self }
    }
}
