use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::errors::IntegError;

/// A scalar function together with its exact definite integral.
///
/// The exact integral serves as the reference value when measuring the error
/// of an approximation.
pub trait Integrand {
    fn eval(&self, x: f64) -> f64;

    /// The exact value of the integral over `[a, b]`.
    fn exact_integral(&self, a: f64, b: f64) -> f64;
}

impl<T: Integrand + ?Sized> Integrand for &T {
    fn eval(&self, x: f64) -> f64 {
        (**self).eval(x)
    }

    fn exact_integral(&self, a: f64, b: f64) -> f64 {
        (**self).exact_integral(a, b)
    }
}

/// The normal density with mean `mu` and standard deviation `sigma`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mu: f64,
    sigma: f64,
    normal: Normal,
}

impl Gaussian {
    pub fn new(mu: f64, sigma: f64) -> Result<Self, IntegError> {
        if !mu.is_finite() {
            return Err(IntegError::InvalidLocationParameter(mu));
        }
        if !(sigma.is_finite() && sigma > 0f64) {
            return Err(IntegError::InvalidScaleParameter(sigma));
        }
        let normal = Normal::new(mu, sigma).map_err(|_| IntegError::InvalidScaleParameter(sigma))?;
        Ok(Self { mu, sigma, normal })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.normal.cdf(x)
    }
}

impl Integrand for Gaussian {
    fn eval(&self, x: f64) -> f64 {
        self.normal.pdf(x)
    }

    fn exact_integral(&self, a: f64, b: f64) -> f64 {
        self.cdf(b) - self.cdf(a)
    }
}

/// Adapts a function `f` and an antiderivative `big_f` of it into an [`Integrand`].
pub struct Antiderivative<F, G> {
    f: F,
    big_f: G,
}

impl<F, G> Antiderivative<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    pub fn new(f: F, big_f: G) -> Self {
        Self { f, big_f }
    }
}

impl<F, G> Integrand for Antiderivative<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn exact_integral(&self, a: f64, b: f64) -> f64 {
        (self.big_f)(b) - (self.big_f)(a)
    }
}
