use std::{fmt::Display, str::FromStr};

use crate::errors::ParseError;

/// The rule used to approximate the area over a single subinterval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rule {
    Left,
    Right,
    #[default]
    Midpoint,
    Trapezoidal,
    Simpson,
}

/// The integrand values a rule samples on one subinterval, left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Height {
    /// Rectangular rules, a single sample.
    Single(f64),
    /// Trapezoidal rule, `f(a)` and `f(b)`.
    Pair(f64, f64),
    /// Simpson's rule, `f(a)`, `f(m)` and `f(b)`.
    Triple(f64, f64, f64),
}

impl Height {
    pub fn values(&self) -> Vec<f64> {
        match *self {
            Height::Single(h) => vec![h],
            Height::Pair(ha, hb) => vec![ha, hb],
            Height::Triple(ha, hm, hb) => vec![ha, hm, hb],
        }
    }

    pub fn max(&self) -> f64 {
        self.values().into_iter().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::Left,
        Rule::Right,
        Rule::Midpoint,
        Rule::Trapezoidal,
        Rule::Simpson,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Left => "Left",
            Rule::Right => "Right",
            Rule::Midpoint => "Midpoint",
            Rule::Trapezoidal => "Trapezoidal",
            Rule::Simpson => "Simpson",
        }
    }

    /// Whether the rule approximates with a single rectangle height.
    pub fn is_rectangular(&self) -> bool {
        matches!(self, Rule::Left | Rule::Right | Rule::Midpoint)
    }

    /// Samples `f` on `[a, b]` and returns the sampled heights and the area
    /// contribution for a subinterval of the given `width`.
    pub fn apply(&self, f: impl Fn(f64) -> f64, a: f64, b: f64, width: f64) -> (Height, f64) {
        let m = (a + b) / 2f64;
        match self {
            Rule::Left => {
                let fa = f(a);
                (Height::Single(fa), width * fa)
            }
            Rule::Right => {
                let fb = f(b);
                (Height::Single(fb), width * fb)
            }
            Rule::Midpoint => {
                let fm = f(m);
                (Height::Single(fm), width * fm)
            }
            Rule::Trapezoidal => {
                let (fa, fb) = (f(a), f(b));
                (Height::Pair(fa, fb), width * (fa + fb) / 2f64)
            }
            Rule::Simpson => {
                let (fa, fm, fb) = (f(a), f(m), f(b));
                (
                    Height::Triple(fa, fm, fb),
                    width / 6f64 * (fa + 4f64 * fm + fb),
                )
            }
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Rule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::parsing::parse_rule(s)
    }
}
