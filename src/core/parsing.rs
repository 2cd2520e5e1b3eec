use std::collections::HashSet;

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map_res, opt, value},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, preceded, separated_pair, terminated},
    IResult,
};

use crate::{
    core::{config::QuadratureConfig, rules::Rule},
    errors::ParseError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Param {
    Alpha,
    Beta,
    N,
    Rule,
    Mu,
    Sigma,
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn rule(input: &str) -> IResult<&str, Rule> {
    alt((
        value(Rule::Left, tag_no_case("left")),
        value(Rule::Right, tag_no_case("right")),
        value(
            Rule::Midpoint,
            alt((tag_no_case("midpoint"), tag_no_case("mid"))),
        ),
        value(
            Rule::Trapezoidal,
            alt((
                tag_no_case("trapezoidal"),
                tag_no_case("trapezoid"),
                tag_no_case("trap"),
            )),
        ),
        value(
            Rule::Simpson,
            alt((
                tag_no_case("simpson's"),
                tag_no_case("simpsons"),
                tag_no_case("simpson"),
            )),
        ),
    ))(input)
}

fn interval(input: &str) -> IResult<&str, (f64, f64)> {
    delimited(
        ws(char('[')),
        separated_pair(ws(double), char(','), ws(double)),
        ws(char(']')),
    )(input)
}

fn count(input: &str) -> IResult<&str, usize> {
    map_res(ws(digit1), |digits: &str| digits.parse::<usize>())(input)
}

fn entry(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        ws(take_while1(|c: char| c.is_alphabetic() || c == '_')),
        char('='),
        take_while1(|c: char| c != ';'),
    )(input)
}

fn entries(input: &str) -> IResult<&str, Vec<(&str, &str)>> {
    preceded(
        multispace0,
        terminated(separated_list0(char(';'), ws(entry)), opt(ws(char(';')))),
    )(input)
}

fn param(key: &str) -> Option<&'static [Param]> {
    let params: &'static [Param] = match key.to_lowercase().as_str() {
        "alpha" | "α" | "a" | "lower" => &[Param::Alpha],
        "beta" | "β" | "b" | "upper" => &[Param::Beta],
        "interval" | "bounds" => &[Param::Alpha, Param::Beta],
        "n" | "subintervals" => &[Param::N],
        "rule" | "side" | "method" => &[Param::Rule],
        "mu" | "μ" | "mean" => &[Param::Mu],
        "sigma" | "σ" | "sd" | "std" => &[Param::Sigma],
        _ => return None,
    };
    Some(params)
}

/// Parses a rule label such as `Left`, `midpoint` or `Simpson's`, ignoring case.
pub fn parse_rule(input: &str) -> Result<Rule, ParseError> {
    all_consuming(ws(rule))(input)
        .map(|(_, r)| r)
        .map_err(|_| ParseError::UnknownRule(input.trim().to_string()))
}

/// Parses an interval literal `[alpha, beta]`. Ordering is not checked.
pub fn parse_interval(input: &str) -> Result<(f64, f64), ParseError> {
    Ok(all_consuming(interval)(input)?.1)
}

pub fn parse_number(input: &str) -> Result<f64, ParseError> {
    Ok(all_consuming(ws(double))(input)?.1)
}

pub fn parse_count(input: &str) -> Result<usize, ParseError> {
    all_consuming(count)(input)
        .map(|(_, n)| n)
        .map_err(|_| ParseError::InvalidSubdivisionCount(input.trim().to_string()))
}

/// Parses a settings string of `key = value` pairs separated by `;`, e.g.
/// `alpha = -2; beta = 2; n = 10; rule = midpoint; mu = 0; sigma = 1`.
///
/// Omitted parameters keep their default values. `interval = [a, b]` sets
/// both bounds at once. Values are not validated beyond their syntax.
pub fn parse_config(input: &str) -> Result<QuadratureConfig, ParseError> {
    let (_, pairs) = all_consuming(entries)(input)?;
    let mut config = QuadratureConfig::default();
    let mut declared = HashSet::new();

    for (key, raw) in pairs {
        let params = param(key).ok_or_else(|| ParseError::UnknownParameter(key.to_string()))?;
        for p in params {
            if !declared.insert(*p) {
                return Err(ParseError::DuplicateParameter(key.to_string()));
            }
        }
        match params {
            [Param::Alpha, Param::Beta] => {
                (config.alpha, config.beta) = parse_interval(raw)?;
            }
            [Param::Alpha] => config.alpha = parse_number(raw)?,
            [Param::Beta] => config.beta = parse_number(raw)?,
            [Param::N] => config.n = parse_count(raw)?,
            [Param::Rule] => config.rule = parse_rule(raw)?,
            [Param::Mu] => config.mu = parse_number(raw)?,
            [Param::Sigma] => config.sigma = parse_number(raw)?,
            _ => return Err(ParseError::UnknownParameter(key.to_string())),
        }
    }
    Ok(config)
}
