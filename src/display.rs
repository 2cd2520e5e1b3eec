use ordered_float::OrderedFloat;

use crate::{
    core::{
        config::QuadratureConfig,
        helpers::{linspace, simpson_parabola},
        integrand::Integrand,
        integrate::{Approximation, SubintervalRecord},
        rules::{Height, Rule},
    },
    errors::DisplayError,
};

/// Plot-ready description of one subinterval.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDisplay {
    pub a: f64,
    pub b: f64,
    pub heights: Vec<f64>,
    /// Closed outline of the shaded region, starting and ending on the x-axis.
    pub outline: Vec<[f64; 2]>,
    /// Anchor of the area label.
    pub label: [f64; 2],
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuadDisplay {
    pub curve_xv: Vec<f64>,
    pub curve_yv: Vec<f64>,
    /// Upper limit of the y-axis, the curve maximum plus the margin.
    pub y_max: f64,
    pub regions: Vec<RegionDisplay>,
    pub approximation: Approximation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub curve_res: usize,
    /// Samples per Simpson arc.
    pub arc_res: usize,
    pub y_margin: f64,
    pub label_height: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            x_min: -3f64,
            x_max: 3f64,
            curve_res: 100,
            arc_res: 24,
            y_margin: 0.02,
            label_height: 0.02,
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), DisplayError> {
        if !(self.x_min.is_finite() && self.x_max.is_finite()) || self.x_min >= self.x_max {
            return Err(DisplayError::BadInput(format!(
                "Expected a finite x-axis window with x_min < x_max, but found [{}, {}]",
                self.x_min, self.x_max
            )));
        }
        if self.curve_res < 2 {
            return Err(DisplayError::BadInput(
                "Expected at least 2 points in the curve resolution.".to_string(),
            ));
        }
        if self.arc_res < 2 {
            return Err(DisplayError::BadInput(
                "Expected at least 2 points in the arc resolution.".to_string(),
            ));
        }
        Ok(())
    }

    /// Samples `f` over the x-axis window and lays out one region per
    /// subinterval of `approximation`.
    pub fn display(
        &self,
        f: impl Integrand,
        approximation: Approximation,
    ) -> Result<QuadDisplay, DisplayError> {
        self.validate()?;
        let curve_xv = linspace(self.x_min, self.x_max, self.curve_res);
        let curve_yv: Vec<f64> = curve_xv.iter().map(|&x| f.eval(x)).collect();

        let regions: Vec<RegionDisplay> = approximation
            .subintervals
            .iter()
            .map(|s| RegionDisplay {
                a: s.a,
                b: s.b,
                heights: s.height.values(),
                outline: gen_region_outline(s, self.arc_res),
                label: [(s.a + s.b) / 2f64, self.label_height],
                area: s.area,
            })
            .collect();

        let y_max = curve_yv
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .map(|y| y.0)
            .unwrap_or_default()
            + self.y_margin;

        Ok(QuadDisplay {
            curve_xv,
            curve_yv,
            y_max,
            regions,
            approximation,
        })
    }
}

/// The closed outline of the region a rule shades over one subinterval.
///
/// Rectangles and trapezoids are exact. Simpson arcs are sampled at `arc_res` points.
pub fn gen_region_outline(s: &SubintervalRecord, arc_res: usize) -> Vec<[f64; 2]> {
    let (a, b) = (s.a, s.b);
    let mut outline = vec![[a, 0f64]];
    match s.height {
        Height::Single(h) => outline.extend([[a, h], [b, h]]),
        Height::Pair(ha, hb) => outline.extend([[a, ha], [b, hb]]),
        Height::Triple(ha, hm, hb) => outline.extend(
            linspace(a, b, arc_res)
                .into_iter()
                .map(|x| [x, simpson_parabola(a, b, [ha, hm, hb], x)]),
        ),
    }
    outline.push([b, 0f64]);
    outline
}

/// Runs `config` and lays out the result with `display_config`.
pub fn gen_display(
    config: &QuadratureConfig,
    display_config: &DisplayConfig,
) -> Result<QuadDisplay, DisplayError> {
    let approximation = config.run()?;
    display_config.display(config.integrand()?, approximation)
}

/// Displays of the same configuration under each rule in `rules`.
pub fn gen_display_comparison(
    config: &QuadratureConfig,
    display_config: &DisplayConfig,
    rules: &[Rule],
) -> Result<Vec<QuadDisplay>, DisplayError> {
    rules
        .iter()
        .map(|&rule| gen_display(&config.with_rule(rule), display_config))
        .collect()
}
