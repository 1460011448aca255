//! Two-metric scatter builder: pick an axis per metric, orient it so the
//! favorable end is right/top, scale to the unit square, then split by means.

use serde::{Deserialize, Serialize};

use crate::domain::{MetricCategory, Population, TeamId};
use crate::percentile::count_percentile;
use crate::quadrant::{classify, Point, Quadrant, QuadrantSplit};

/// How raw values become axis positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    /// Min/max remap of the plotted values.
    #[default]
    Raw,
    /// Count-based percentile against every team that has the metric.
    Percentile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub metric: MetricCategory,
    pub scale: AxisScale,
    /// Flip the axis so smaller raw values land at the right/top end.
    pub invert: bool,
}

impl AxisSpec {
    /// Axis with the favorable direction at the right/top end.
    pub fn new(metric: MetricCategory) -> Self {
        Self {
            metric,
            scale: AxisScale::default(),
            invert: !metric.is_higher_better(),
        }
    }

    pub fn with_scale(mut self, scale: AxisScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub team: TeamId,
    pub raw_x: f64,
    pub raw_y: f64,
    /// Oriented position in [0, 1].
    pub x: f64,
    pub y: f64,
    pub quadrant: Quadrant,
}

impl ScatterPoint {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scatter {
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub points: Vec<ScatterPoint>,
    /// `None` when no team has both metrics.
    pub split: Option<QuadrantSplit>,
}

impl Scatter {
    pub fn in_quadrant(&self, quadrant: Quadrant) -> impl Iterator<Item = &ScatterPoint> {
        self.points.iter().filter(move |p| p.quadrant == quadrant)
    }
}

/// Linear remap of `val` from `[lo, hi]` onto `[0, 1]`, clamped. A flat
/// range maps everything to the middle.
pub fn unit_remap(val: f64, lo: f64, hi: f64) -> f64 {
    if (hi - lo).abs() < 1e-12 {
        return 0.5;
    }
    ((val - lo) / (hi - lo)).clamp(0.0, 1.0)
}

struct AxisScaler {
    spec: AxisSpec,
    lo: f64,
    hi: f64,
    column: Vec<f64>,
}

impl AxisScaler {
    fn new(spec: AxisSpec, population: &Population, plotted: &[f64]) -> Self {
        let lo = plotted.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = plotted.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let column = match spec.scale {
            AxisScale::Percentile => population.column(spec.metric),
            AxisScale::Raw => Vec::new(),
        };
        Self {
            spec,
            lo,
            hi,
            column,
        }
    }

    fn position(&self, raw: f64) -> f64 {
        let t = match self.spec.scale {
            AxisScale::Raw => unit_remap(raw, self.lo, self.hi),
            AxisScale::Percentile => count_percentile(raw, &self.column, true) / 100.0,
        };
        if self.spec.invert {
            1.0 - t
        } else {
            t
        }
    }
}

/// Build a scatter of `x_axis` against `y_axis` for every team in
/// `population` that has both metrics, with quadrants split at the means of
/// the plotted positions.
pub fn scatter(population: &Population, x_axis: AxisSpec, y_axis: AxisSpec) -> Scatter {
    let pairs: Vec<(&TeamId, f64, f64)> = population
        .records()
        .iter()
        .filter_map(|r| Some((&r.team, x_axis.metric.extract(r)?, y_axis.metric.extract(r)?)))
        .collect();

    let xs: Vec<f64> = pairs.iter().map(|&(_, x, _)| x).collect();
    let ys: Vec<f64> = pairs.iter().map(|&(_, _, y)| y).collect();
    let x_scaler = AxisScaler::new(x_axis, population, &xs);
    let y_scaler = AxisScaler::new(y_axis, population, &ys);

    let positions: Vec<Point> = pairs
        .iter()
        .map(|&(_, rx, ry)| Point::new(x_scaler.position(rx), y_scaler.position(ry)))
        .collect();
    let split = classify(&positions);

    let points = pairs
        .iter()
        .zip(&positions)
        .map(|(&(team, raw_x, raw_y), &p)| ScatterPoint {
            team: team.clone(),
            raw_x,
            raw_y,
            x: p.x,
            y: p.y,
            quadrant: split.map_or(Quadrant::BottomLeft, |s| s.quadrant_of(p)),
        })
        .collect();

    Scatter {
        x_axis,
        y_axis,
        points,
        split,
    }
}
