//! Mean-split quadrant classification for two-metric comparisons.
//!
//! Larger x is right and larger y is top, always. Callers that want "lower is
//! better" on an axis flip the values before they get here (see
//! [`AxisSpec::invert`](crate::scatter::AxisSpec)); by the time a point is
//! classified, top-right means good on both axes.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub fn is_top(&self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Axis means of one point set; the crosshair a plot draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrantSplit {
    pub x_mean: f64,
    pub y_mean: f64,
}

impl QuadrantSplit {
    /// Strictly greater than the mean is right/top; a point sitting on a mean
    /// falls left/bottom.
    pub fn quadrant_of(&self, p: Point) -> Quadrant {
        match (p.x > self.x_mean, p.y > self.y_mean) {
            (true, true) => Quadrant::TopRight,
            (false, true) => Quadrant::TopLeft,
            (true, false) => Quadrant::BottomRight,
            (false, false) => Quadrant::BottomLeft,
        }
    }
}

/// Means of the current point set. `None` for an empty set.
///
/// Always derived from `points`; nothing carries over between calls.
pub fn classify(points: &[Point]) -> Option<QuadrantSplit> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(QuadrantSplit {
        x_mean: sx / n,
        y_mean: sy / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_point_scenario() {
        let points = [Point::new(1.0, 1.0), Point::new(3.0, 3.0)];
        let split = classify(&points).unwrap();
        assert!((split.x_mean - 2.0).abs() < 1e-10);
        assert!((split.y_mean - 2.0).abs() < 1e-10);
        assert_eq!(split.quadrant_of(points[0]), Quadrant::BottomLeft);
        assert_eq!(split.quadrant_of(points[1]), Quadrant::TopRight);
    }

    #[test]
    fn off_diagonal_quadrants() {
        let split = QuadrantSplit {
            x_mean: 0.0,
            y_mean: 0.0,
        };
        assert_eq!(split.quadrant_of(Point::new(-1.0, 1.0)), Quadrant::TopLeft);
        assert_eq!(split.quadrant_of(Point::new(1.0, -1.0)), Quadrant::BottomRight);
    }

    #[test]
    fn point_on_mean_is_bottom_left() {
        let split = classify(&[Point::new(2.0, 2.0)]).unwrap();
        assert_eq!(split.quadrant_of(Point::new(2.0, 2.0)), Quadrant::BottomLeft);
    }

    #[test]
    fn empty_has_no_split() {
        assert!(classify(&[]).is_none());
    }

    #[test]
    fn means_follow_population() {
        let mut points = vec![Point::new(1.0, 1.0), Point::new(3.0, 3.0)];
        let before = classify(&points).unwrap();
        points.push(Point::new(8.0, 2.0));
        let after = classify(&points).unwrap();
        assert!((after.x_mean - 4.0).abs() < 1e-10);
        assert!((after.y_mean - 2.0).abs() < 1e-10);
        // (3,3) is right of the old mean but left of the new one.
        assert!(before.quadrant_of(Point::new(3.0, 3.0)).is_right());
        assert!(!after.quadrant_of(Point::new(3.0, 3.0)).is_right());
    }

    #[test]
    fn quadrant_serializes_kebab_case() {
        let json = serde_json::to_string(&Quadrant::BottomRight).unwrap();
        assert_eq!(json, "\"bottom-right\"");
    }
}
