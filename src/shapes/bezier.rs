//! Two-segment cubic Bézier curves and their polyline sampling.

use kurbo::{CubicBez, ParamCurve};

use crate::foundation::core::{Affine, Point};

/// Parametric samples taken per cubic segment.
pub const BEZIER_STEPS: usize = 80;

/// Two chained cubic segments sharing their middle point.
///
/// Layout is `[start, cp1, cp2, mid, cp3, cp4, end]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoSegmentCurve {
    /// The seven control points.
    pub points: [Point; 7],
}

impl TwoSegmentCurve {
    /// Build a curve from `(x, y)` pairs.
    pub const fn from_coords(c: [(f64, f64); 7]) -> Self {
        Self {
            points: [
                Point::new(c[0].0, c[0].1),
                Point::new(c[1].0, c[1].1),
                Point::new(c[2].0, c[2].1),
                Point::new(c[3].0, c[3].1),
                Point::new(c[4].0, c[4].1),
                Point::new(c[5].0, c[5].1),
                Point::new(c[6].0, c[6].1),
            ],
        }
    }

    /// Both cubic segments: points 0..=3 and 3..=6.
    pub fn segments(&self) -> [CubicBez; 2] {
        let p = &self.points;
        [
            CubicBez::new(p[0], p[1], p[2], p[3]),
            CubicBez::new(p[3], p[4], p[5], p[6]),
        ]
    }

    /// Map every control point through `affine`.
    pub fn transformed(&self, affine: Affine) -> Self {
        Self {
            points: self.points.map(|p| affine * p),
        }
    }

    /// Flatten to a polyline with `steps` samples per segment.
    ///
    /// The shared midpoint is emitted once, so the result holds `2 * steps + 1` points.
    pub fn sample(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        let [first, second] = self.segments();
        let mut out = Vec::with_capacity(2 * steps + 1);
        out.extend((0..=steps).map(|i| first.eval(i as f64 / steps as f64)));
        out.extend((1..=steps).map(|i| second.eval(i as f64 / steps as f64)));
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/bezier.rs"]
mod tests;
