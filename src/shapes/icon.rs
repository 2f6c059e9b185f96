//! The three-stroke airflow icon.

use crate::foundation::core::{Affine, Point, Vec2};
use crate::shapes::bezier::TwoSegmentCurve;

/// Side of the square design grid the icon curves are authored in.
pub const ICON_GRID: f64 = 100.0;

/// Point of the design grid that lands on the requested icon center.
pub const ICON_ANCHOR: Point = Point::new(52.0, 50.0);

/// The three airflow strokes, top to bottom, in the 0..100 design grid.
pub const ICON_CURVES: [TwoSegmentCurve; 3] = [
    TwoSegmentCurve::from_coords([
        (18.0, 30.0),
        (30.0, 18.0),
        (44.0, 42.0),
        (56.0, 30.0),
        (68.0, 18.0),
        (80.0, 34.0),
        (90.0, 26.0),
    ]),
    TwoSegmentCurve::from_coords([
        (10.0, 50.0),
        (24.0, 36.0),
        (40.0, 64.0),
        (54.0, 50.0),
        (68.0, 36.0),
        (82.0, 56.0),
        (94.0, 46.0),
    ]),
    TwoSegmentCurve::from_coords([
        (18.0, 70.0),
        (30.0, 58.0),
        (44.0, 82.0),
        (56.0, 70.0),
        (68.0, 58.0),
        (80.0, 74.0),
        (90.0, 66.0),
    ]),
];

/// Design-grid to pixel mapping for an icon of `size` pixels centered on `center`.
pub fn icon_transform(center: Point, size: f64) -> Affine {
    let s = size / ICON_GRID;
    let origin = center - ICON_ANCHOR.to_vec2() * s;
    Affine::translate(Vec2::new(origin.x, origin.y)) * Affine::scale(s)
}

/// The three icon curves placed in pixel space.
pub fn placed_curves(center: Point, size: f64) -> [TwoSegmentCurve; 3] {
    let affine = icon_transform(center, size);
    ICON_CURVES.map(|c| c.transformed(affine))
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/icon.rs"]
mod tests;
