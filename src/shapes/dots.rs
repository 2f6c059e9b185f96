//! Rectangular dot clusters.

use crate::foundation::core::Point;

/// Rectangular grid of equally spaced dots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotGrid {
    /// Center of the top-left dot.
    pub origin: Point,
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Distance between neighbouring dot centers.
    pub spacing: f64,
    /// Dot radius.
    pub radius: f64,
}

impl DotGrid {
    /// Dot centers in row-major order.
    pub fn centers(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).map(move |c| {
                Point::new(
                    self.origin.x + f64::from(c) * self.spacing,
                    self.origin.y + f64::from(r) * self.spacing,
                )
            })
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/dots.rs"]
mod tests;
