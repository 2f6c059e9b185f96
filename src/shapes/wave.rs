//! Decorative sine waves.

use std::f64::consts::TAU;

use crate::foundation::core::Point;

/// Horizontal distance between consecutive wave samples, in pixels.
pub const WAVE_SAMPLE_STEP: usize = 2;

/// A decorative sine wave across a horizontal span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    /// Baseline the wave oscillates around.
    pub y_base: f64,
    /// Peak deviation from the baseline.
    pub amplitude: f64,
    /// Horizontal period.
    pub wavelength: f64,
    /// Span start; phase is measured from here.
    pub x_start: f64,
    /// Span end (exclusive).
    pub x_end: f64,
}

impl Wave {
    /// Height of the wave at `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        if self.wavelength == 0.0 {
            return self.y_base;
        }
        self.y_base + self.amplitude * (TAU * (x - self.x_start) / self.wavelength).sin()
    }

    /// Samples at whole-pixel x positions every [`WAVE_SAMPLE_STEP`] pixels.
    ///
    /// Starts at the truncated span start and stops before the truncated span end.
    pub fn points(&self) -> Vec<Point> {
        let start = self.x_start.trunc() as i64;
        let end = self.x_end.trunc() as i64;
        if end <= start {
            return Vec::new();
        }
        (start..end)
            .step_by(WAVE_SAMPLE_STEP)
            .map(|x| {
                let x = x as f64;
                Point::new(x, self.y_at(x))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/wave.rs"]
mod tests;
