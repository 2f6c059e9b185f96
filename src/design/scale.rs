//! Mapping from the 1000-unit design space to output pixels.

/// Width of the normalized design space every measurement is authored in.
pub const DESIGN_WIDTH: f64 = 1000.0;

/// Uniform design-space to pixel scale, `output_width / 1000`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale(f64);

impl Scale {
    /// Scale for an output image `width` pixels wide.
    pub fn for_width(width: u32) -> Self {
        Self(f64::from(width) / DESIGN_WIDTH)
    }

    /// Raw factor.
    pub fn factor(self) -> f64 {
        self.0
    }

    /// Scaled length as a float (`v * scale`).
    pub fn of(self, v: f64) -> f64 {
        v * self.0
    }

    /// Scaled length truncated to whole pixels.
    ///
    /// Negative products clamp to 0.
    pub fn px(self, v: f64) -> u32 {
        floor_u32(v * self.0)
    }

    /// Like [`Scale::px`] but never below `min`.
    pub fn px_min(self, v: f64, min: u32) -> u32 {
        self.px(v).max(min)
    }
}

/// Truncate a non-negative float to `u32`, clamping negatives and NaN to 0.
pub(crate) fn floor_u32(v: f64) -> u32 {
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    v.floor().min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/design/scale.rs"]
mod tests;
