//! Pure placement math for one output image.
//!
//! [`SceneLayout::compute`] resolves every scaled position, size and stroke width for a canvas
//! before anything is rasterized. Integer measurements truncate the scaled design value and then
//! apply their minimum, so the three output sizes stay proportionally identical.

use crate::design::palette::{BG_DARK, BG_MID};
use crate::design::scale::{Scale, floor_u32};
use crate::foundation::core::{Canvas, Point, Rect, Rgba8, Vec2};
use crate::shapes::dots::DotGrid;
use crate::shapes::wave::Wave;

/// The simulated sensor readings shown along the bottom, left to right.
pub const SENSOR_READINGS: [&str; 4] = ["22.4°C", "58.2%", "CO₂  412 ppm", "VOC  Index 98"];

/// How far down the gradient drifts from `BG_DARK` towards `BG_MID`.
pub const GRADIENT_STRENGTH: f64 = 0.15;

/// Vertical offsets (design units) of the five background waves.
pub const WAVE_OFFSETS: [f64; 5] = [-40.0, -15.0, 12.0, 38.0, 62.0];

/// Number of concentric glow ellipses.
pub const GLOW_RINGS: u32 = 20;

/// Alpha ceiling for any glow ellipse.
pub const GLOW_MAX_ALPHA: u32 = 50;

/// Share of the progress track covered by the green fill, in percent.
pub const PROGRESS_PERCENT: u32 = 60;

/// Background grid line placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLines {
    /// Distance between lines; `0` disables the grid.
    pub spacing: u32,
    /// Canvas the lines span.
    pub canvas: Canvas,
}

impl GridLines {
    /// X positions of the vertical lines.
    pub fn columns(&self) -> Vec<u32> {
        Self::stops(self.spacing, self.canvas.width)
    }

    /// Y positions of the horizontal lines.
    pub fn rows(&self) -> Vec<u32> {
        Self::stops(self.spacing, self.canvas.height)
    }

    fn stops(spacing: u32, extent: u32) -> Vec<u32> {
        if spacing == 0 {
            return Vec::new();
        }
        (0..extent).step_by(spacing as usize).collect()
    }
}

/// One glow ellipse, with half-extents and its own alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowEllipse {
    /// Horizontal and vertical half-extents.
    pub radii: Vec2,
    /// Straight alpha of the fill.
    pub alpha: u8,
}

/// A region of constant glow alpha: `outer` minus `inner`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowBand {
    /// Outer ellipse half-extents.
    pub outer: Vec2,
    /// Hole cut out of the band; `None` for the innermost solid ellipse.
    pub inner: Option<Vec2>,
    /// Straight alpha of the band.
    pub alpha: u8,
}

/// Soft radial glow below the icon.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowLayout {
    /// Shared center of all ellipses.
    pub center: Point,
    /// Base horizontal radius.
    pub rx: u32,
    /// Base vertical radius.
    pub ry: u32,
    /// Ellipses ordered from outermost to innermost.
    pub ellipses: Vec<GlowEllipse>,
}

impl GlowLayout {
    /// Non-overlapping constant-alpha bands, outermost first.
    ///
    /// Each smaller ellipse replaces the larger one underneath it, so a pixel takes the alpha of
    /// the innermost ellipse that contains it. Consecutive equal alphas merge into one band and
    /// fully transparent bands are dropped.
    pub fn bands(&self) -> Vec<GlowBand> {
        let mut out = Vec::new();
        let mut i = 0;
        while i < self.ellipses.len() {
            let alpha = self.ellipses[i].alpha;
            let mut j = i + 1;
            while j < self.ellipses.len() && self.ellipses[j].alpha == alpha {
                j += 1;
            }
            if alpha > 0 {
                out.push(GlowBand {
                    outer: self.ellipses[i].radii,
                    inner: self.ellipses.get(j).map(|e| e.radii),
                    alpha,
                });
            }
            i = j;
        }
        out
    }
}

/// Icon placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconLayout {
    /// Pixel the icon's design anchor lands on.
    pub center: Point,
    /// Edge length of the 100-unit design grid in pixels.
    pub size: f64,
    /// Stroke widths of the top, middle and bottom curves.
    pub widths: [u32; 3],
}

/// Placement of the sensor reading labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    /// Top edge of every label.
    pub top: u32,
    /// Font size in pixels.
    pub font_size: u32,
    /// Width of the horizontal section each label is centered in.
    pub section_width: f64,
    /// Canvas width, used to keep labels on-canvas.
    pub canvas_width: u32,
}

impl LabelLayout {
    /// Center x of section `i`, truncated to a whole pixel.
    pub fn section_center(&self, i: usize) -> f64 {
        (self.section_width * i as f64 + self.section_width / 2.0).trunc()
    }

    /// Left edge for a label of measured `text_width` in section `i`.
    ///
    /// Labels wider than their section are nudged back inside the canvas when they fit.
    pub fn left_for(&self, i: usize, text_width: f64) -> f64 {
        let left = self.section_center(i) - (text_width / 2.0).floor();
        let max_left = f64::from(self.canvas_width) - text_width;
        if max_left >= 0.0 {
            left.clamp(0.0, max_left)
        } else {
            left
        }
    }
}

/// Rounded progress bar: a track and a partial green fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressBar {
    /// Track left edge.
    pub x: u32,
    /// Track top edge.
    pub y: u32,
    /// Track width.
    pub width: u32,
    /// Track height.
    pub height: u32,
    /// Corner radius for both shapes.
    pub radius: u32,
    /// Fill width, always `<= width`.
    pub fill_width: u32,
}

impl ProgressBar {
    /// Full track rectangle.
    pub fn track_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x + self.width),
            f64::from(self.y + self.height),
        )
    }

    /// Green fill rectangle, anchored at the track's left edge.
    pub fn fill_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x + self.fill_width),
            f64::from(self.y + self.height),
        )
    }
}

/// Every placement decision for one canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLayout {
    /// Target canvas.
    pub canvas: Canvas,
    /// Design-space scale.
    pub scale: Scale,
    /// Background grid.
    pub grid: GridLines,
    /// Top-left and top-right dot clusters.
    pub dot_grids: [DotGrid; 2],
    /// Background waves in drawing order.
    pub waves: [Wave; 5],
    /// Stroke width shared by the waves.
    pub wave_width: u32,
    /// Glow under the icon.
    pub glow: GlowLayout,
    /// Icon placement.
    pub icon: IconLayout,
    /// Sensor reading labels.
    pub labels: LabelLayout,
    /// Progress bar.
    pub bar: ProgressBar,
}

impl SceneLayout {
    /// Compute the layout for `canvas`.
    pub fn compute(canvas: Canvas) -> Self {
        let scale = Scale::for_width(canvas.width);
        let w = canvas.width_f64();
        let h = canvas.height_f64();

        let grid = GridLines {
            spacing: scale.px(70.0),
            canvas,
        };

        let dot_radius = scale.px_min(3.0, 2);
        let dot_spacing = scale.px(18.0);
        let dot_top = scale.px(45.0);
        let dot_at = |x: u32| DotGrid {
            origin: Point::new(f64::from(x), f64::from(dot_top)),
            rows: 3,
            cols: 3,
            spacing: f64::from(dot_spacing),
            radius: f64::from(dot_radius),
        };
        let dot_grids = [
            dot_at(scale.px(55.0)),
            dot_at(canvas.width.saturating_sub(scale.px(100.0))),
        ];

        let wave_base = h * 0.52;
        let waves = std::array::from_fn(|i| {
            let fi = i as f64;
            Wave {
                y_base: wave_base + scale.of(WAVE_OFFSETS[i]),
                amplitude: scale.of(12.0) + fi * scale.of(2.0),
                wavelength: scale.of(350.0) + fi * scale.of(50.0),
                x_start: scale.of(30.0),
                x_end: w - scale.of(30.0),
            }
        });

        let glow = GlowLayout {
            center: Point::new(
                f64::from(canvas.width / 2),
                f64::from(floor_u32(h * 0.46 + scale.of(45.0))),
            ),
            rx: scale.px(90.0),
            ry: scale.px(30.0),
            ellipses: Vec::new(),
        };
        let ellipses = (1..=GLOW_RINGS)
            .rev()
            .map(|r| GlowEllipse {
                radii: Vec2::new(
                    f64::from(glow.rx) + f64::from(r) * 3.0 * scale.factor(),
                    f64::from(glow.ry) + f64::from(r) * scale.factor(),
                ),
                alpha: (8 * (GLOW_RINGS - r)).min(GLOW_MAX_ALPHA) as u8,
            })
            .collect();
        let glow = GlowLayout { ellipses, ..glow };

        let icon = IconLayout {
            center: Point::new(f64::from(canvas.width / 2), f64::from(floor_u32(h * 0.40))),
            size: scale.of(160.0),
            widths: [
                scale.px_min(5.0, 2),
                scale.px_min(4.0, 2),
                scale.px_min(3.2, 1),
            ],
        };

        let labels = LabelLayout {
            top: floor_u32(h * 0.76),
            font_size: scale.px_min(16.0, 10),
            section_width: w / SENSOR_READINGS.len() as f64,
            canvas_width: canvas.width,
        };

        let bar_width = scale.px(250.0);
        let bar_height = scale.px_min(4.0, 2);
        let bar = ProgressBar {
            x: canvas.width.saturating_sub(bar_width) / 2,
            y: floor_u32(h * 0.84),
            width: bar_width,
            height: bar_height,
            radius: bar_height / 2,
            fill_width: bar_width * PROGRESS_PERCENT / 100,
        };

        Self {
            canvas,
            scale,
            grid,
            dot_grids,
            waves,
            wave_width: scale.px_min(1.5, 1),
            glow,
            icon,
            labels,
            bar,
        }
    }
}

/// Background color of pixel row `y`.
///
/// Each channel is `dark * (1 - 0.15t) + mid * 0.15t` with `t = y / height`, truncated.
pub fn gradient_row_color(y: u32, height: u32) -> Rgba8 {
    let t = if height == 0 {
        0.0
    } else {
        f64::from(y) / f64::from(height)
    };
    let k = t * GRADIENT_STRENGTH;
    let mix = |dark: u8, mid: u8| -> u8 {
        let v = f64::from(dark) * (1.0 - k) + f64::from(mid) * k;
        v.clamp(0.0, 255.0) as u8
    };
    Rgba8::rgb(
        mix(BG_DARK.r, BG_MID.r),
        mix(BG_DARK.g, BG_MID.g),
        mix(BG_DARK.b, BG_MID.b),
    )
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
