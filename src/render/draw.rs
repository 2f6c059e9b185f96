//! Scene elements drawn onto a [`Layer`].

use crate::design::palette::{GREEN, TRACK};
use crate::foundation::core::{Rect, Rgba8};
use crate::foundation::error::StoreartResult;
use crate::layout::{
    GlowLayout, GridLines, IconLayout, LabelLayout, ProgressBar, SENSOR_READINGS,
    gradient_row_color,
};
use crate::render::layer::Layer;
use crate::shapes::bezier::{BEZIER_STEPS, TwoSegmentCurve};
use crate::shapes::dots::DotGrid;
use crate::shapes::icon::placed_curves;
use crate::shapes::wave::Wave;
use crate::text::TextRenderer;

/// One full-width, 1 px row per scanline.
pub(crate) fn draw_gradient(layer: &mut Layer) {
    let canvas = layer.canvas();
    let w = canvas.width_f64();
    for y in 0..canvas.height {
        let y0 = f64::from(y);
        layer.fill_rect(
            Rect::new(0.0, y0, w, y0 + 1.0),
            gradient_row_color(y, canvas.height),
        );
    }
}

pub(crate) fn draw_grid(layer: &mut Layer, grid: &GridLines, color: Rgba8) {
    let w = grid.canvas.width_f64();
    let h = grid.canvas.height_f64();
    for x in grid.columns() {
        let x0 = f64::from(x);
        layer.fill_rect(Rect::new(x0, 0.0, x0 + 1.0, h), color);
    }
    for y in grid.rows() {
        let y0 = f64::from(y);
        layer.fill_rect(Rect::new(0.0, y0, w, y0 + 1.0), color);
    }
}

pub(crate) fn draw_dot_grid(layer: &mut Layer, dots: &DotGrid, color: Rgba8) {
    for c in dots.centers() {
        layer.fill_shape(&kurbo::Circle::new(c, dots.radius), color);
    }
}

/// Nothing is drawn when the span yields fewer than two samples.
pub(crate) fn draw_wave(layer: &mut Layer, wave: &Wave, width: u32, color: Rgba8) {
    let points = wave.points();
    if points.len() < 2 {
        return;
    }
    layer.stroke_polyline(&points, f64::from(width), color);
}

/// Stroke both cubic segments of `curve` as a single sampled polyline.
pub(crate) fn draw_breeze_curve(
    layer: &mut Layer,
    curve: &TwoSegmentCurve,
    width: u32,
    color: Rgba8,
) {
    layer.stroke_polyline(&curve.sample(BEZIER_STEPS), f64::from(width), color);
}

pub(crate) fn draw_icon(layer: &mut Layer, icon: &IconLayout, color: Rgba8) {
    for (curve, width) in placed_curves(icon.center, icon.size)
        .iter()
        .zip(icon.widths)
    {
        draw_breeze_curve(layer, curve, width, color);
    }
}

/// Glow rings in `GREEN`; each band carries the alpha of the innermost ellipse covering it.
pub(crate) fn draw_glow(layer: &mut Layer, glow: &GlowLayout) {
    for band in glow.bands() {
        layer.fill_ring(
            glow.center,
            band.outer,
            band.inner,
            GREEN.with_alpha(band.alpha),
        );
    }
}

pub(crate) fn draw_labels(
    layer: &mut Layer,
    labels: &LabelLayout,
    text: &mut TextRenderer,
    color: Rgba8,
) -> StoreartResult<()> {
    let size = f64::from(labels.font_size);
    let top = f64::from(labels.top);
    for (i, reading) in SENSOR_READINGS.iter().enumerate() {
        let tw = text.measure(reading, size)?;
        let left = labels.left_for(i, tw);
        text.draw(layer, reading, size, kurbo::Point::new(left, top), color)?;
    }
    Ok(())
}

pub(crate) fn draw_progress_bar(layer: &mut Layer, bar: &ProgressBar) {
    let radius = f64::from(bar.radius);
    if bar.width > 0 {
        layer.fill_shape(
            &kurbo::RoundedRect::from_rect(bar.track_rect(), radius),
            TRACK,
        );
    }
    if bar.fill_width > 0 {
        layer.fill_shape(
            &kurbo::RoundedRect::from_rect(bar.fill_rect(), radius),
            GREEN,
        );
    }
}
