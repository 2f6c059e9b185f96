//! Per-image rendering and PNG output.

use std::path::Path;

use crate::design::palette::{BG_DARK, DOT_DIM, GRID, ICON_WHITE, LINE_DIM, TEXT_COL};
use crate::foundation::core::Canvas;
use crate::foundation::error::{StoreartError, StoreartResult};
use crate::layout::SceneLayout;
use crate::render::composite::{flatten_onto, over_in_place};
use crate::render::draw;
use crate::render::layer::Layer;
use crate::text::TextRenderer;

/// Render the full artwork for `canvas` into an opaque RGB image.
///
/// Background, grid, dots and waves share the base layer. The glow is drawn on its own layer and
/// composited over it, then icon, labels and progress bar go on top before the result is
/// flattened onto `BG_DARK`.
#[tracing::instrument(skip(text))]
pub fn render_image(canvas: Canvas, text: &mut TextRenderer) -> StoreartResult<image::RgbImage> {
    let layout = SceneLayout::compute(canvas);

    let mut base = Layer::new(canvas)?;
    draw::draw_gradient(&mut base);
    draw::draw_grid(&mut base, &layout.grid, GRID);
    for dots in &layout.dot_grids {
        draw::draw_dot_grid(&mut base, dots, DOT_DIM);
    }
    for wave in &layout.waves {
        draw::draw_wave(&mut base, wave, layout.wave_width, LINE_DIM);
    }

    let mut glow = Layer::new(canvas)?;
    draw::draw_glow(&mut glow, &layout.glow);

    let mut fg = Layer::new(canvas)?;
    draw::draw_icon(&mut fg, &layout.icon, ICON_WHITE);
    draw::draw_labels(&mut fg, &layout.labels, text, TEXT_COL)?;
    draw::draw_progress_bar(&mut fg, &layout.bar);

    let mut surface = base.rasterize()?;
    over_in_place(&mut surface.data, &glow.rasterize()?.data)?;
    over_in_place(&mut surface.data, &fg.rasterize()?.data)?;
    flatten_onto(&surface, BG_DARK)
}

/// Encode `img` as an 8-bit RGB PNG at `path`.
pub fn save_png(img: &image::RgbImage, path: &Path) -> StoreartResult<()> {
    image::save_buffer_with_format(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| StoreartError::encode(path, e.to_string()))
}

/// Render `canvas` and write it to `path`.
pub fn generate_image(canvas: Canvas, path: &Path, text: &mut TextRenderer) -> StoreartResult<()> {
    let img = render_image(canvas, text)?;
    save_png(&img, path)?;
    tracing::info!(path = %path.display(), width = canvas.width, height = canvas.height, "saved image");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
