pub mod bitmap;
pub mod font;
pub(crate) mod shaping;

use crate::foundation::core::{Affine, Point, Rect, Rgba8};
use crate::foundation::error::StoreartResult;
use crate::render::layer::Layer;
use font::ResolvedFont;
use shaping::{TextBrush, TextLayoutEngine};

enum Face {
    Outline {
        engine: Box<TextLayoutEngine>,
        blob: vello_cpu::peniko::Blob<u8>,
    },
    Bitmap,
}

/// Measures and draws single-line labels with a resolved font.
///
/// Holds Parley contexts, so one renderer is created per image and not shared across threads.
pub struct TextRenderer {
    face: Face,
}

impl TextRenderer {
    /// Renderer for `font`.
    ///
    /// An outline font that Parley refuses to register degrades to the built-in font.
    pub fn new(font: &ResolvedFont) -> Self {
        let face = match font {
            ResolvedFont::Builtin => Face::Bitmap,
            ResolvedFont::Outline(f) => match TextLayoutEngine::with_font(f.bytes()) {
                Ok(engine) => Face::Outline {
                    engine: Box::new(engine),
                    blob: vello_cpu::peniko::Blob::from(f.bytes().to_vec()),
                },
                Err(e) => {
                    tracing::warn!(error = %e, font = %f.origin(), "font rejected by shaper, using built-in font");
                    Face::Bitmap
                }
            },
        };
        Self { face }
    }

    /// Renderer backed by the built-in bitmap font.
    pub fn builtin() -> Self {
        Self::new(&ResolvedFont::Builtin)
    }

    /// `true` when drawing with the built-in bitmap font.
    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Bitmap)
    }

    /// Family used for shaping, if an outline font is active.
    pub fn family(&self) -> Option<&str> {
        match &self.face {
            Face::Outline { engine, .. } => Some(engine.family()),
            Face::Bitmap => None,
        }
    }

    /// Advance width of `text` at `size_px`.
    pub fn measure(&mut self, text: &str, size_px: f64) -> StoreartResult<f64> {
        match &mut self.face {
            Face::Bitmap => Ok(bitmap::measure(text, size_px)),
            Face::Outline { engine, .. } => {
                let layout = engine.layout_plain(text, size_px as f32, TextBrush::default())?;
                Ok(f64::from(layout.width()))
            }
        }
    }

    /// Draw `text` with its top-left corner at `origin`.
    pub(crate) fn draw(
        &mut self,
        layer: &mut Layer,
        text: &str,
        size_px: f64,
        origin: Point,
        color: Rgba8,
    ) -> StoreartResult<()> {
        match &mut self.face {
            Face::Bitmap => {
                let cell = bitmap::cell_size(size_px);
                for run in bitmap::cell_runs(text) {
                    let x0 = origin.x + f64::from(run.col) * cell;
                    let y0 = origin.y + f64::from(run.row) * cell;
                    layer.fill_rect(
                        Rect::new(x0, y0, x0 + f64::from(run.len) * cell, y0 + cell),
                        color,
                    );
                }
                Ok(())
            }
            Face::Outline { engine, blob } => {
                let brush = TextBrush {
                    r: color.r,
                    g: color.g,
                    b: color.b,
                    a: color.a,
                };
                let layout = engine.layout_plain(text, size_px as f32, brush)?;
                let ctx = layer.ctx_mut();
                ctx.set_transform(crate::render::layer::affine_to_cpu(Affine::translate(
                    origin.to_vec2(),
                )));
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let brush = run.style().brush;
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            brush.r, brush.g, brush.b, brush.a,
                        ));
                        let font =
                            vello_cpu::peniko::FontData::new(blob.clone(), run.run().font().index);
                        let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(&font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/renderer.rs"]
mod tests;
