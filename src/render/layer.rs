use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{StoreartError, StoreartResult};
use kurbo::Shape;

const PATH_TOLERANCE: f64 = 0.1;

/// Rasterized layer contents: premultiplied RGBA8, row-major, `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Surface {
    pub(crate) canvas: Canvas,
    pub(crate) data: Vec<u8>,
}

/// One transparent drawing layer backed by a `vello_cpu` render context.
pub(crate) struct Layer {
    ctx: vello_cpu::RenderContext,
    canvas: Canvas,
    width: u16,
    height: u16,
}

impl Layer {
    pub(crate) fn new(canvas: Canvas) -> StoreartResult<Self> {
        let width = u16::try_from(canvas.width)
            .map_err(|_| StoreartError::render("layer width exceeds u16"))?;
        let height = u16::try_from(canvas.height)
            .map_err(|_| StoreartError::render("layer height exceeds u16"))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            canvas,
            width,
            height,
        })
    }

    pub(crate) fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub(crate) fn ctx_mut(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu());
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }

    pub(crate) fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu());
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    pub(crate) fn fill_shape(&mut self, shape: &impl Shape, color: Rgba8) {
        self.fill_path(&shape.to_path(PATH_TOLERANCE), color);
    }

    /// Fill the ring between two concentric axis-aligned ellipses.
    ///
    /// The inner ellipse is wound in reverse, so the non-zero rule leaves it empty.
    pub(crate) fn fill_ring(&mut self, center: Point, outer: Vec2, inner: Option<Vec2>, color: Rgba8) {
        let mut path = kurbo::Ellipse::new(center, outer, 0.0).to_path(PATH_TOLERANCE);
        if let Some(inner) = inner {
            let hole = kurbo::Ellipse::new(center, inner, 0.0)
                .to_path(PATH_TOLERANCE)
                .reverse_subpaths();
            path.extend(hole);
        }
        self.fill_path(&path, color);
    }

    /// Stroke `points` as one connected polyline with round joins and caps.
    pub(crate) fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgba8) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() || width <= 0.0 {
            return;
        }
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(vello_cpu::kurbo::Point::new(first.x, first.y));
        for p in rest {
            path.line_to(vello_cpu::kurbo::Point::new(p.x, p.y));
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu());
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width)
                .with_join(vello_cpu::kurbo::Join::Round)
                .with_caps(vello_cpu::kurbo::Cap::Round),
        );
        self.ctx.stroke_path(&path);
    }

    /// Flush pending draws and read the layer back as premultiplied bytes.
    pub(crate) fn rasterize(mut self) -> StoreartResult<Surface> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        if data.len() != self.canvas.pixel_count() * 4 {
            return Err(StoreartError::render(format!(
                "pixmap holds {} bytes, expected {}",
                data.len(),
                self.canvas.pixel_count() * 4
            )));
        }
        Ok(Surface {
            canvas: self.canvas,
            data,
        })
    }
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/layer.rs"]
mod tests;
