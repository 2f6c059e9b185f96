use crate::foundation::core::{Canvas, Rgba8, Rgba8Premul};
use crate::foundation::error::{StoreartError, StoreartResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::layer::Surface;

/// Premultiplied source-over of `src` onto `dst`.
pub(crate) fn over(dst: Rgba8Premul, src: Rgba8Premul) -> Rgba8Premul {
    if src.a == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src.a);
    let blend = |s: u8, d: u8| s.saturating_add(mul_div255_u8(u16::from(d), inv));
    Rgba8Premul {
        r: blend(src.r, dst.r),
        g: blend(src.g, dst.g),
        b: blend(src.b, dst.b),
        a: blend(src.a, dst.a),
    }
}

pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> StoreartResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(StoreartError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over(
            Rgba8Premul::from_array([d[0], d[1], d[2], d[3]]),
            Rgba8Premul::from_array([s[0], s[1], s[2], s[3]]),
        );
        d.copy_from_slice(&out.to_array());
    }
    Ok(())
}

/// Drop the alpha channel by compositing over an opaque background.
///
/// Per channel `out = premul + bg * (255 - a) / 255`, which equals `src*a + bg*(1-a)` for the
/// straight color.
pub(crate) fn flatten_pixel(px: Rgba8Premul, bg: Rgba8) -> [u8; 3] {
    let inv = 255u16 - u16::from(px.a);
    [
        px.r.saturating_add(mul_div255_u8(u16::from(bg.r), inv)),
        px.g.saturating_add(mul_div255_u8(u16::from(bg.g), inv)),
        px.b.saturating_add(mul_div255_u8(u16::from(bg.b), inv)),
    ]
}

pub(crate) fn flatten_onto(surface: &Surface, bg: Rgba8) -> StoreartResult<image::RgbImage> {
    let Canvas { width, height } = surface.canvas;
    if surface.data.len() != surface.canvas.pixel_count() * 4 {
        return Err(StoreartError::render(
            "surface buffer does not match its canvas",
        ));
    }
    let mut rgb = Vec::with_capacity(surface.canvas.pixel_count() * 3);
    for px in surface.data.chunks_exact(4) {
        let px = Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]);
        rgb.extend_from_slice(&flatten_pixel(px, bg));
    }
    image::RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| StoreartError::render("rgb buffer does not match image dimensions"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
