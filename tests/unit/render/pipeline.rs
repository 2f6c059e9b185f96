use super::*;
use crate::layout::gradient_row_color;

fn small() -> Canvas {
    Canvas::new(250, 175).unwrap()
}

#[test]
fn output_matches_canvas_dimensions() {
    let img = render_image(small(), &mut TextRenderer::builtin()).unwrap();
    assert_eq!(img.dimensions(), (250, 175));
}

#[test]
fn untouched_pixels_show_the_gradient() {
    let img = render_image(small(), &mut TextRenderer::builtin()).unwrap();
    // Between grid lines (spacing 17) and away from dots, waves and the glow.
    for (x, y) in [(5, 5), (5, 168), (245, 40)] {
        let c = gradient_row_color(y, 175);
        assert_eq!(img.get_pixel(x, y).0, [c.r, c.g, c.b], "pixel ({x},{y})");
    }
}

#[test]
fn grid_lines_start_at_the_origin() {
    let img = render_image(small(), &mut TextRenderer::builtin()).unwrap();
    assert_eq!(img.get_pixel(0, 5).0, [35, 55, 68]);
    assert_eq!(img.get_pixel(5, 17).0, [35, 55, 68]);
}

#[test]
fn rendering_is_deterministic() {
    let a = render_image(small(), &mut TextRenderer::builtin()).unwrap();
    let b = render_image(small(), &mut TextRenderer::builtin()).unwrap();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn save_png_reports_the_failing_path() {
    let img = image::RgbImage::new(2, 2);
    let path = Path::new("target/no/such/dir/out.png");
    match save_png(&img, path) {
        Err(StoreartError::Encode { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected encode error, got {other:?}"),
    }
}
