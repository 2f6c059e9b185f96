use super::*;

fn px(c: [u8; 4]) -> Rgba8Premul {
    Rgba8Premul::from_array(c)
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = px([10, 20, 30, 40]);
    assert_eq!(over(dst, px([255, 255, 255, 0])), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let src = px([255, 0, 0, 255]);
    assert_eq!(over(px([0, 0, 0, 255]), src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = px([100, 110, 120, 200]);
    assert_eq!(over(px([0, 0, 0, 0]), src), src);
}

#[test]
fn translucent_glow_over_opaque_base_stays_opaque() {
    let base = px([30, 47, 60, 255]);
    // GREEN at alpha 50, premultiplied.
    let glow = px([9, 40, 22, 50]);
    let out = over(base, glow);
    assert_eq!(out.a, 255);
    assert_eq!(out.to_array(), [33, 78, 70, 255]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    let mut odd = vec![0u8; 6];
    assert!(over_in_place(&mut odd, &[0u8; 6]).is_err());
}

#[test]
fn over_in_place_blends_every_pixel() {
    let mut dst = vec![0, 0, 0, 255, 0, 0, 0, 255];
    let src = [255, 255, 255, 255, 0, 0, 0, 0];
    over_in_place(&mut dst, &src).unwrap();
    assert_eq!(dst, vec![255, 255, 255, 255, 0, 0, 0, 255]);
}

#[test]
fn flatten_uses_background_where_transparent() {
    let bg = Rgba8::rgb(30, 47, 60);
    assert_eq!(flatten_pixel(px([0, 0, 0, 0]), bg), [30, 47, 60]);
    assert_eq!(flatten_pixel(px([200, 100, 50, 255]), bg), [200, 100, 50]);
    // Half-covered white over black.
    assert_eq!(
        flatten_pixel(px([128, 128, 128, 128]), Rgba8::rgb(0, 0, 0)),
        [128, 128, 128]
    );
}

#[test]
fn flatten_onto_checks_surface_size() {
    let canvas = Canvas::new(2, 1).unwrap();
    let bad = Surface {
        canvas,
        data: vec![0; 4],
    };
    assert!(matches!(
        flatten_onto(&bad, Rgba8::rgb(0, 0, 0)),
        Err(StoreartError::Render(_))
    ));

    let ok = Surface {
        canvas,
        data: vec![0, 0, 0, 0, 10, 20, 30, 255],
    };
    let img = flatten_onto(&ok, Rgba8::rgb(1, 2, 3)).unwrap();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3]);
    assert_eq!(img.get_pixel(1, 0).0, [10, 20, 30]);
}
