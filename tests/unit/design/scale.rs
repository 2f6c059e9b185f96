use super::*;

#[test]
fn factor_is_width_over_1000() {
    assert_eq!(Scale::for_width(250).factor(), 0.25);
    assert_eq!(Scale::for_width(500).factor(), 0.5);
    assert_eq!(Scale::for_width(1000).factor(), 1.0);
    assert_eq!(Scale::for_width(1234).factor(), 1.234);
}

#[test]
fn px_truncates_towards_zero() {
    let s = Scale::for_width(250);
    assert_eq!(s.px(70.0), 17);
    assert_eq!(s.px(18.0), 4);
    assert_eq!(s.px(3.2), 0);
    assert_eq!(s.px(-10.0), 0);
}

#[test]
fn px_min_respects_floor() {
    let s = Scale::for_width(250);
    assert_eq!(s.px_min(3.0, 2), 2);
    assert_eq!(s.px_min(1.5, 1), 1);
    let s = Scale::for_width(1000);
    assert_eq!(s.px_min(3.0, 2), 3);
    assert_eq!(s.px_min(3.2, 1), 3);
}

#[test]
fn floor_u32_handles_nan() {
    assert_eq!(floor_u32(f64::NAN), 0);
    assert_eq!(floor_u32(4.99), 4);
}
