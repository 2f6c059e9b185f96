use super::*;

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    Point::new(
        w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
        w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
    )
}

fn top() -> TwoSegmentCurve {
    TwoSegmentCurve::from_coords([
        (18.0, 30.0),
        (30.0, 18.0),
        (44.0, 42.0),
        (56.0, 30.0),
        (68.0, 18.0),
        (80.0, 34.0),
        (90.0, 26.0),
    ])
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn sample_count_shares_midpoint() {
    let pts = top().sample(BEZIER_STEPS);
    assert_eq!(pts.len(), 2 * BEZIER_STEPS + 1);
    assert!(close(pts[0], Point::new(18.0, 30.0)));
    assert!(close(pts[BEZIER_STEPS], Point::new(56.0, 30.0)));
    assert!(close(pts[2 * BEZIER_STEPS], Point::new(90.0, 26.0)));
}

#[test]
fn sampling_is_deterministic() {
    let a = top().sample(BEZIER_STEPS);
    let b = top().sample(BEZIER_STEPS);
    assert_eq!(a, b);
}

#[test]
fn kurbo_eval_matches_bernstein_blend() {
    let c = top();
    let [first, second] = c.segments();
    let p = c.points;
    for i in 0..=BEZIER_STEPS {
        let t = i as f64 / BEZIER_STEPS as f64;
        assert!(close(first.eval(t), cubic_point(p[0], p[1], p[2], p[3], t)));
        assert!(close(second.eval(t), cubic_point(p[3], p[4], p[5], p[6], t)));
    }
}

#[test]
fn bernstein_midpoint_is_known_value() {
    let m = cubic_point(
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
        0.5,
    );
    assert!(close(m, Point::new(0.5, 0.75)));
}

#[test]
fn transformed_maps_every_point() {
    let moved = top().transformed(Affine::translate((10.0, -5.0)));
    assert!(close(moved.points[0], Point::new(28.0, 25.0)));
    assert!(close(moved.points[6], Point::new(100.0, 21.0)));
}

#[test]
fn zero_steps_is_clamped() {
    assert_eq!(top().sample(0).len(), 3);
}
