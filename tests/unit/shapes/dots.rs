use super::*;

#[test]
fn grid_is_row_major() {
    let g = DotGrid {
        origin: Point::new(13.0, 11.0),
        rows: 3,
        cols: 3,
        spacing: 4.0,
        radius: 2.0,
    };
    let pts: Vec<Point> = g.centers().collect();
    assert_eq!(pts.len(), 9);
    assert_eq!(pts[0], Point::new(13.0, 11.0));
    assert_eq!(pts[1], Point::new(17.0, 11.0));
    assert_eq!(pts[3], Point::new(13.0, 15.0));
    assert_eq!(pts[8], Point::new(21.0, 19.0));
}

#[test]
fn zero_rows_yield_nothing() {
    let g = DotGrid {
        origin: Point::ZERO,
        rows: 0,
        cols: 5,
        spacing: 1.0,
        radius: 1.0,
    };
    assert_eq!(g.centers().count(), 0);
}
