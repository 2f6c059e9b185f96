use super::*;

const SAMPLE: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz .,:-+/%°₂";

#[test]
fn glyph_rows_are_rectangular_and_fit_the_line() {
    for c in SAMPLE.chars() {
        let g = glyph(c);
        let w = g.width();
        assert!(w > 0, "{c:?} has no width");
        assert!(g.rows.iter().all(|r| r.len() as u32 == w), "{c:?} is ragged");
        assert!(
            u32::from(g.top) + g.rows.len() as u32 <= LINE_ROWS,
            "{c:?} overflows the line"
        );
        assert!(g.rows.iter().all(|r| r.bytes().all(|b| b == b'#' || b == b'.')));
    }
}

#[test]
fn reading_characters_are_all_covered() {
    for c in "22.4°C 58.2% CO₂  412 ppm VOC  Index 98".chars() {
        assert_ne!(glyph(c), MISSING, "{c:?} falls back to the missing box");
    }
    assert_eq!(glyph('€'), MISSING);
}

#[test]
fn advance_counts_gaps_between_glyphs_only() {
    assert_eq!(advance_cells(""), 0);
    assert_eq!(advance_cells("1"), 5);
    assert_eq!(advance_cells("11"), 11);
    assert_eq!(advance_cells("I."), 5);
}

#[test]
fn widest_reading_fits_a_small_section() {
    // 250 px wide output: sections are 62.5 px and the font is 10 px.
    let w = measure("VOC  Index 98", 10.0);
    assert!(w < 62.5, "{w}");
    assert!(w > 40.0);
}

#[test]
fn measure_scales_linearly_with_size() {
    let a = measure("58.2%", 12.0);
    let b = measure("58.2%", 24.0);
    assert!((b - 2.0 * a).abs() < 1e-9);
    assert_eq!(line_height(12.0), 9.0);
}

#[test]
fn cell_runs_merge_horizontal_ink() {
    let runs = cell_runs("-");
    assert_eq!(runs, vec![CellRun { col: 0, row: 3, len: 3 }]);

    let runs = cell_runs(" -");
    assert_eq!(runs, vec![CellRun { col: 3, row: 3, len: 3 }]);
}

#[test]
fn cell_runs_stay_inside_advance() {
    let text = "CO₂  412 ppm";
    let adv = advance_cells(text);
    for r in cell_runs(text) {
        assert!(r.col + r.len <= adv);
        assert!(r.row < LINE_ROWS);
    }
}
