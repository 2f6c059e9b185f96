//! Built-in bitmap font used when no outline font can be loaded.
//!
//! Glyphs live on a cell grid: rows 0..=6 hold capitals and digits, lowercase x-height starts at
//! row 2 and descenders reach row 8. Glyphs are proportional and separated by one empty column.

/// Cells per em; one cell is `size_px / CELLS_PER_EM` pixels.
pub const CELLS_PER_EM: f64 = 12.0;

/// Empty columns between neighbouring glyphs.
pub const GLYPH_GAP: u32 = 1;

/// Rows from the top of the line to the lowest descender.
pub const LINE_ROWS: u32 = 9;

/// One bitmap glyph. `rows` are drawn starting at cell row `top`; `#` marks ink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// First cell row occupied by the glyph.
    pub top: u8,
    /// Ink rows, all of equal width.
    pub rows: &'static [&'static str],
}

impl Glyph {
    const fn new(top: u8, rows: &'static [&'static str]) -> Self {
        Self { top, rows }
    }

    /// Advance width in cells.
    pub fn width(&self) -> u32 {
        self.rows.first().map_or(0, |r| r.len() as u32)
    }
}

/// Horizontal run of ink cells, in cell units relative to the text's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRun {
    /// First column.
    pub col: u32,
    /// Row.
    pub row: u32,
    /// Number of consecutive ink cells.
    pub len: u32,
}

const MISSING: Glyph = Glyph::new(
    0,
    &["####", "#..#", "#..#", "#..#", "#..#", "#..#", "####"],
);

/// Glyph for `c`, or a hollow box when the table has no entry.
pub fn glyph(c: char) -> Glyph {
    match c {
        ' ' => Glyph::new(0, &[".."]),
        '0' => Glyph::new(0, &[".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."]),
        '1' => Glyph::new(0, &["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."]),
        '2' => Glyph::new(0, &[".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"]),
        '3' => Glyph::new(0, &["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."]),
        '4' => Glyph::new(0, &["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."]),
        '5' => Glyph::new(0, &["#####", "#....", "####.", "....#", "....#", "#...#", ".###."]),
        '6' => Glyph::new(0, &["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."]),
        '7' => Glyph::new(0, &["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."]),
        '8' => Glyph::new(0, &[".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."]),
        '9' => Glyph::new(0, &[".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."]),
        'A' => Glyph::new(0, &[".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
        'B' => Glyph::new(0, &["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."]),
        'C' => Glyph::new(0, &[".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."]),
        'D' => Glyph::new(0, &["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."]),
        'E' => Glyph::new(0, &["#####", "#....", "#....", "####.", "#....", "#....", "#####"]),
        'F' => Glyph::new(0, &["#####", "#....", "#....", "####.", "#....", "#....", "#...."]),
        'G' => Glyph::new(0, &[".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"]),
        'H' => Glyph::new(0, &["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
        'I' => Glyph::new(0, &["###", ".#.", ".#.", ".#.", ".#.", ".#.", "###"]),
        'J' => Glyph::new(0, &["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."]),
        'K' => Glyph::new(0, &["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"]),
        'L' => Glyph::new(0, &["#....", "#....", "#....", "#....", "#....", "#....", "#####"]),
        'M' => Glyph::new(0, &["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"]),
        'N' => Glyph::new(0, &["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"]),
        'O' => Glyph::new(0, &[".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
        'P' => Glyph::new(0, &["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."]),
        'Q' => Glyph::new(0, &[".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"]),
        'R' => Glyph::new(0, &["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"]),
        'S' => Glyph::new(0, &[".####", "#....", "#....", ".###.", "....#", "....#", "####."]),
        'T' => Glyph::new(0, &["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."]),
        'U' => Glyph::new(0, &["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
        'V' => Glyph::new(0, &["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."]),
        'W' => Glyph::new(0, &["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."]),
        'X' => Glyph::new(0, &["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"]),
        'Y' => Glyph::new(0, &["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."]),
        'Z' => Glyph::new(0, &["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"]),
        'a' => Glyph::new(2, &[".##.", "...#", ".###", "#..#", ".###"]),
        'b' => Glyph::new(0, &["#...", "#...", "###.", "#..#", "#..#", "#..#", "###."]),
        'c' => Glyph::new(2, &[".###", "#...", "#...", "#...", ".###"]),
        'd' => Glyph::new(0, &["...#", "...#", ".###", "#..#", "#..#", "#..#", ".###"]),
        'e' => Glyph::new(2, &[".##.", "#..#", "####", "#...", ".###"]),
        'f' => Glyph::new(0, &["..#", ".#.", "###", ".#.", ".#.", ".#.", ".#."]),
        'g' => Glyph::new(2, &[".###", "#..#", "#..#", ".###", "...#", "...#", ".##."]),
        'h' => Glyph::new(0, &["#...", "#...", "###.", "#..#", "#..#", "#..#", "#..#"]),
        'i' => Glyph::new(0, &["#", ".", "#", "#", "#", "#", "#"]),
        'j' => Glyph::new(0, &["..#", "...", "..#", "..#", "..#", "..#", "..#", "#.#", ".#."]),
        'k' => Glyph::new(0, &["#...", "#...", "#..#", "#.#.", "##..", "#.#.", "#..#"]),
        'l' => Glyph::new(0, &["#.", "#.", "#.", "#.", "#.", "#.", ".#"]),
        'm' => Glyph::new(2, &["##.#.", "#.#.#", "#.#.#", "#.#.#", "#.#.#"]),
        'n' => Glyph::new(2, &["###.", "#..#", "#..#", "#..#", "#..#"]),
        'o' => Glyph::new(2, &[".##.", "#..#", "#..#", "#..#", ".##."]),
        'p' => Glyph::new(2, &["###.", "#..#", "#..#", "###.", "#...", "#...", "#..."]),
        'q' => Glyph::new(2, &[".###", "#..#", "#..#", ".###", "...#", "...#", "...#"]),
        'r' => Glyph::new(2, &["#.##", "##..", "#...", "#...", "#..."]),
        's' => Glyph::new(2, &[".###", "#...", ".##.", "...#", "###."]),
        't' => Glyph::new(0, &[".#.", ".#.", "###", ".#.", ".#.", ".#.", "..#"]),
        'u' => Glyph::new(2, &["#..#", "#..#", "#..#", "#..#", ".###"]),
        'v' => Glyph::new(2, &["#...#", "#...#", "#...#", ".#.#.", "..#.."]),
        'w' => Glyph::new(2, &["#...#", "#...#", "#.#.#", "#.#.#", ".#.#."]),
        'x' => Glyph::new(2, &["#...#", ".#.#.", "..#..", ".#.#.", "#...#"]),
        'y' => Glyph::new(2, &["#..#", "#..#", "#..#", ".###", "...#", "...#", ".##."]),
        'z' => Glyph::new(2, &["####", "...#", ".##.", "#...", "####"]),
        '.' => Glyph::new(6, &["#"]),
        ',' => Glyph::new(5, &[".#", ".#", "#."]),
        ':' => Glyph::new(2, &["#", ".", ".", "#"]),
        '-' => Glyph::new(3, &["###"]),
        '+' => Glyph::new(1, &["..#..", "..#..", "#####", "..#..", "..#.."]),
        '/' => Glyph::new(0, &["....#", "....#", "...#.", "..#..", ".#...", "#....", "#...."]),
        '%' => Glyph::new(0, &["##..#", "##..#", "...#.", "..#..", ".#...", "#..##", "#..##"]),
        '°' => Glyph::new(0, &[".#.", "#.#", ".#."]),
        '₂' => Glyph::new(4, &["##.", "..#", ".#.", "#..", "###"]),
        _ => MISSING,
    }
}

/// Pixel size of one cell at `size_px`.
pub fn cell_size(size_px: f64) -> f64 {
    size_px / CELLS_PER_EM
}

/// Total advance of `text` in cells, without a trailing gap.
pub fn advance_cells(text: &str) -> u32 {
    let mut total = 0u32;
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            total += GLYPH_GAP;
        }
        total += glyph(c).width();
    }
    total
}

/// Advance width of `text` in pixels at `size_px`.
pub fn measure(text: &str, size_px: f64) -> f64 {
    f64::from(advance_cells(text)) * cell_size(size_px)
}

/// Height of one line in pixels at `size_px`.
pub fn line_height(size_px: f64) -> f64 {
    f64::from(LINE_ROWS) * cell_size(size_px)
}

/// Ink of `text` as horizontal cell runs.
pub fn cell_runs(text: &str) -> Vec<CellRun> {
    let mut runs = Vec::new();
    let mut pen = 0u32;
    for c in text.chars() {
        let g = glyph(c);
        for (dy, row) in g.rows.iter().enumerate() {
            let row_idx = u32::from(g.top) + dy as u32;
            let mut start: Option<u32> = None;
            for (dx, b) in row.bytes().chain(std::iter::once(b'.')).enumerate() {
                let dx = dx as u32;
                match (b == b'#', start) {
                    (true, None) => start = Some(dx),
                    (false, Some(s)) => {
                        runs.push(CellRun {
                            col: pen + s,
                            row: row_idx,
                            len: dx - s,
                        });
                        start = None;
                    }
                    _ => {}
                }
            }
        }
        pen += g.width() + GLYPH_GAP;
    }
    runs
}

#[cfg(test)]
#[path = "../../tests/unit/text/bitmap.rs"]
mod tests;
