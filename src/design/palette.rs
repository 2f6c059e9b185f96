//! The fixed color palette.

use crate::foundation::core::Rgba8;

/// Dark teal background, top of the gradient and the flatten color.
pub const BG_DARK: Rgba8 = Rgba8::rgb(30, 47, 60);
/// Slightly lighter teal the gradient drifts towards.
pub const BG_MID: Rgba8 = Rgba8::rgb(36, 58, 74);
/// Brand green (#2ECC71).
pub const GREEN: Rgba8 = Rgba8::rgb(46, 204, 113);
/// Light grey-white used for the icon strokes.
pub const ICON_WHITE: Rgba8 = Rgba8::rgb(220, 225, 230);
/// Dim decorative wave lines.
pub const LINE_DIM: Rgba8 = Rgba8::rgb(50, 75, 90);
/// Dim corner dots.
pub const DOT_DIM: Rgba8 = Rgba8::rgb(55, 80, 95);
/// Muted light blue for the sensor readings.
pub const TEXT_COL: Rgba8 = Rgba8::rgb(160, 185, 200);
/// Background grid lines.
pub const GRID: Rgba8 = Rgba8::rgb(35, 55, 68);
/// Progress bar track.
pub const TRACK: Rgba8 = Rgba8::rgb(40, 60, 75);
