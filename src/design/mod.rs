//! Design-space constants: the 1000-wide scale factor and the fixed palette.

pub mod palette;
pub mod scale;
