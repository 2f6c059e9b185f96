//! Pure geometry generators for the decorative and icon shapes.
//!
//! Everything here produces points in pixel space; nothing touches a raster.

pub mod bezier;
pub mod dots;
pub mod icon;
pub mod wave;
