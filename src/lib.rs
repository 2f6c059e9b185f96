//! storeart renders the app store listing artwork for an air quality monitor.
//!
//! Each image is drawn from a fixed 1000-unit design space scaled to the target width: a dark
//! gradient with a grid, dot clusters and sine waves, a green glow under a three-stroke airflow
//! icon, four sensor readings and a progress bar. The public API is small:
//!
//! - [`render_image`] rasterizes one canvas into an RGB image
//! - [`generate_all`] renders every target of a [`RenderConfig`] to PNG files
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod config;
pub mod design;
pub mod layout;
/// Rasterization and PNG output.
pub mod render;
pub mod session;
pub mod shapes;
/// Label fonts, shaping and drawing.
pub mod text;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{StoreartError, StoreartResult};

pub use crate::config::{OutputTarget, RenderConfig, default_targets};
pub use crate::design::scale::Scale;
pub use crate::layout::SceneLayout;
pub use crate::render::pipeline::{generate_image, render_image, save_png};
pub use crate::session::{GeneratedImage, SessionOpts, generate_all, generate_all_with};
pub use crate::text::TextRenderer;
pub use crate::text::font::{FontPreference, OutlineFont, ResolvedFont, resolve_font};
