//! Producing every configured image in one run.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::config::{OutputTarget, RenderConfig};
use crate::foundation::error::{StoreartError, StoreartResult};
use crate::render::pipeline::generate_image;
use crate::text::TextRenderer;
use crate::text::font::resolve_font;

/// Options for [`generate_all_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionOpts {
    /// Render targets concurrently on a rayon pool.
    pub parallel: bool,
    /// Worker count for the pool; rayon's default when `None`.
    pub threads: Option<usize>,
}

/// A PNG written by the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Target name.
    pub name: String,
    /// Written file.
    pub path: PathBuf,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

/// Render every target in `config` sequentially.
pub fn generate_all(config: &RenderConfig) -> StoreartResult<Vec<GeneratedImage>> {
    generate_all_with(config, SessionOpts::default(), |_| {})
}

/// Render every target in `config`, calling `on_saved` after each file is written.
///
/// The returned list is in target order regardless of `opts.parallel`. The first failure aborts
/// the run; files already written are left in place.
pub fn generate_all_with(
    config: &RenderConfig,
    opts: SessionOpts,
    on_saved: impl Fn(&GeneratedImage) + Sync,
) -> StoreartResult<Vec<GeneratedImage>> {
    config.validate()?;
    if opts.threads == Some(0) {
        return Err(StoreartError::validation("'threads' must be >= 1 when set"));
    }
    std::fs::create_dir_all(&config.out_dir).map_err(|e| {
        StoreartError::encode(&config.out_dir, format!("create output directory: {e}"))
    })?;

    let font = resolve_font(&config.font);
    tracing::debug!(font = %font.describe(), "resolved label font");

    let render_one = |text: &mut TextRenderer, target: &OutputTarget| -> StoreartResult<GeneratedImage> {
        let image = render_target(config, text, target)?;
        on_saved(&image);
        Ok(image)
    };

    if !opts.parallel {
        let mut text = TextRenderer::new(&font);
        return config
            .targets
            .iter()
            .map(|t| render_one(&mut text, t))
            .collect();
    }

    let pool = build_thread_pool(opts.threads)?;
    pool.install(|| {
        config
            .targets
            .par_iter()
            .map_init(|| TextRenderer::new(&font), |text, t| render_one(text, t))
            .collect()
    })
}

fn render_target(
    config: &RenderConfig,
    text: &mut TextRenderer,
    target: &OutputTarget,
) -> StoreartResult<GeneratedImage> {
    let canvas = target.canvas()?;
    let path = config.output_path(target);
    generate_image(canvas, &path, text)?;
    Ok(GeneratedImage {
        name: target.name.clone(),
        path,
        width: canvas.width,
        height: canvas.height,
    })
}

fn build_thread_pool(threads: Option<usize>) -> StoreartResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(StoreartError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StoreartError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
