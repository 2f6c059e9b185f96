use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use storeart::{FontPreference, RenderConfig, SessionOpts};

/// Render the app store listing images.
#[derive(Parser, Debug)]
#[command(name = "storeart", version)]
struct Cli {
    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to write the PNG files into.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Font file to try before the platform fonts.
    #[arg(long, conflicts_with = "builtin_font")]
    font: Option<PathBuf>,

    /// Always draw labels with the built-in bitmap font.
    #[arg(long, default_value_t = false)]
    builtin_font: bool,

    /// Only render the named target (repeatable).
    #[arg(long = "only", value_name = "NAME")]
    only: Vec<String>,

    /// Render targets in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(dir) = cli.out_dir {
        config.out_dir = dir;
    }
    if cli.builtin_font {
        config.font = FontPreference::Builtin;
    } else if let Some(font) = cli.font {
        config.font = FontPreference::File(font);
    }
    config.retain_targets(&cli.only)?;

    let opts = SessionOpts {
        parallel: cli.parallel,
        threads: cli.threads,
    };

    println!("Generating app store images...");
    storeart::generate_all_with(&config, opts, |img| {
        println!("  Saved {} ({}x{})", img.path.display(), img.width, img.height);
    })
    .with_context(|| format!("generate images into '{}'", config.out_dir.display()))?;
    println!("Done!");
    Ok(())
}
