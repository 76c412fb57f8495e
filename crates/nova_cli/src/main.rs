//! Nova CLI
//!
//! Drive the particle presentation headlessly, dump banner glyph canvases
//! and print the default configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nova_particles::ParticleSampler;
use nova_scene::SceneConfig;
use nova_text::BannerCanvas;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod driver;
mod surface;

use driver::{RunOptions, ScrollScript};

#[derive(Parser)]
#[command(name = "nova")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scroll-driven particle text and fireworks", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a scroll-through followed by clicks
    Run {
        /// Frames to simulate
        #[arg(short, long, default_value = "600")]
        frames: u64,

        /// Scene configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Random seed (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pointer clicks to issue after the scroll reaches the end
        #[arg(long, default_value = "3")]
        clicks: u32,

        /// Override the star count
        #[arg(long)]
        stars: Option<usize>,

        /// Viewport width
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Viewport height
        #[arg(long, default_value = "720")]
        height: u32,

        /// Print per-frame statistics as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Rasterize a banner canvas to PNG
    Glyphs {
        /// Main label (red channel)
        #[arg(short, long)]
        label: String,

        /// Sub-label (green channel)
        #[arg(long)]
        sub: Option<String>,

        /// Output PNG path
        #[arg(short, long)]
        out: PathBuf,

        /// Canvas width
        #[arg(long, default_value = "2048")]
        width: u32,

        /// Canvas height
        #[arg(long, default_value = "1024")]
        height: u32,
    },

    /// Print the default scene configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            frames,
            config,
            seed,
            clicks,
            stars,
            width,
            height,
            json,
        } => {
            let mut scene = match config {
                Some(path) => SceneConfig::load(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => SceneConfig::default(),
            };
            if let Some(stars) = stars {
                scene.stars.count = stars;
            }
            let options = RunOptions {
                frames,
                seed,
                width,
                height,
                json,
                script: ScrollScript::new(frames, clicks),
            };
            driver::run(scene, &options)
        }

        Commands::Glyphs {
            label,
            sub,
            out,
            width,
            height,
        } => cmd_glyphs(&label, sub.as_deref(), &out, width, height),

        Commands::Config => cmd_config(),
    }
}

fn cmd_glyphs(label: &str, sub: Option<&str>, out: &Path, width: u32, height: u32) -> Result<()> {
    let mut canvas = BannerCanvas::new(width, height);
    let image = canvas.render(label, sub);
    image
        .save(out)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    let particles = ParticleSampler::default().count(&image);
    info!(
        "Wrote {}x{} canvas to {} ({} particles at default sampling)",
        width,
        height,
        out.display(),
        particles
    );
    Ok(())
}

fn cmd_config() -> Result<()> {
    let text = SceneConfig::default()
        .to_toml()
        .context("Failed to serialize default config")?;
    print!("{}", text);
    Ok(())
}
