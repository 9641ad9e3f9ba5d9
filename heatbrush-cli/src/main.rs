//! Headless renderer for heatbrush click scripts.
//!
//! Replays a recorded click sequence against a base image and writes the
//! resulting composite, for scripted and reproducible overlay generation.
#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use thiserror::Error;

use heatbrush_algorithms::{Colormap, PaintSession};
use heatbrush_core::BrushParams;
use heatbrush_io::{load_rgb_frame, write_jpeg};

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error: {0}")]
    HeatbrushIo(#[from] heatbrush_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] heatbrush_core::Error),

    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),
}

/// Palette selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Palette {
    /// Jet (the classic CAM palette)
    Jet,
    /// Hot (thermal)
    Hot,
    /// Grayscale
    Grayscale,
    /// Approximate Viridis
    Viridis,
}

impl From<Palette> for Colormap {
    fn from(value: Palette) -> Self {
        match value {
            Palette::Jet => Colormap::Jet,
            Palette::Hot => Colormap::Hot,
            Palette::Grayscale => Colormap::Grayscale,
            Palette::Viridis => Colormap::Viridis,
        }
    }
}

/// A recorded click sequence with its brush settings.
#[derive(Debug, Deserialize)]
struct ClickScript {
    /// Gaussian blur sigma.
    #[serde(default = "default_sigma")]
    sigma: f32,
    /// Per-click weight increment.
    #[serde(default = "default_increment")]
    increment: f32,
    /// Disc radius in pixels.
    #[serde(default = "default_radius")]
    radius: u32,
    /// Click coordinates as `[x, y]` pairs, applied in order.
    clicks: Vec<[usize; 2]>,
}

fn default_sigma() -> f32 {
    heatbrush_core::brush::DEFAULT_SIGMA
}

fn default_increment() -> f32 {
    heatbrush_core::brush::DEFAULT_INCREMENT
}

fn default_radius() -> u32 {
    heatbrush_core::brush::DEFAULT_RADIUS
}

/// Heat overlay renderer for recorded click sequences.
#[derive(Parser)]
#[command(name = "heatbrush")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a click script over a base image and write the composite
    Render {
        /// Base image file
        #[arg(short, long)]
        input: PathBuf,

        /// JSON click script: {"sigma": 20.0, "increment": 0.1, "clicks": [[x, y], ...]}
        #[arg(short, long)]
        script: PathBuf,

        /// Output JPEG path
        #[arg(short, long)]
        output: PathBuf,

        /// Palette for the heat overlay
        #[arg(short, long, value_enum, default_value = "jet")]
        colormap: Palette,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about a base image
    Info {
        /// Image file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            script,
            output,
            colormap,
            verbose,
        } => {
            let start = Instant::now();

            let text = std::fs::read_to_string(&script)?;
            let script: ClickScript = serde_json::from_str(&text)?;

            if verbose {
                eprintln!("Base image: {}", input.display());
                eprintln!("Sigma: {} px", script.sigma);
                eprintln!("Increment: {}", script.increment);
                eprintln!("Disc radius: {} px", script.radius);
                eprintln!("Clicks: {}", script.clicks.len());
            }

            let base = load_rgb_frame(&input)?;
            let mut session = PaintSession::new(base)?;
            session.set_params(BrushParams {
                sigma: script.sigma,
                increment: script.increment,
                radius: script.radius,
            })?;

            for (i, [x, y]) in script.clicks.iter().copied().enumerate() {
                if verbose {
                    eprintln!("  click {} at ({}, {})", i + 1, x, y);
                }
                session.click(x, y)?;
            }

            let composite = session.composite(colormap.into())?;
            write_jpeg(&output, &composite)?;

            println!(
                "Rendered {} clicks to {} in {:.2}s",
                script.clicks.len(),
                output.display(),
                start.elapsed().as_secs_f64()
            );
        }

        Commands::Info { input } => {
            let frame = load_rgb_frame(&input)?;
            println!("File: {}", input.display());
            println!("Size: {}x{}", frame.width(), frame.height());
            println!("Channels: RGB8");
        }
    }

    Ok(())
}
