use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shapez_pixelart::assets::{DEFAULT_BRIGHTNESS_LEVELS, DEFAULT_REFERENCE_BLUEPRINT};
use shapez_pixelart::blueprint::decode_document;
use shapez_pixelart::models::GeneratorConfig;
use shapez_pixelart::palette::Palette;
use shapez_pixelart::pipeline::generate_with_preview;
use shapez_pixelart::rendering::{load_grayscale_png, write_preview_png};

#[derive(Parser)]
#[command(name = "shapez-pixelart")]
#[command(about = "Turn grayscale images into shapez 2 display blueprints")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image into a blueprint string (printed to stdout)
    Generate {
        /// Source image (PNG)
        #[arg(short, long)]
        input: PathBuf,

        /// YAML generator configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Thumbnail width in cells
        #[arg(long)]
        width: Option<usize>,

        /// Thumbnail height in cells
        #[arg(long)]
        height: Option<usize>,

        /// Posterize instead of dithering
        #[arg(long)]
        no_dither: bool,

        /// Darkest remap target (0.0-1.0)
        #[arg(long, requires = "high")]
        low: Option<f64>,

        /// Brightest remap target (0.0-1.0)
        #[arg(long, requires = "low")]
        high: Option<f64>,

        /// Also write the quantized thumbnail as a grayscale PNG
        #[arg(short, long)]
        preview: Option<PathBuf>,
    },
    /// Show the palette derived from a reference blueprint
    Palette {
        /// File holding the reference blueprint (built-in reference if omitted)
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Comma-separated brightness levels, 0-255, darkest first
        #[arg(short, long, value_delimiter = ',')]
        levels: Option<Vec<u8>>,
    },
    /// Pretty-print the JSON document inside a blueprint
    Decode {
        /// Blueprint string, or a file containing one
        blueprint: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shapez_pixelart=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Generate {
            input,
            config,
            width,
            height,
            no_dither,
            low,
            high,
            preview,
        } => {
            let mut config = match config {
                Some(path) => GeneratorConfig::load(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => GeneratorConfig::default(),
            };
            if let Some(width) = width {
                config.output_width = width;
            }
            if let Some(height) = height {
                config.output_height = height;
            }
            if no_dither {
                config.dithering = false;
            }
            if let (Some(low), Some(high)) = (low, high) {
                config.brightness_range = Some((low, high));
            }
            run_generate_command(&input, &config, preview.as_deref())
        }
        Commands::Palette { reference, levels } => {
            run_palette_command(reference.as_deref(), levels.as_deref())
        }
        Commands::Decode { blueprint } => run_decode_command(&blueprint),
    }
}

/// Load, quantize and encode one image
fn run_generate_command(
    input: &Path,
    config: &GeneratorConfig,
    preview: Option<&Path>,
) -> anyhow::Result<()> {
    let grid = load_grayscale_png(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    let options = config.to_options()?;

    let (blueprint, quantized) = generate_with_preview(&grid, &options)?;

    if let Some(path) = preview {
        write_preview_png(path, &quantized)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!(
            "Preview {} ({}x{})",
            path.display(),
            quantized.width(),
            quantized.height()
        );
    }

    println!("{blueprint}");
    Ok(())
}

/// Print every palette level with its building count
fn run_palette_command(reference: Option<&Path>, levels: Option<&[u8]>) -> anyhow::Result<()> {
    let reference = match reference {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => DEFAULT_REFERENCE_BLUEPRINT.to_string(),
    };
    let levels = levels.unwrap_or(&DEFAULT_BRIGHTNESS_LEVELS);

    let palette = Palette::extract(&reference, levels)?;

    println!("{} levels:\n", palette.len());
    for (i, ((level, template), gray)) in palette.iter().zip(levels).enumerate() {
        println!(
            "  {i:>2}  {gray:>3}  {level:.4}  {} buildings",
            template.entry_count()
        );
    }
    Ok(())
}

/// Print the decoded document of a blueprint string or file
fn run_decode_command(blueprint: &str) -> anyhow::Result<()> {
    let path = Path::new(blueprint);
    let text = if path.is_file() {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        blueprint.to_string()
    };

    let document = decode_document(&text)
        .map_err(|e| anyhow::anyhow!("Decode error at {} stage: {e}", e.stage()))?;
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
