use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resizer::codec::{decode, Decoded};
use resizer::models::ResizeConfig;
use resizer::services::ResizeService;

#[derive(Parser)]
#[command(name = "resizer")]
#[command(about = "Resize images to a target height, keeping the aspect ratio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resize an image file
    Resize {
        /// Input image (GIF, PNG, JPEG, WebP, BMP, TIFF)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Target height in pixels (animated GIFs use half of this)
        #[arg(short, long)]
        size: Option<u32>,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print format and dimensions of an image file
    Info {
        /// Input image
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resizer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Resize {
            input,
            output,
            size,
            config,
        }) => run_resize_command(&input, &output, size, config.as_deref()),
        Some(Commands::Info { input }) => run_info_command(&input),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn run_resize_command(
    input: &Path,
    output: &Path,
    size: Option<u32>,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let config = ResizeConfig::load_or_default(config);
    let size = size.unwrap_or(config.default_size);

    let service = ResizeService::new(config);
    service.start()?;

    let data = std::fs::read(input)?;

    // Buffer so a failed resize leaves no partial file behind
    let mut encoded = Vec::new();
    let summary = service.resize(&data, &mut encoded, size)?;
    std::fs::write(output, &encoded)?;

    println!(
        "Resized {} ({}x{} {}) -> {} ({}x{} {}, {} bytes)",
        input.display(),
        summary.source.0,
        summary.source.1,
        summary.format,
        output.display(),
        summary.output.0,
        summary.output.1,
        summary.encoding.mime_type(),
        encoded.len()
    );
    Ok(())
}

fn run_info_command(input: &Path) -> anyhow::Result<()> {
    let data = std::fs::read(input)?;
    let decoded = decode(&data)?;
    let (width, height) = decoded.dimensions();

    println!("{}", input.display());
    println!("  format:     {}", decoded.format());
    println!("  dimensions: {width}x{height}");
    println!(
        "  output:     {}",
        decoded.format().output_encoding().mime_type()
    );

    if let Decoded::Animated(animation) = &decoded {
        println!("  frames:     {}", animation.frame_count());
        println!("  loop:       {:?}", animation.loop_count);
        println!("  duration:   {}cs", animation.total_delay());
        for (index, frame) in animation.frames.iter().enumerate() {
            println!(
                "    #{index}: {}x{} at {},{} delay {}cs {:?}",
                frame.image.width(),
                frame.image.height(),
                frame.left,
                frame.top,
                frame.delay,
                frame.disposal
            );
        }
    }
    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Resizer v{VERSION}");
    println!("Aspect-preserving image resizing\n");
    println!("Commands:");
    println!("  resize --input <file> --output <file> [--size N] [--config <yaml>]");
    println!("  info --input <file>\n");
    println!("Output format follows the input: GIF -> GIF (all frames, Plan 9 palette),");
    println!("PNG -> PNG, JPEG -> JPEG (quality 100), anything else -> JPEG.");
    println!(
        "\nLogging: RUST_LOG = {}",
        std::env::var("RUST_LOG")
            .as_deref()
            .unwrap_or("resizer=info (default)")
    );
}
