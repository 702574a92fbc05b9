use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bin2png",
    version,
    about = "Convert a binary file into a PNG image."
)]
struct Cli {
    /// Path to the input .bin file.
    #[arg(long = "bin")]
    bin: PathBuf,

    /// Pixel format of the input data.
    #[arg(long, value_enum)]
    format: bin2png::PixelFormat,

    /// Output PNG path (defaults to the input filename with a .png extension).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output directory, created if missing.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Input is stored as tiles; reassemble them and also write `<stem>_ex.bin`.
    #[arg(long, default_value_t = false)]
    cpress: bool,

    /// Tile width in pixels (tiled mode only).
    #[arg(long, default_value_t = bin2png::TileSize::DEFAULT.w, requires = "cpress")]
    block_w: usize,

    /// Tile height in pixels (tiled mode only).
    #[arg(long, default_value_t = bin2png::TileSize::DEFAULT.h, requires = "cpress")]
    block_h: usize,

    /// Log computed dimensions and buffer adjustments to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let tiled = if cli.cpress {
        Some(bin2png::TileSize::new(cli.block_w, cli.block_h)?)
    } else {
        None
    };

    let opts = bin2png::ConvertOpts {
        input: cli.bin,
        format: cli.format,
        out: cli.out,
        dir: cli.dir,
        tiled,
    };
    let report = bin2png::convert(&opts)?;

    println!("Saved PNG: {}", report.paths.png.display());
    if let Some(detiled) = &report.paths.detiled {
        println!("Saved raw: {}", detiled.display());
    }
    Ok(())
}
