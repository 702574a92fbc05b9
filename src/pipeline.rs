use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    encode::{png::write_png, raw::write_raw},
    format::PixelFormat,
    foundation::error::{Bin2PngError, Bin2PngResult},
    layout::{
        buffer::normalize_buffer,
        dims::{Alignment, Dimensions, compute_dimensions},
        tiles::{TileGrid, TileSize, untile},
    },
    raster::Raster,
};

/// Suffix appended to the input stem for the de-tiled dump.
pub const DETILED_SUFFIX: &str = "_ex.bin";

#[derive(Clone, Debug)]
pub struct ConvertOpts {
    pub input: PathBuf,
    pub format: PixelFormat,
    /// Explicit PNG path. Relative paths are placed under `dir` when it is set.
    pub out: Option<PathBuf>,
    pub dir: Option<PathBuf>,
    /// Reassemble tiles of this size instead of reading linear scanlines.
    pub tiled: Option<TileSize>,
}

impl ConvertOpts {
    pub fn new(input: impl Into<PathBuf>, format: PixelFormat) -> Self {
        Self {
            input: input.into(),
            format,
            out: None,
            dir: None,
            tiled: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub png: PathBuf,
    /// Only set in tiled mode.
    pub detiled: Option<PathBuf>,
}

/// Decide where the PNG (and in tiled mode the `_ex.bin`) are written.
pub fn resolve_output_paths(
    input: &Path,
    out: Option<&Path>,
    dir: Option<&Path>,
    tiled: bool,
) -> OutputPaths {
    let png = match (out, dir) {
        (Some(out), Some(dir)) if out.is_relative() => dir.join(out),
        (Some(out), _) => out.to_path_buf(),
        (None, Some(dir)) => {
            let name = input
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("output"));
            dir.join(name.with_extension("png"))
        }
        (None, None) => input.with_extension("png"),
    };

    let detiled = tiled.then(|| {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let name = format!("{stem}{DETILED_SUFFIX}");
        match png.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    });

    OutputPaths { png, detiled }
}

/// In-memory result of the transform, before anything is written.
#[derive(Clone, Debug)]
pub struct Converted {
    pub pixel_count: u64,
    pub dims: Dimensions,
    /// Linear scanlines in the format's native byte order.
    pub native: Vec<u8>,
    pub raster: Raster,
}

/// Lay `raw` out as an image: size it, pad or cut it to fit, then either read
/// it as scanlines or reassemble its tiles.
pub fn convert_bytes(
    raw: Vec<u8>,
    format: PixelFormat,
    tiled: Option<TileSize>,
) -> Bin2PngResult<Converted> {
    let desc = format.desc();
    let pixel_count = (raw.len() / desc.bytes_per_pixel) as u64;

    let align = tiled.map_or(Alignment::NONE, TileSize::alignment);
    let dims = compute_dimensions(pixel_count, align)?;
    tracing::debug!(
        pixel_count,
        width = dims.width,
        height = dims.height,
        "computed dimensions"
    );

    let normalized = normalize_buffer(raw, dims.byte_len(desc.bytes_per_pixel));
    let native = match tiled {
        Some(tile) => {
            let grid = TileGrid::new(dims, tile)?;
            untile(&normalized, &grid, desc.bytes_per_pixel)
        }
        None => normalized,
    };

    let raster = Raster::from_native(&native, dims, &desc)?;
    Ok(Converted {
        pixel_count,
        dims,
        native,
        raster,
    })
}

#[derive(Clone, Debug)]
pub struct ConvertReport {
    pub dims: Dimensions,
    pub paths: OutputPaths,
}

/// Read the input dump, transform it and write the outputs.
#[tracing::instrument(skip(opts), fields(input = %opts.input.display(), format = %opts.format))]
pub fn convert(opts: &ConvertOpts) -> Bin2PngResult<ConvertReport> {
    if !opts.input.exists() {
        return Err(Bin2PngError::MissingInputFile(opts.input.clone()));
    }
    let raw = std::fs::read(&opts.input)
        .with_context(|| format!("read input '{}'", opts.input.display()))?;

    let converted = convert_bytes(raw, opts.format, opts.tiled)?;
    let paths = resolve_output_paths(
        &opts.input,
        opts.out.as_deref(),
        opts.dir.as_deref(),
        opts.tiled.is_some(),
    );

    write_png(&paths.png, &converted.raster)?;
    if let Some(detiled) = &paths.detiled {
        write_raw(detiled, &converted.native)?;
    }

    Ok(ConvertReport {
        dims: converted.dims,
        paths,
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
