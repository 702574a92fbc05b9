//! bin2png turns raw pixel dumps (framebuffers, GPU surfaces, memory captures)
//! into PNG images.
//!
//! # Pipeline overview
//!
//! 1. **Resolve** the named [`PixelFormat`] into channel mode, byte order and bytes per pixel.
//! 2. **Size** a near-square raster with [`compute_dimensions`], aligned to the tile size in tiled mode.
//! 3. **Normalize** the dump to exactly that many bytes ([`normalize_buffer`]).
//! 4. **Assemble** scanlines, either directly or by reassembling tiles ([`untile`]).
//! 5. **Encode** the [`Raster`] as PNG, plus the de-tiled native bytes in tiled mode.
//!
//! [`convert`] runs all of it for one input file; [`convert_bytes`] is the
//! in-memory part.
#![forbid(unsafe_code)]

mod encode;
mod format;
mod foundation;
mod layout;
mod pipeline;
mod raster;

pub use encode::{ensure_parent_dir, png::write_png, raw::write_raw};
pub use format::{ByteOrder, ChannelMode, FormatDesc, PixelFormat};
pub use foundation::error::{Bin2PngError, Bin2PngResult};
pub use layout::buffer::normalize_buffer;
pub use layout::dims::{Alignment, Dimensions, compute_dimensions};
pub use layout::tiles::{TileGrid, TileSize, tile, untile};
pub use pipeline::{
    ConvertOpts, ConvertReport, Converted, DETILED_SUFFIX, OutputPaths, convert, convert_bytes,
    resolve_output_paths,
};
pub use raster::Raster;
