use crate::{
    foundation::error::{Bin2PngError, Bin2PngResult},
    layout::dims::{Alignment, Dimensions},
};

/// Size of one tile in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSize {
    pub w: usize,
    pub h: usize,
}

impl TileSize {
    pub const DEFAULT: TileSize = TileSize { w: 16, h: 4 };

    pub fn new(w: usize, h: usize) -> Bin2PngResult<Self> {
        if w == 0 || h == 0 {
            return Err(Bin2PngError::validation(format!(
                "tile size must be positive, got {w}x{h}"
            )));
        }
        Ok(Self { w, h })
    }

    pub fn alignment(self) -> Alignment {
        Alignment {
            w: self.w,
            h: self.h,
        }
    }

    pub fn block_bytes(self, bytes_per_pixel: usize) -> usize {
        self.w * self.h * bytes_per_pixel
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Row-major placement of tiles over a raster whose sides are whole
/// multiples of the tile size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGrid {
    dims: Dimensions,
    tile: TileSize,
}

impl TileGrid {
    pub fn new(dims: Dimensions, tile: TileSize) -> Bin2PngResult<Self> {
        if tile.w == 0 || tile.h == 0 {
            return Err(Bin2PngError::validation("tile size must be positive"));
        }
        if !dims.width.is_multiple_of(tile.w) || !dims.height.is_multiple_of(tile.h) {
            return Err(Bin2PngError::validation(format!(
                "raster {}x{} is not a multiple of tile {}x{}",
                dims.width, dims.height, tile.w, tile.h
            )));
        }
        Ok(Self { dims, tile })
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn tile(&self) -> TileSize {
        self.tile
    }

    pub fn blocks_per_row(&self) -> usize {
        self.dims.width / self.tile.w
    }

    pub fn block_count(&self) -> usize {
        self.blocks_per_row() * (self.dims.height / self.tile.h)
    }

    /// Top-left pixel `(bx, by)` of block `index` in source order.
    pub fn block_origin(&self, index: usize) -> (usize, usize) {
        let per_row = self.blocks_per_row();
        (
            (index % per_row) * self.tile.w,
            (index / per_row) * self.tile.h,
        )
    }
}

/// Reassemble tiles stored back to back in `src` into a linear raster.
///
/// Pixels are moved as opaque `bytes_per_pixel` records, so the result keeps
/// the source byte order. A short trailing block is zero-padded. Blocks past
/// the bottom of the grid are dropped.
pub fn untile(src: &[u8], grid: &TileGrid, bytes_per_pixel: usize) -> Vec<u8> {
    let dims = grid.dims();
    let tile = grid.tile();
    let row_bytes = dims.width * bytes_per_pixel;
    let tile_row_bytes = tile.w * bytes_per_pixel;
    let block_bytes = tile.block_bytes(bytes_per_pixel);

    let mut dst = vec![0u8; dims.byte_len(bytes_per_pixel)];
    if block_bytes == 0 {
        return dst;
    }

    let mut padded = Vec::new();
    for (index, chunk) in src.chunks(block_bytes).enumerate() {
        let (bx, by) = grid.block_origin(index);
        if by >= dims.height {
            tracing::warn!(
                block = index,
                blocks = grid.block_count(),
                "tile data runs past the raster; ignoring remaining blocks"
            );
            break;
        }

        let block = if chunk.len() < block_bytes {
            padded.clear();
            padded.extend_from_slice(chunk);
            padded.resize(block_bytes, 0);
            &padded[..]
        } else {
            chunk
        };

        for (row, line) in block.chunks_exact(tile_row_bytes).enumerate() {
            let start = (by + row) * row_bytes + bx * bytes_per_pixel;
            dst[start..start + tile_row_bytes].copy_from_slice(line);
        }
    }
    dst
}

/// Inverse of [`untile`]: cut a linear raster into tiles in source order.
pub fn tile(raster: &[u8], grid: &TileGrid, bytes_per_pixel: usize) -> Bin2PngResult<Vec<u8>> {
    let dims = grid.dims();
    let expected = dims.byte_len(bytes_per_pixel);
    if raster.len() != expected {
        return Err(Bin2PngError::validation(format!(
            "raster holds {} bytes, expected {expected}",
            raster.len()
        )));
    }

    let tile = grid.tile();
    let row_bytes = dims.width * bytes_per_pixel;
    let tile_row_bytes = tile.w * bytes_per_pixel;

    let mut out = Vec::with_capacity(expected);
    for index in 0..grid.block_count() {
        let (bx, by) = grid.block_origin(index);
        for row in 0..tile.h {
            let start = (by + row) * row_bytes + bx * bytes_per_pixel;
            out.extend_from_slice(&raster[start..start + tile_row_bytes]);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tiles.rs"]
mod tests;
