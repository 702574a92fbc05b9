use std::path::Path;

use crate::{encode::ensure_parent_dir, foundation::error::Bin2PngResult, raster::Raster};

/// Write `raster` as a PNG with the encoder's default settings.
pub fn write_png(path: &Path, raster: &Raster) -> Bin2PngResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &raster.data,
        raster.width,
        raster.height,
        raster.mode.color_type(),
        image::ImageFormat::Png,
    )?;
    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
