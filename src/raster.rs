use crate::{
    foundation::error::{Bin2PngError, Bin2PngResult},
    format::{ChannelMode, FormatDesc},
    layout::dims::Dimensions,
};

/// Linear scanlines of 8-bit RGB or RGBA, ready for an encoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub mode: ChannelMode,
    pub data: Vec<u8>,
}

impl Raster {
    /// Interpret `native` as `dims.height` rows of `dims.width` records in
    /// `desc`'s byte order.
    pub fn from_native(native: &[u8], dims: Dimensions, desc: &FormatDesc) -> Bin2PngResult<Self> {
        let expected = dims.byte_len(desc.bytes_per_pixel);
        if native.len() != expected {
            return Err(Bin2PngError::validation(format!(
                "pixel buffer holds {} bytes, expected {expected} for {}x{}",
                native.len(),
                dims.width,
                dims.height
            )));
        }

        let (width, height) = dims.to_u32()?;
        Ok(Self {
            width,
            height,
            mode: desc.mode,
            data: desc.decode_to_channels(native),
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let n = self.mode.channels();
        let at = (y as usize * self.width as usize + x as usize) * n;
        &self.data[at..at + n]
    }
}

#[cfg(test)]
#[path = "../tests/unit/raster.rs"]
mod tests;
