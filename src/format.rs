use std::{fmt, str::FromStr};

use crate::foundation::error::{Bin2PngError, Bin2PngResult};

/// Color channels carried into the output raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    Rgb,
    Rgba,
}

impl ChannelMode {
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    pub fn color_type(self) -> image::ColorType {
        match self {
            Self::Rgb => image::ColorType::Rgb8,
            Self::Rgba => image::ColorType::Rgba8,
        }
    }
}

/// Layout of one pixel record in memory, first byte first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Rgb,
    Rgba,
    Bgrx,
    Xrgb,
    Bgra,
}

impl ByteOrder {
    /// Offsets of (r, g, b, a) inside one record. `a` is `None` when the
    /// record carries no alpha.
    pub fn offsets(self) -> ([usize; 3], Option<usize>) {
        match self {
            Self::Rgb => ([0, 1, 2], None),
            Self::Rgba => ([0, 1, 2], Some(3)),
            Self::Bgrx => ([2, 1, 0], None),
            Self::Xrgb => ([1, 2, 3], None),
            Self::Bgra => ([2, 1, 0], Some(3)),
        }
    }
}

/// Named pixel formats understood by the converter.
///
/// The `*8888` names that spell out a channel order describe a little-endian
/// 32-bit word with the first-named channel in the top byte, so the byte order
/// in memory is the name reversed (`xrgb8888` is stored as B, G, R, X).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
#[value(rename_all = "lower")]
pub enum PixelFormat {
    Rgb888,
    Rgb8888,
    Xrgb8888,
    Bgrx8888,
    Argb8888,
}

/// Everything the transform needs to know about a [`PixelFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatDesc {
    pub mode: ChannelMode,
    pub order: ByteOrder,
    pub bytes_per_pixel: usize,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 5] = [
        Self::Rgb888,
        Self::Rgb8888,
        Self::Xrgb8888,
        Self::Bgrx8888,
        Self::Argb8888,
    ];

    pub fn desc(self) -> FormatDesc {
        let (mode, order, bytes_per_pixel) = match self {
            Self::Rgb888 => (ChannelMode::Rgb, ByteOrder::Rgb, 3),
            Self::Rgb8888 => (ChannelMode::Rgba, ByteOrder::Rgba, 4),
            Self::Xrgb8888 => (ChannelMode::Rgb, ByteOrder::Bgrx, 4),
            Self::Bgrx8888 => (ChannelMode::Rgb, ByteOrder::Xrgb, 4),
            Self::Argb8888 => (ChannelMode::Rgba, ByteOrder::Bgra, 4),
        };
        FormatDesc {
            mode,
            order,
            bytes_per_pixel,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        self.desc().bytes_per_pixel
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb888 => "rgb888",
            Self::Rgb8888 => "rgb8888",
            Self::Xrgb8888 => "xrgb8888",
            Self::Bgrx8888 => "bgrx8888",
            Self::Argb8888 => "argb8888",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = Bin2PngError;

    fn from_str(s: &str) -> Bin2PngResult<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| Bin2PngError::validation(format!("unknown pixel format '{s}'")))
    }
}

impl FormatDesc {
    /// Decode native pixel records into tightly packed RGB8 or RGBA8.
    ///
    /// `raw.len()` must be a multiple of `bytes_per_pixel`; any trailing
    /// partial record is ignored.
    pub fn decode_to_channels(&self, raw: &[u8]) -> Vec<u8> {
        let ([r, g, b], a) = self.order.offsets();
        let pixels = raw.len() / self.bytes_per_pixel;
        let mut out = Vec::with_capacity(pixels * self.mode.channels());
        for px in raw.chunks_exact(self.bytes_per_pixel) {
            out.extend_from_slice(&[px[r], px[g], px[b]]);
            if self.mode == ChannelMode::Rgba {
                out.push(a.map_or(255, |i| px[i]));
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../tests/unit/format.rs"]
mod tests;
