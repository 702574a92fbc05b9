use crate::foundation::error::{Bin2PngError, Bin2PngResult};

/// Granularity both output dimensions must be a multiple of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub w: usize,
    pub h: usize,
}

impl Alignment {
    pub const NONE: Alignment = Alignment { w: 1, h: 1 };

    pub fn new(w: usize, h: usize) -> Bin2PngResult<Self> {
        if w == 0 || h == 0 {
            return Err(Bin2PngError::validation(format!(
                "alignment must be positive, got {w}x{h}"
            )));
        }
        Ok(Self { w, h })
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::NONE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn pixels(self) -> usize {
        self.width * self.height
    }

    pub fn byte_len(self, bytes_per_pixel: usize) -> usize {
        self.pixels() * bytes_per_pixel
    }

    /// Both sides as `u32`, the range a PNG header can carry.
    pub fn to_u32(self) -> Bin2PngResult<(u32, u32)> {
        let w = u32::try_from(self.width).ok();
        let h = u32::try_from(self.height).ok();
        match (w, h) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(Bin2PngError::validation(format!(
                "image dimensions {}x{} exceed the PNG limit",
                self.width, self.height
            ))),
        }
    }
}

/// Pick a near-square `width x height` that holds `pixel_count` pixels, with
/// each side a multiple of `align`.
///
/// All rounding is integer ceiling division: `width` is the ceiling of
/// `sqrt(pixel_count)` rounded up to `align.w`, and `height` is
/// `ceil(pixel_count / width)` rounded up to `align.h`.
pub fn compute_dimensions(pixel_count: u64, align: Alignment) -> Bin2PngResult<Dimensions> {
    if pixel_count == 0 {
        return Err(Bin2PngError::EmptyPixelData);
    }
    if align.w == 0 || align.h == 0 {
        return Err(Bin2PngError::validation("alignment must be positive"));
    }

    let too_large = || Bin2PngError::validation(format!("pixel count {pixel_count} is too large"));
    let count = usize::try_from(pixel_count).map_err(|_| too_large())?;

    let side = ceil_sqrt(count);
    let width = side.div_ceil(align.w).checked_mul(align.w).ok_or_else(too_large)?;
    let width = if width == 0 { align.w } else { width };

    let height = count
        .div_ceil(width)
        .div_ceil(align.h)
        .checked_mul(align.h)
        .ok_or_else(too_large)?;

    width.checked_mul(height).ok_or_else(too_large)?;
    Ok(Dimensions { width, height })
}

fn ceil_sqrt(n: usize) -> usize {
    let r = n.isqrt();
    if r * r == n { r } else { r + 1 }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/dims.rs"]
mod tests;
