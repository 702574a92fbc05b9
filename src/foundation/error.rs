use std::path::PathBuf;

pub type Bin2PngResult<T> = Result<T, Bin2PngError>;

#[derive(thiserror::Error, Debug)]
pub enum Bin2PngError {
    #[error("input file not found: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("input does not contain any pixel data")]
    EmptyPixelData,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Bin2PngError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
