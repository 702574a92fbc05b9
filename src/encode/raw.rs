use std::path::Path;

use anyhow::Context as _;

use crate::{encode::ensure_parent_dir, foundation::error::Bin2PngResult};

/// Dump `bytes` to `path` unchanged.
pub fn write_raw(path: &Path, bytes: &[u8]) -> Bin2PngResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).with_context(|| format!("write raw '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "wrote raw pixels");
    Ok(())
}
