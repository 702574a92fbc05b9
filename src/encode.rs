use std::path::Path;

use crate::foundation::error::Bin2PngResult;

pub(crate) mod png;
pub(crate) mod raw;

pub fn ensure_parent_dir(path: &Path) -> Bin2PngResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
