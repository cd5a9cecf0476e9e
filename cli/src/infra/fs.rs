//! Filesystem infrastructure: implements `LocalFs` with `std::fs`.

use std::path::Path;

use anyhow::{Context, Result};

/// Production filesystem implementation of `LocalFs`.
pub struct LocalFs;

impl crate::application::ports::LocalFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Copies into a temporary sibling of `to`, then renames it into place.
    ///
    /// The rename swaps the directory entry, so an old binary that is still
    /// shutting down keeps its inode and cannot make the write fail.
    fn replace_file(&self, from: &Path, to: &Path) -> Result<()> {
        let dir = to.parent().unwrap_or_else(|| Path::new("."));
        let staged = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temporary file in {}", dir.display()))?;
        std::fs::copy(from, staged.path())
            .with_context(|| format!("copying {}", from.display()))?;
        staged
            .persist(to)
            .with_context(|| format!("replacing {}", to.display()))?;
        Ok(())
    }
}
