use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::SubsetResult;

/// List the visible entries of a directory, lexicographically sorted.
///
/// Dot-entries are excluded. Sorting up front keeps subsequent sampling
/// reproducible across filesystem orderings.
pub fn list_visible_sorted(dir: &Path) -> SubsetResult<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let hidden = entry
            .file_name()
            .to_str()
            .map(|n| n.starts_with('.'))
            .unwrap_or(false);
        if !hidden {
            entries.push(entry.path());
        }
    }
    entries.sort();
    Ok(entries)
}

/// Copy a single file, creating the destination's parent directories first.
pub fn copy_file(src: &Path, dest: &Path) -> SubsetResult<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest)?;
    debug!("Copied {:?} -> {:?}", src, dest);
    Ok(())
}

/// Recursively copy a file or directory tree into `dest`.
pub fn copy_recursive(src: &Path, dest: &Path) -> SubsetResult<()> {
    if src.is_dir() {
        fs::create_dir_all(dest)?;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            copy_recursive(&entry.path(), &dest.join(entry.file_name()))?;
        }
    } else {
        copy_file(src, dest)?;
    }
    Ok(())
}
