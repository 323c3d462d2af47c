use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SubsetError, SubsetResult};

/// Predefined dataset partitions, in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    pub fn as_str(&self) -> &str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }

    /// Manifest file name for this split at a dataset root.
    pub fn manifest_name(&self) -> String {
        format!("{}_split.json", self.as_str())
    }

    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(self.manifest_name())
    }
}

/// One row of a split manifest: class index, class name, point file
/// relative path, segmentation file relative path. Serialized as a JSON
/// 4-element array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitEntry(pub usize, pub String, pub String, pub String);

impl SplitEntry {
    pub fn class_name(&self) -> &str {
        &self.1
    }

    pub fn point_path(&self) -> &str {
        &self.2
    }

    pub fn seg_path(&self) -> &str {
        &self.3
    }

    /// Same entry rewritten with the output class index and canonical name.
    pub fn relabeled(&self, class_index: usize, class_name: &str) -> SplitEntry {
        SplitEntry(
            class_index,
            class_name.to_string(),
            self.2.clone(),
            self.3.clone(),
        )
    }
}

/// Load a split manifest from the dataset root, or `None` when absent.
pub fn load_split(root: &Path, split: Split) -> SubsetResult<Option<Vec<SplitEntry>>> {
    let path = split.manifest_path(root);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let entries: Vec<SplitEntry> =
        serde_json::from_str(&content).map_err(|source| SubsetError::Manifest {
            path: path.clone(),
            source,
        })?;
    debug!("Loaded {} entries from {:?}", entries.len(), path);
    Ok(Some(entries))
}

/// Write a split manifest under the output root as a JSON array of 4-tuples.
pub fn write_split(out_root: &Path, split: Split, entries: &[SplitEntry]) -> SubsetResult<()> {
    let path = split.manifest_path(out_root);
    let json = serde_json::to_string(entries).map_err(|source| SubsetError::Manifest {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, json)?;
    debug!("Wrote {} entries to {:?}", entries.len(), path);
    Ok(())
}
