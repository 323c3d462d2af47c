use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{SubsetError, SubsetResult};
use crate::synset_map::SYNSET_MANIFEST;

/// Locate the dataset root starting from `root`.
///
/// If `root` itself holds the synset manifest it is the dataset root.
/// Otherwise exactly one direct subdirectory must hold it; zero or several
/// matches are an error rather than a guess.
pub fn find_dataset_root(root: &Path) -> SubsetResult<PathBuf> {
    if root.join(SYNSET_MANIFEST).exists() {
        debug!("Dataset root is {:?}", root);
        return Ok(root.to_path_buf());
    }

    let mut candidates = Vec::new();
    if let Ok(entries) = fs::read_dir(root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() && path.join(SYNSET_MANIFEST).exists() {
                candidates.push(path);
            }
        }
    }
    // Stable choice regardless of readdir ordering
    candidates.sort();

    match candidates.len() {
        1 => {
            let found = candidates.remove(0);
            info!("Dataset root found at {:?}", found);
            Ok(found)
        }
        0 => Err(SubsetError::ManifestNotFound(root.to_path_buf())),
        n => Err(SubsetError::AmbiguousRoot {
            root: root.to_path_buf(),
            candidates: n,
        }),
    }
}

/// Resolve a category directory under `root` (or `root/subdir` when given),
/// trying the synset id first and the human-readable name second.
///
/// Dataset distributions name per-category folders either way; the dual
/// lookup lets the tool work against both without configuration.
pub fn resolve_category_dir(
    root: &Path,
    synset: &str,
    name: &str,
    subdir: Option<&str>,
) -> Option<PathBuf> {
    let base = match subdir {
        Some(sub) => root.join(sub),
        None => root.to_path_buf(),
    };

    let by_synset = base.join(synset);
    if by_synset.exists() {
        return Some(by_synset);
    }
    let by_name = base.join(name);
    if by_name.exists() {
        return Some(by_name);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_root_with_manifest_is_returned_directly() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SYNSET_MANIFEST), "Chair 03001627\n").unwrap();
        let root = find_dataset_root(dir.path()).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_unique_child_with_manifest_is_found() {
        let dir = TempDir::new().unwrap();
        let child = dir.path().join("shapenetcore_partanno");
        fs::create_dir(&child).unwrap();
        fs::write(child.join(SYNSET_MANIFEST), "Chair 03001627\n").unwrap();
        let root = find_dataset_root(dir.path()).unwrap();
        assert_eq!(root, child);
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = find_dataset_root(dir.path()).unwrap_err();
        assert!(matches!(err, SubsetError::ManifestNotFound(_)));
    }

    #[test]
    fn test_two_candidate_children_are_ambiguous() {
        let dir = TempDir::new().unwrap();
        for name in ["a", "b"] {
            let child = dir.path().join(name);
            fs::create_dir(&child).unwrap();
            fs::write(child.join(SYNSET_MANIFEST), "Chair 03001627\n").unwrap();
        }
        let err = find_dataset_root(dir.path()).unwrap_err();
        assert!(matches!(err, SubsetError::AmbiguousRoot { candidates: 2, .. }));
    }

    #[test]
    fn test_resolve_prefers_synset_over_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("03001627")).unwrap();
        fs::create_dir(dir.path().join("Chair")).unwrap();
        let resolved = resolve_category_dir(dir.path(), "03001627", "Chair", None).unwrap();
        assert_eq!(resolved, dir.path().join("03001627"));
    }

    #[test]
    fn test_resolve_falls_back_to_name_under_subdir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("points").join("Chair")).unwrap();
        let resolved =
            resolve_category_dir(dir.path(), "03001627", "Chair", Some("points")).unwrap();
        assert_eq!(resolved, dir.path().join("points").join("Chair"));
    }

    #[test]
    fn test_resolve_none_when_absent() {
        let dir = TempDir::new().unwrap();
        assert!(resolve_category_dir(dir.path(), "03001627", "Chair", None).is_none());
    }
}
