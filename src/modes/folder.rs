use std::fs;
use std::path::Path;
use rand::Rng;
use tracing::info;

use crate::error::{SubsetError, SubsetResult};
use crate::fs_ops::{copy_recursive, list_visible_sorted};
use crate::paths::resolve_category_dir;
use crate::sampler::sample_bounded;

/// Copy a bounded sample of one category's entries (files or whole model
/// directories) into `out/<synset>/`. Fallback layout for distributions
/// without split manifests or a points/points_label pair.
pub fn copy_category<R: Rng>(
    dataset_root: &Path,
    out_root: &Path,
    name: &str,
    synset: &str,
    samples: usize,
    rng: &mut R,
) -> SubsetResult<usize> {
    let category_dir = resolve_category_dir(dataset_root, synset, name, None)
        .filter(|p| p.is_dir())
        .ok_or_else(|| SubsetError::MissingSourceDir {
            category: name.to_string(),
            kind: "category".to_string(),
        })?;

    let entries = list_visible_sorted(&category_dir)?;
    let chosen = sample_bounded(&entries, samples, rng);
    info!(
        "Category {}: picking {} of {} entries",
        name,
        chosen.len(),
        entries.len()
    );

    let out_cat = out_root.join(synset);
    fs::create_dir_all(&out_cat)?;

    for entry in &chosen {
        let entry_name = entry.file_name().expect("listed entry has a name");
        copy_recursive(entry, &out_cat.join(entry_name))?;
    }

    Ok(chosen.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_copies_model_directories_recursively() {
        let dataset = TempDir::new().unwrap();
        let cat = dataset.path().join("02691156");
        for model in ["m0", "m1", "m2"] {
            fs::create_dir_all(cat.join(model)).unwrap();
            fs::write(cat.join(model).join("model.pts"), model).unwrap();
        }
        let out = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let copied = copy_category(
            dataset.path(),
            out.path(),
            "Airplane",
            "02691156",
            2,
            &mut rng,
        )
        .unwrap();
        assert_eq!(copied, 2);
        let kept: Vec<_> = fs::read_dir(out.path().join("02691156"))
            .unwrap()
            .map(|e| e.unwrap())
            .collect();
        assert_eq!(kept.len(), 2);
        for entry in kept {
            assert!(entry.path().join("model.pts").exists());
        }
    }

    #[test]
    fn test_plain_files_are_copied_too() {
        let dataset = TempDir::new().unwrap();
        let cat = dataset.path().join("03001627");
        fs::create_dir_all(&cat).unwrap();
        fs::write(cat.join("a.pts"), b"a").unwrap();
        let out = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let copied =
            copy_category(dataset.path(), out.path(), "Chair", "03001627", 4, &mut rng).unwrap();
        assert_eq!(copied, 1);
        assert!(out.path().join("03001627").join("a.pts").exists());
    }

    #[test]
    fn test_missing_category_dir_is_fatal() {
        let dataset = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let err = copy_category(dataset.path(), out.path(), "Chair", "03001627", 4, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            SubsetError::MissingSourceDir { category, .. } if category == "Chair"
        ));
    }
}
