use std::fs;
use std::path::Path;
use rand::Rng;
use tracing::{debug, info};

use crate::error::{SubsetError, SubsetResult};
use crate::fs_ops::{copy_file, list_visible_sorted};
use crate::paths::resolve_category_dir;
use crate::sampler::sample_bounded;

/// Copy a bounded sample of one category's point files together with their
/// same-named label files into `out/points/<synset>/` and
/// `out/points_label/<synset>/`. A missing label file skips that one label
/// copy; the points file is still taken.
pub fn copy_category<R: Rng>(
    dataset_root: &Path,
    out_root: &Path,
    name: &str,
    synset: &str,
    samples: usize,
    rng: &mut R,
) -> SubsetResult<usize> {
    let points_dir = resolve_category_dir(dataset_root, synset, name, Some("points"))
        .filter(|p| p.is_dir())
        .ok_or_else(|| SubsetError::MissingSourceDir {
            category: name.to_string(),
            kind: "points".to_string(),
        })?;
    let labels_dir = resolve_category_dir(dataset_root, synset, name, Some("points_label"))
        .filter(|p| p.is_dir())
        .ok_or_else(|| SubsetError::MissingSourceDir {
            category: name.to_string(),
            kind: "points_label".to_string(),
        })?;

    let files: Vec<_> = list_visible_sorted(&points_dir)?
        .into_iter()
        .filter(|p| p.is_file())
        .collect();
    let chosen = sample_bounded(&files, samples, rng);
    info!(
        "Category {}: picking {} of {} point files",
        name,
        chosen.len(),
        files.len()
    );

    let out_points = out_root.join("points").join(synset);
    let out_labels = out_root.join("points_label").join(synset);
    fs::create_dir_all(&out_points)?;
    fs::create_dir_all(&out_labels)?;

    for file in &chosen {
        let file_name = file.file_name().expect("listed file has a name");
        copy_file(file, &out_points.join(file_name))?;

        let label_file = labels_dir.join(file_name);
        if label_file.exists() {
            copy_file(&label_file, &out_labels.join(file_name))?;
        } else {
            debug!("No label for {:?}, skipping", file_name);
        }
    }

    Ok(chosen.len())
}
