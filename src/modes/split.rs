use std::path::Path;
use rand::Rng;
use tracing::{debug, info};

use crate::error::SubsetResult;
use crate::fs_ops::copy_file;
use crate::sampler::{proportional_counts, sample_bounded};
use crate::split_manifest::{load_split, write_split, Split, SplitEntry};

/// Copier for pre-split datasets carrying train/val/test JSON manifests.
///
/// Holds the three source manifests for the whole run and accumulates the
/// selected, relabeled entries so the output manifests can be written once
/// after every category has been processed.
pub struct SplitManifestCopier {
    splits: [Vec<SplitEntry>; 3],
    outputs: [Vec<SplitEntry>; 3],
}

impl SplitManifestCopier {
    /// Load all three split manifests from the dataset root. Returns `None`
    /// when any of them is absent, in which case another copy mode applies.
    pub fn try_load(dataset_root: &Path) -> SubsetResult<Option<Self>> {
        let mut splits: [Vec<SplitEntry>; 3] = Default::default();
        for (idx, split) in Split::ALL.iter().enumerate() {
            match load_split(dataset_root, *split)? {
                Some(entries) => splits[idx] = entries,
                None => return Ok(None),
            }
        }
        Ok(Some(SplitManifestCopier {
            splits,
            outputs: Default::default(),
        }))
    }

    /// Select and copy one category's entries.
    ///
    /// The per-category budget is capped at what all three splits hold
    /// together, apportioned across splits by largest remainder, then each
    /// split is bounded-sampled. Every selected entry is relabeled with the
    /// output class index before its point and segmentation files are copied,
    /// preserving their relative paths under the output root.
    pub fn copy_category<R: Rng>(
        &mut self,
        dataset_root: &Path,
        out_root: &Path,
        name: &str,
        class_index: usize,
        samples: usize,
        rng: &mut R,
    ) -> SubsetResult<usize> {
        let per_split: Vec<Vec<SplitEntry>> = self
            .splits
            .iter()
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.class_name() == name)
                    .cloned()
                    .collect()
            })
            .collect();

        let available: Vec<usize> = per_split.iter().map(|v| v.len()).collect();
        let total_available: usize = available.iter().sum();
        let total_pick = samples.min(total_available);
        let counts = proportional_counts(&available, total_pick);
        debug!(
            "Category {}: {} available across splits {:?}, taking {:?}",
            name, total_available, available, counts
        );

        let mut chosen_total = 0;
        for (idx, entries) in per_split.iter().enumerate() {
            let pick = counts[idx];
            if pick == 0 {
                continue;
            }
            let selected = sample_bounded(entries, pick, rng);
            for entry in &selected {
                let relabeled = entry.relabeled(class_index, name);
                copy_file(
                    &dataset_root.join(relabeled.point_path()),
                    &out_root.join(relabeled.point_path()),
                )?;
                copy_file(
                    &dataset_root.join(relabeled.seg_path()),
                    &out_root.join(relabeled.seg_path()),
                )?;
                self.outputs[idx].push(relabeled);
            }
            chosen_total += selected.len();
        }

        info!(
            "Category {}: {} of {} split entries selected",
            name, chosen_total, total_available
        );
        Ok(chosen_total)
    }

    /// Write the output split manifests containing only the selected,
    /// relabeled entries.
    pub fn write_manifests(&self, out_root: &Path) -> SubsetResult<()> {
        for (idx, split) in Split::ALL.iter().enumerate() {
            write_split(out_root, *split, &self.outputs[idx])?;
        }
        Ok(())
    }
}
