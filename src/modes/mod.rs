//! The three mutually exclusive copy strategies, selected once at startup
//! by probing the resolved dataset root and dispatched through a single
//! `copy_category` interface.

mod folder;
mod points;
mod split;

use std::path::Path;
use rand::Rng;
use tracing::debug;

use crate::error::SubsetResult;
use split::SplitManifestCopier;

/// Which dataset layout a run operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    /// train/val/test JSON manifests at the dataset root
    SplitManifest,
    /// top-level points/ and points_label/ directories
    PointsPair,
    /// one folder per category
    GenericFolder,
}

impl CopyMode {
    pub fn as_str(&self) -> &str {
        match self {
            CopyMode::SplitManifest => "split-manifest",
            CopyMode::PointsPair => "points-pair",
            CopyMode::GenericFolder => "generic-folder",
        }
    }
}

/// Mode-specific state dispatching per-category copies.
pub enum ModeCopier {
    SplitManifest(SplitManifestCopier),
    PointsPair,
    GenericFolder,
}

impl ModeCopier {
    /// Probe the dataset root and pick the applicable strategy.
    ///
    /// Split manifests take priority; a points/points_label pair comes next;
    /// anything else falls back to generic per-category folders.
    pub fn detect(dataset_root: &Path) -> SubsetResult<ModeCopier> {
        if let Some(copier) = SplitManifestCopier::try_load(dataset_root)? {
            return Ok(ModeCopier::SplitManifest(copier));
        }
        let points_pair = dataset_root.join("points").is_dir()
            && dataset_root.join("points_label").is_dir();
        if points_pair {
            Ok(ModeCopier::PointsPair)
        } else {
            debug!("No split manifests or points pair, using folder layout");
            Ok(ModeCopier::GenericFolder)
        }
    }

    pub fn mode(&self) -> CopyMode {
        match self {
            ModeCopier::SplitManifest(_) => CopyMode::SplitManifest,
            ModeCopier::PointsPair => CopyMode::PointsPair,
            ModeCopier::GenericFolder => CopyMode::GenericFolder,
        }
    }

    /// Copy one category's bounded sample, returning the number of samples
    /// actually copied.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_category<R: Rng>(
        &mut self,
        dataset_root: &Path,
        out_root: &Path,
        name: &str,
        synset: &str,
        class_index: usize,
        samples: usize,
        rng: &mut R,
    ) -> SubsetResult<usize> {
        match self {
            ModeCopier::SplitManifest(copier) => {
                copier.copy_category(dataset_root, out_root, name, class_index, samples, rng)
            }
            ModeCopier::PointsPair => {
                points::copy_category(dataset_root, out_root, name, synset, samples, rng)
            }
            ModeCopier::GenericFolder => {
                folder::copy_category(dataset_root, out_root, name, synset, samples, rng)
            }
        }
    }

    /// Per-mode finalization after all categories are processed. Only the
    /// split-manifest mode has work here: writing the output manifests.
    pub fn finish(&self, out_root: &Path) -> SubsetResult<()> {
        match self {
            ModeCopier::SplitManifest(copier) => copier.write_manifests(out_root),
            ModeCopier::PointsPair | ModeCopier::GenericFolder => Ok(()),
        }
    }
}
