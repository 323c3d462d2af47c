use std::fs;
use std::path::PathBuf;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::{SubsetError, SubsetResult};
use crate::fs_ops::copy_file;
use crate::modes::ModeCopier;
use crate::paths::find_dataset_root;
use crate::synset_map::{SynsetMap, SYNSET_MANIFEST};

/// Create a CPU-friendly subset of a ShapeNet-style segmentation dataset.
#[derive(Parser, Debug, Clone)]
#[command(name = "shapenet-subset")]
pub struct SubsetOptions {
    /// Path to the ShapeNet dataset root
    #[arg(long, default_value = "shapenet-core-seg")]
    pub data_root: PathBuf,

    /// Output directory for the subset
    #[arg(long, default_value = "subset")]
    pub out: PathBuf,

    /// Maximum samples per requested category
    #[arg(long, default_value_t = 120)]
    pub samples_per_class: usize,

    /// Random seed for deterministic sampling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Category names, matched case-insensitively against the manifest
    #[arg(
        long,
        num_args = 1..,
        default_values = ["Airplane", "Chair", "Table", "Lamp", "Car", "Mug"]
    )]
    pub categories: Vec<String>,

    /// Overwrite an existing output directory
    #[arg(long)]
    pub force: bool,
}

/// One line of the final summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub category: String,
    pub synset: String,
    pub copied: usize,
}

/// Run the whole subset build and return the per-category summary.
///
/// Fatal errors abort immediately; categories already processed have been
/// copied into the output by then and are left in place.
pub fn run(opts: &SubsetOptions) -> SubsetResult<Vec<SummaryRow>> {
    let dataset_root = find_dataset_root(&opts.data_root)?;
    let synset_path = dataset_root.join(SYNSET_MANIFEST);
    let synsets = SynsetMap::load(&synset_path)?;

    if opts.out.exists() {
        if !opts.force {
            return Err(SubsetError::OutputExists(opts.out.clone()));
        }
        info!("Removing existing output directory {:?}", opts.out);
        fs::remove_dir_all(&opts.out)?;
    }
    fs::create_dir_all(&opts.out)?;
    copy_file(&synset_path, &opts.out.join(SYNSET_MANIFEST))?;

    let mut rng = StdRng::seed_from_u64(opts.seed);
    let mut copier = ModeCopier::detect(&dataset_root)?;
    info!("Copy mode: {}", copier.mode().as_str());

    let mut summary = Vec::new();
    for (class_index, name) in opts.categories.iter().enumerate() {
        let synset = synsets
            .get(name)
            .ok_or_else(|| SubsetError::UnknownCategory(name.clone()))?
            .to_string();
        let copied = copier.copy_category(
            &dataset_root,
            &opts.out,
            name,
            &synset,
            class_index,
            opts.samples_per_class,
            &mut rng,
        )?;
        summary.push(SummaryRow {
            category: name.clone(),
            synset,
            copied,
        });
    }
    copier.finish(&opts.out)?;

    info!(
        "Subset written to {:?}: {} categories, {} samples",
        opts.out,
        summary.len(),
        summary.iter().map(|r| r.copied).sum::<usize>()
    );
    Ok(summary)
}
