use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::SubsetResult;

/// Manifest file mapping category names to synset ids, shipped at the
/// dataset root of every ShapeNet segmentation distribution.
pub const SYNSET_MANIFEST: &str = "synsetoffset2category.txt";

/// Lookup table from lower-cased category name to synset id,
/// loaded once from the synset manifest and immutable thereafter.
pub struct SynsetMap {
    mapping: HashMap<String, String>,
}

impl SynsetMap {
    /// Parse the synset manifest at `path`.
    ///
    /// Each non-empty line holds a category name followed by its synset id,
    /// whitespace-delimited; the last token is the id and everything before
    /// it is the name. Lines with fewer than two tokens are skipped.
    /// Duplicate names keep the last occurrence.
    pub fn load(path: &Path) -> SubsetResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut mapping = HashMap::new();

        for line in content.lines() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 2 {
                continue;
            }
            let synset = tokens[tokens.len() - 1];
            let name = tokens[..tokens.len() - 1].join(" ");
            mapping.insert(name.to_lowercase(), synset.to_string());
        }

        info!("Loaded {} categories from {:?}", mapping.len(), path);
        debug!("Synset map: {:?}", mapping);

        Ok(SynsetMap { mapping })
    }

    /// Look up a synset id by category name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.mapping.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
