use std::path::PathBuf;

/// Result type for subset operations
pub type SubsetResult<T> = Result<T, SubsetError>;

/// Error types for building a dataset subset
#[derive(Debug)]
pub enum SubsetError {
    /// The synset manifest was not found at the root or exactly one level down
    ManifestNotFound(PathBuf),
    /// More than one subdirectory one level down carries a synset manifest
    AmbiguousRoot { root: PathBuf, candidates: usize },
    /// A requested category does not appear in the synset manifest
    UnknownCategory(String),
    /// A points/labels/category directory required for a category is absent
    MissingSourceDir { category: String, kind: String },
    /// The output directory already exists and --force was not given
    OutputExists(PathBuf),
    /// A split manifest could not be parsed
    Manifest { path: PathBuf, source: serde_json::Error },
    IoError(std::io::Error),
}

impl std::fmt::Display for SubsetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubsetError::ManifestNotFound(root) => {
                write!(f, "synsetoffset2category.txt not found under {:?}", root)
            }
            SubsetError::AmbiguousRoot { root, candidates } => write!(
                f,
                "{} candidate dataset directories under {:?}, expected exactly one",
                candidates, root
            ),
            SubsetError::UnknownCategory(name) => write!(
                f,
                "Category '{}' not found in synsetoffset2category.txt",
                name
            ),
            SubsetError::MissingSourceDir { category, kind } => {
                write!(f, "{} directory not found for category {}", kind, category)
            }
            SubsetError::OutputExists(path) => write!(
                f,
                "Output directory {:?} already exists. Use --force to overwrite.",
                path
            ),
            SubsetError::Manifest { path, source } => {
                write!(f, "Failed to parse split manifest {:?}: {}", path, source)
            }
            SubsetError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SubsetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubsetError::Manifest { source, .. } => Some(source),
            SubsetError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SubsetError {
    fn from(error: std::io::Error) -> Self {
        SubsetError::IoError(error)
    }
}
