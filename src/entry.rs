//! Resolution of input paths into archive entries

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An input file paired with the name it will carry inside the archive.
///
/// The entry name is the final component of the input path, so files from
/// different directories can be archived side by side as long as their base
/// names differ. Constructed once per input path and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Name of the entry inside the archive (the extracted file name)
    pub entry_name: String,
    /// Caller-supplied location of the source file
    pub filepath: PathBuf,
}

impl FileEntry {
    fn new(filepath: &Path) -> Self {
        // Paths without a final component (e.g. ".." or "/") fall back to the
        // whole path string; duplicate detection still applies to them.
        let entry_name = filepath.file_name().map_or_else(
            || filepath.to_string_lossy().into_owned(),
            |name| name.to_string_lossy().into_owned(),
        );

        Self {
            entry_name,
            filepath: filepath.to_path_buf(),
        }
    }
}

/// Resolve input paths into [`FileEntry`] records, preserving input order.
///
/// Pure name derivation: no filesystem access, no failure modes. Existence
/// and collision checks happen later in the pipeline.
pub fn resolve_entries<P: AsRef<Path>>(paths: &[P]) -> Vec<FileEntry> {
    paths
        .iter()
        .map(|path| FileEntry::new(path.as_ref()))
        .collect()
}

/// Return the source paths of every entry whose name occurs more than once.
///
/// All occurrences are reported, including the first, in input order. Once
/// two files map to the same extracted name there is no sensible extraction
/// semantics, so the caller refuses instead of silently overwriting.
pub(crate) fn basename_duplicated_paths(entries: &[FileEntry]) -> Vec<PathBuf> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.entry_name.as_str()).or_insert(0) += 1;
    }

    entries
        .iter()
        .filter(|entry| counts[entry.entry_name.as_str()] > 1)
        .map(|entry| entry.filepath.clone())
        .collect()
}
