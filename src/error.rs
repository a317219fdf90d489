//! Error types for zip-generator

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(String),

    /// Two or more input files share a base name, so their archive entry
    /// names would collide. Carries every colliding source path, in input
    /// order, including the first occurrence.
    #[error("duplicate base names among input files: {}", join_paths(.filepaths))]
    FileBasenameDuplication { filepaths: Vec<PathBuf> },

    /// An input file did not exist when the archive reached it.
    #[error("input file does not exist: {}", .0.display())]
    NotExistingFile(PathBuf),

    /// The destination's parent directory does not exist.
    #[error("destination path is inside a directory that does not exist: {}", .0.display())]
    NotExistingDir(PathBuf),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

/// Shared formatting for path-list diagnostics.
fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplication_message_lists_every_path() {
        let err = Error::FileBasenameDuplication {
            filepaths: vec![PathBuf::from("foo/data"), PathBuf::from("bar/data")],
        };
        let message = err.to_string();
        assert!(message.contains("foo/data"));
        assert!(message.contains("bar/data"));
    }

    #[test]
    fn test_missing_file_message_names_the_path() {
        let err = Error::NotExistingFile(PathBuf::from("gone/file.txt"));
        assert!(err.to_string().contains("gone/file.txt"));
    }
}
