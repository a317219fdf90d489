//! Zip Generator - package named files into a single ZIP archive
//!
//! This library collects a list of input files into one ZIP archive, optionally
//! protected with a traditional (ZipCrypto) password. Each file is stored under
//! its base name, so the inputs must not share base names. The archive can be
//! delivered as an in-memory buffer, a temporary file, or a file on disk.

pub mod archive;
pub mod entry;
pub mod error;

pub use error::{Error, Result};

// Re-export commonly used types
pub use archive::{get_zip_buffer, get_zip_tempfile, zip_archive};
pub use entry::FileEntry;
