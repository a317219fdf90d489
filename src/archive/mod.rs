//! Archive assembly and the three delivery modes

mod zip;

use crate::entry::{basename_duplicated_paths, resolve_entries};
use crate::{Error, Result};
use std::fs;
use std::io::{Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Shared core for all delivery modes: resolve entries, refuse base-name
/// collisions, then assemble the ZIP buffer. Validation lives here so it is
/// defined exactly once.
fn build_buffer<P: AsRef<Path>>(paths: &[P], password: Option<&str>) -> Result<Vec<u8>> {
    let entries = resolve_entries(paths);

    let duplications = basename_duplicated_paths(&entries);
    if !duplications.is_empty() {
        return Err(Error::FileBasenameDuplication {
            filepaths: duplications,
        });
    }

    zip::write_zip_buffer(&entries, password)
}

/// Build a ZIP archive in memory and return its raw bytes.
///
/// Each input file is stored under its base name; supplying a password
/// produces a traditionally encrypted (ZipCrypto) archive.
///
/// # Errors
///
/// Fails with [`Error::FileBasenameDuplication`] when two or more inputs
/// share a base name, and with [`Error::NotExistingFile`] when an input
/// path does not exist. No buffer is returned on either path.
pub fn get_zip_buffer<P: AsRef<Path>>(paths: &[P], password: Option<&str>) -> Result<Vec<u8>> {
    let buffer = build_buffer(paths, password)?;
    info!(
        "Assembled ZIP buffer of {} bytes from {} files",
        buffer.len(),
        paths.len()
    );
    Ok(buffer)
}

/// Build a ZIP archive and hand it back as a named temporary file.
///
/// The handle is rewound to the start, ready for reading. The backing file is
/// removed when the handle is dropped; use [`NamedTempFile::persist`] or
/// [`NamedTempFile::keep`] to make it outlive the handle.
///
/// Same failure modes as [`get_zip_buffer`].
pub fn get_zip_tempfile<P: AsRef<Path>>(
    paths: &[P],
    password: Option<&str>,
) -> Result<NamedTempFile> {
    let buffer = build_buffer(paths, password)?;

    let mut tempfile = NamedTempFile::new()?;
    tempfile.write_all(&buffer)?;
    tempfile.rewind()?;

    info!(
        "Wrote ZIP archive of {} bytes to temporary file {:?}",
        buffer.len(),
        tempfile.path()
    );
    Ok(tempfile)
}

/// Build a ZIP archive and write it to `zip_path`, creating or overwriting
/// the file. Returns the number of bytes written.
///
/// # Errors
///
/// Fails with [`Error::NotExistingDir`] when the parent directory of
/// `zip_path` does not exist; this is checked before any input file is
/// touched. Otherwise the failure modes of [`get_zip_buffer`] apply.
pub fn zip_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    paths: &[P],
    zip_path: Q,
    password: Option<&str>,
) -> Result<u64> {
    let zip_path = zip_path.as_ref();

    // A bare file name has an empty parent, which means the current directory.
    let parent = match zip_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(Error::NotExistingDir(zip_path.to_path_buf()));
    }

    let buffer = build_buffer(paths, password)?;
    fs::write(zip_path, &buffer)?;

    info!(
        "Wrote ZIP archive of {} bytes to {:?}",
        buffer.len(),
        zip_path
    );
    Ok(buffer.len() as u64)
}
