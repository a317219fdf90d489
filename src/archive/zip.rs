//! ZIP stream assembly over the zip crate

use crate::entry::FileEntry;
use crate::{Error, Result};
use std::fs;
use std::io::{self, Cursor, Write};
use tracing::debug;
use zip::unstable::write::FileOptionsExt;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

/// Write the resolved entries into a fresh in-memory ZIP stream and return
/// the finished buffer.
///
/// Entries are written in input order. A missing source file aborts the whole
/// assembly; nothing written so far escapes this function. Entry timestamps
/// are pinned to the DOS epoch so identical inputs produce identical bytes.
pub(crate) fn write_zip_buffer(entries: &[FileEntry], password: Option<&str>) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());
    let options = match password {
        Some(password) => options.with_deprecated_encryption(password.as_bytes()),
        None => options,
    };

    for entry in entries {
        debug!("Adding file to ZIP: {:?} as {}", entry.filepath, entry.entry_name);

        writer.start_file(entry.entry_name.as_str(), options.clone())?;

        // Read straight away instead of probing exists() first, so a file
        // that vanishes between the two still reports as missing.
        let data = fs::read(&entry.filepath).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                Error::NotExistingFile(entry.filepath.clone())
            } else {
                Error::Io(err)
            }
        })?;
        writer.write_all(&data)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::resolve_entries;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    #[test]
    fn test_buffer_round_trips_through_zip_reader() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, b"Test content")?;

        let entries = resolve_entries(&[&file_path]);
        let buffer = write_zip_buffer(&entries, None)?;

        let mut archive = ZipArchive::new(Cursor::new(buffer))?;
        let mut file = archive.by_name("test.txt")?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        assert_eq!(contents, "Test content");

        Ok(())
    }

    #[test]
    fn test_missing_source_aborts_without_buffer() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let present = temp_dir.path().join("present.txt");
        fs::write(&present, b"here")?;
        let missing = temp_dir.path().join("missing.txt");

        let entries = resolve_entries(&[present, missing.clone()]);
        let result = write_zip_buffer(&entries, None);

        match result {
            Err(Error::NotExistingFile(path)) => assert_eq!(path, missing),
            other => panic!("expected NotExistingFile, got {:?}", other.map(|b| b.len())),
        }

        Ok(())
    }

    #[test]
    fn test_identical_inputs_produce_identical_bytes() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("stable.txt");
        fs::write(&file_path, b"same bytes every time")?;

        let entries = resolve_entries(&[&file_path]);
        let first = write_zip_buffer(&entries, None)?;
        let second = write_zip_buffer(&entries, None)?;
        assert_eq!(first, second);

        Ok(())
    }
}
