use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::Path;

use crate::entry::{ArchiveReport, Entry, EntryKind};
use crate::error::{Error, Result};
use crate::options::{COPY_BUFFER_SIZE, ExtractOptions, Progress};
use crate::sanitize::sanitize_path;

/// Stream a zip archive into `destination`, entry by entry, in archive order.
///
/// Directory entries are created (with missing ancestors) before the
/// processed counter is bumped; file entries bump the counter first and
/// are then streamed through a fixed-size buffer, overwriting any existing
/// file. After every entry the `on_progress` callback observes the updated
/// counter. The first error aborts the loop.
pub fn extract<R: Read + Seek>(
    reader: R,
    destination: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<ArchiveReport> {
    let destination = destination.as_ref();
    let mut archive = zip::ZipArchive::new(reader).map_err(|_| Error::Corrupted)?;

    let mut entries = Vec::new();
    let mut total_bytes = 0u64;
    let mut processed = 0usize;

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).map_err(|_| Error::Corrupted)?;

        let raw_path = match file.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => return Err(Error::InvalidPath),
        };
        let target = sanitize_path(&raw_path, destination)?;

        let entry = if file.is_dir() {
            ensure_directory(&target)?;
            processed += 1;
            Entry {
                path: raw_path,
                size: 0,
                kind: EntryKind::Directory,
            }
        } else {
            processed += 1;
            let written = write_file(&mut file, &target)?;
            total_bytes += written;
            Entry {
                path: raw_path,
                size: written,
                kind: EntryKind::File,
            }
        };

        if let Some(callback) = &options.on_progress {
            callback(Progress {
                entries_processed: processed,
                total_entries: options.expected_total_entries,
                current_entry: Some(entry.path.clone()),
            });
        }

        entries.push(entry);
    }

    Ok(ArchiveReport {
        entry_count: processed,
        total_bytes,
        entries,
    })
}

fn ensure_directory(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| Error::DirectoryCreation {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_file<R: Read>(reader: &mut R, target: &Path) -> Result<u64> {
    if let Some(parent) = target.parent() {
        if !parent.exists() {
            ensure_directory(parent)?;
        }
    }

    let mut out = File::create(target).map_err(|e| Error::Extraction {
        path: target.to_path_buf(),
        source: e,
    })?;

    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut written = 0u64;
    loop {
        let n = reader.read(&mut buffer).map_err(|e| Error::Extraction {
            path: target.to_path_buf(),
            source: e,
        })?;
        if n == 0 {
            break;
        }
        out.write_all(&buffer[..n]).map_err(|e| Error::Extraction {
            path: target.to_path_buf(),
            source: e,
        })?;
        written += n as u64;
    }

    Ok(written)
}
