use std::io::{Read, Seek};

use crate::error::{Error, Result};

/// Count the entries in a zip archive, directories included.
///
/// The count is the fixed denominator for percentage reporting and is
/// computed once, before extraction starts.
pub fn count_entries<R: Read + Seek>(reader: R) -> Result<usize> {
    let archive = zip::ZipArchive::new(reader).map_err(|_| Error::Corrupted)?;
    Ok(archive.len())
}
