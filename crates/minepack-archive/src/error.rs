use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("archive is corrupted or not a zip file")]
    Corrupted,

    #[error("entry path is invalid")]
    InvalidPath,

    #[error("entry '{}' escapes the extraction root (resolves to '{}')", .entry.display(), .resolved.display())]
    ZipSlip { entry: PathBuf, resolved: PathBuf },

    #[error("failed to create directory '{}': {source}", .path.display())]
    DirectoryCreation { path: PathBuf, source: io::Error },

    #[error("failed to extract '{}': {source}", .path.display())]
    Extraction { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
