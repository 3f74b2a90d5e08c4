use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to move '{}' to '{}': {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("failed to remove '{}': {source}", .path.display())]
    Remove { path: PathBuf, source: io::Error },

    #[error("'{}' has no file name", .path.display())]
    NoFileName { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
