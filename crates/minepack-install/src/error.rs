use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to stage bundled asset '{name}': {source}")]
    Stage { name: String, source: io::Error },

    #[error("failed to migrate legacy user data: {source}")]
    Migrate {
        #[from]
        source: minepack_fs::Error,
    },

    #[error("failed to extract staged archive: {source}")]
    Extract {
        #[from]
        source: minepack_archive::Error,
    },

    #[error("failed to remove staged archive: {source}")]
    Cleanup { source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
