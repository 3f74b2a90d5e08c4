use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Host-supplied lookup for resources bundled with the application.
pub trait AssetSource: Send + Sync {
    /// Open the named bundled resource for reading.
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send>>;
}

/// Asset source backed by a plain directory.
#[derive(Clone, Debug)]
pub struct DirSource {
    base: PathBuf,
}

impl DirSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl AssetSource for DirSource {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send>> {
        let file = File::open(self.base.join(name))?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_existing_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Minetest.zip"), b"PK").unwrap();

        let source = DirSource::new(dir.path());
        let mut contents = Vec::new();
        source
            .open("Minetest.zip")
            .unwrap()
            .read_to_end(&mut contents)
            .unwrap();

        assert_eq!(contents, b"PK");
    }

    #[test]
    fn missing_asset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        assert!(source.open("absent.zip").is_err());
    }
}
