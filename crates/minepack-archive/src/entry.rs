use std::path::PathBuf;

/// Metadata for one processed archive entry.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Path as recorded in the archive, relative to the extraction root.
    pub path: PathBuf,
    /// Uncompressed size in bytes; zero for directories.
    pub size: u64,
    pub kind: EntryKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl Entry {
    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

/// Summary of a completed extraction.
#[derive(Clone, Debug)]
pub struct ArchiveReport {
    pub entry_count: usize,
    pub total_bytes: u64,
    pub entries: Vec<Entry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_kind_predicates() {
        let file = Entry {
            path: PathBuf::from("minetest.conf"),
            size: 12,
            kind: EntryKind::File,
        };
        let dir = Entry {
            path: PathBuf::from("worlds/"),
            size: 0,
            kind: EntryKind::Directory,
        };

        assert!(file.is_file());
        assert!(!file.is_directory());
        assert!(dir.is_directory());
        assert!(!dir.is_file());
    }
}
