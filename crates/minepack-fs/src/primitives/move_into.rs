use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::primitives::copy_dir_all;
use crate::{Error, Result};

/// Move the directory `src` into `dest_dir`, keeping its name.
///
/// A same-named entry under `dest_dir` is replaced. A rename across
/// filesystems falls back to copy-then-delete. Returns the new location.
pub fn move_dir_into(src: impl AsRef<Path>, dest_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let src = src.as_ref();
    let dest_dir = dest_dir.as_ref();
    let dest = displaced_destination(src, dest_dir)?;

    match fs::rename(src, &dest) {
        Ok(()) => Ok(dest),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            copy_dir_all(src, &dest)?;
            remove_tree(src)?;
            Ok(dest)
        }
        Err(e) => Err(Error::Rename {
            from: src.to_path_buf(),
            to: dest,
            source: e,
        }),
    }
}

/// Move the file `src` into `dest_dir`, keeping its name.
///
/// Overwrite and cross-filesystem semantics match [`move_dir_into`].
pub fn move_file_into(src: impl AsRef<Path>, dest_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let src = src.as_ref();
    let dest_dir = dest_dir.as_ref();
    let dest = displaced_destination(src, dest_dir)?;

    match fs::rename(src, &dest) {
        Ok(()) => Ok(dest),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(src, &dest).map_err(|e| Error::Write {
                path: dest.clone(),
                source: e,
            })?;
            fs::remove_file(src).map_err(|e| Error::Remove {
                path: src.to_path_buf(),
                source: e,
            })?;
            Ok(dest)
        }
        Err(e) => Err(Error::Rename {
            from: src.to_path_buf(),
            to: dest,
            source: e,
        }),
    }
}

/// Delete `path` and, for directories, everything below it.
pub fn remove_tree(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| Error::Remove {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve the in-`dest_dir` destination for `src`, clearing any existing
/// same-named entry and creating `dest_dir` if missing.
fn displaced_destination(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = src.file_name().ok_or_else(|| Error::NoFileName {
        path: src.to_path_buf(),
    })?;

    if !dest_dir.exists() {
        fs::create_dir_all(dest_dir).map_err(|e| Error::Write {
            path: dest_dir.to_path_buf(),
            source: e,
        })?;
    }

    let dest = dest_dir.join(name);
    if dest.exists() {
        remove_tree(&dest)?;
    }
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn moves_directory_and_keeps_name() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("worlds");
        let dest_dir = dir.path().join("target");
        fs::create_dir_all(src.join("alpha")).unwrap();
        fs::write(src.join("alpha/world.mt"), "gameid = devtest").unwrap();

        let moved = move_dir_into(&src, &dest_dir).unwrap();

        assert_eq!(moved, dest_dir.join("worlds"));
        assert!(!src.exists());
        assert_eq!(
            fs::read(dest_dir.join("worlds/alpha/world.mt")).unwrap(),
            b"gameid = devtest"
        );
    }

    #[test]
    fn replaces_existing_directory() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("mods");
        let dest_dir = dir.path().join("target");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("new.txt"), "new").unwrap();
        fs::create_dir_all(dest_dir.join("mods")).unwrap();
        fs::write(dest_dir.join("mods/old.txt"), "old").unwrap();

        move_dir_into(&src, &dest_dir).unwrap();

        assert!(!dest_dir.join("mods/old.txt").exists());
        assert_eq!(fs::read(dest_dir.join("mods/new.txt")).unwrap(), b"new");
    }

    #[test]
    fn moves_file_with_overwrite() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("minetest.conf");
        let dest_dir = dir.path().join("target");
        fs::create_dir_all(&dest_dir).unwrap();
        fs::write(&src, "keepInventory = true").unwrap();
        fs::write(dest_dir.join("minetest.conf"), "stale").unwrap();

        move_file_into(&src, &dest_dir).unwrap();

        assert!(!src.exists());
        assert_eq!(
            fs::read(dest_dir.join("minetest.conf")).unwrap(),
            b"keepInventory = true"
        );
    }

    #[test]
    fn creates_missing_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("textures");
        fs::create_dir_all(&src).unwrap();

        let dest_dir = dir.path().join("deep/target");
        move_dir_into(&src, &dest_dir).unwrap();

        assert!(dest_dir.join("textures").is_dir());
    }

    #[test]
    fn remove_tree_handles_files_and_directories() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        let tree = dir.path().join("tree");
        fs::write(&file, "x").unwrap();
        fs::create_dir_all(tree.join("nested")).unwrap();

        remove_tree(&file).unwrap();
        remove_tree(&tree).unwrap();

        assert!(!file.exists());
        assert!(!tree.exists());
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempdir().unwrap();
        let result = move_dir_into(dir.path().join("absent"), dir.path().join("target"));
        assert!(matches!(result, Err(Error::Rename { .. })));
    }
}
