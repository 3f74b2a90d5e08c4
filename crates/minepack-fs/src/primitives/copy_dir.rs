use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Copy the contents of `src` into `dest`, recursively.
///
/// `dest` and missing ancestors are created. Symlinks are recreated as
/// symlinks rather than followed.
pub fn copy_dir_all(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    if !dest.exists() {
        fs::create_dir_all(dest).map_err(|e| Error::Write {
            path: dest.to_path_buf(),
            source: e,
        })?;
    }

    let read_dir = fs::read_dir(src).map_err(|e| Error::Read {
        path: src.to_path_buf(),
        source: e,
    })?;

    for entry in read_dir {
        let entry = entry.map_err(|e| Error::Read {
            path: src.to_path_buf(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| Error::Read {
            path: entry.path(),
            source: e,
        })?;

        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_all(&src_path, &dest_path)?;
        } else if file_type.is_symlink() {
            let target = fs::read_link(&src_path).map_err(|e| Error::Read {
                path: src_path.clone(),
                source: e,
            })?;
            recreate_symlink(&target, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(|e| Error::Write {
                path: dest_path,
                source: e,
            })?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn recreate_symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).map_err(|e| Error::Write {
        path: link.to_path_buf(),
        source: e,
    })
}

#[cfg(windows)]
fn recreate_symlink(target: &Path, link: &Path) -> Result<()> {
    let result = if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    };
    result.map_err(|e| Error::Write {
        path: link.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_nested_tree() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("subdir")).unwrap();
        fs::write(src.join("file.txt"), "data").unwrap();
        fs::write(src.join("subdir/nested.txt"), "nested").unwrap();

        copy_dir_all(&src, &dest).unwrap();

        assert_eq!(fs::read(dest.join("file.txt")).unwrap(), b"data");
        assert_eq!(fs::read(dest.join("subdir/nested.txt")).unwrap(), b"nested");
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempdir().unwrap();
        let result = copy_dir_all(dir.path().join("absent"), dir.path().join("dest"));
        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn recreates_symlinks() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("real.txt"), "real").unwrap();
        std::os::unix::fs::symlink("real.txt", src.join("link.txt")).unwrap();

        copy_dir_all(&src, &dest).unwrap();

        assert!(dest.join("link.txt").is_symlink());
        assert_eq!(fs::read(dest.join("link.txt")).unwrap(), b"real");
    }
}
