use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve an entry path against the extraction root, rejecting entries
/// that would land outside it.
pub fn sanitize_path(entry_path: &Path, base: &Path) -> Result<PathBuf> {
    let normalized = normalize_path(entry_path);

    if normalized.is_absolute() {
        return Err(Error::ZipSlip {
            entry: entry_path.to_path_buf(),
            resolved: normalized,
        });
    }

    let resolved = normalize_path(&base.join(&normalized));
    if !resolved.starts_with(base) {
        return Err(Error::ZipSlip {
            entry: entry_path.to_path_buf(),
            resolved,
        });
    }

    Ok(resolved)
}

/// Drop `.` components and resolve `..` lexically.
fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(part) => result.push(part),
            Component::RootDir => result.push("/"),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::CurDir => {}
        }
    }

    result
}
