use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Subdirectory names relocated from the deprecated storage directory.
const USER_DIRS: [&str; 5] = ["worlds", "games", "mods", "textures", "client"];

/// File names relocated from the deprecated storage directory.
const USER_FILES: [&str; 1] = ["minetest.conf"];

/// The fixed set of user-data names moved out of the legacy directory.
/// Constant for the lifetime of a run.
#[derive(Clone, Debug)]
pub struct MigrationPlan {
    dirs: &'static [&'static str],
    files: &'static [&'static str],
}

impl Default for MigrationPlan {
    fn default() -> Self {
        Self {
            dirs: &USER_DIRS,
            files: &USER_FILES,
        }
    }
}

impl MigrationPlan {
    pub fn dirs(&self) -> &[&'static str] {
        self.dirs
    }

    pub fn files(&self) -> &[&'static str] {
        self.files
    }

    /// Relocate legacy user data into `target`, then delete the legacy
    /// directory and anything left in it.
    ///
    /// Returns `false` without touching the filesystem when the legacy
    /// directory does not exist. Moves overwrite same-named destinations.
    /// Moves already performed are not rolled back on failure.
    pub fn migrate(&self, legacy: &Path, target: &Path) -> Result<bool> {
        if !legacy.is_dir() {
            return Ok(false);
        }

        for name in self.dirs {
            let dir = legacy.join(name);
            if dir.is_dir() {
                debug!(name = %name, "moving legacy directory");
                minepack_fs::move_dir_into(&dir, target)?;
            }
        }

        for name in self.files {
            let file = legacy.join(name);
            if file.is_file() {
                debug!(name = %name, "moving legacy file");
                minepack_fs::move_file_into(&file, target)?;
            }
        }

        minepack_fs::remove_tree(legacy)?;
        Ok(true)
    }
}
