//! Staging mirror
//!
//! Staged files are plain copies kept under `<repo>/staging/`, laid out with
//! the same relative paths they have in the working tree. Re-staging a file
//! overwrites its previous copy.

use crate::errors::{RepositoryError, RepositoryResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Staging {
    path: Box<Path>,
}

impl Staging {
    pub fn new(path: Box<Path>) -> Self {
        Staging { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location of the staged copy for a root-relative path
    pub fn staged_path(&self, relative_path: &Path) -> PathBuf {
        self.path.join(relative_path)
    }

    /// Copy `root/relative_path` into the mirror, creating parent directories
    pub fn stage_file(&self, root: &Path, relative_path: &Path) -> std::io::Result<()> {
        let target = self.staged_path(relative_path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::copy(root.join(relative_path), &target)?;
        Ok(())
    }

    /// Lazily walk the staged files, yielding root-relative paths in order
    pub fn walk_files(&self) -> impl Iterator<Item = RepositoryResult<PathBuf>> + '_ {
        WalkDir::new(&self.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Err(e) => Some(Err(RepositoryError::walk(&*self.path, e))),
                Ok(entry) if entry.file_type().is_dir() => None,
                Ok(entry) => entry
                    .path()
                    .strip_prefix(&self.path)
                    .ok()
                    .map(|relative| Ok(relative.to_path_buf())),
            })
    }

    /// An empty mirror may still hold empty directories
    pub fn is_empty(&self) -> RepositoryResult<bool> {
        match self.walk_files().next() {
            None => Ok(true),
            Some(entry) => entry.map(|_| false),
        }
    }

    /// Delete every staged file and directory, keeping the mirror root
    pub fn clear(&self) -> RepositoryResult<()> {
        for entry in WalkDir::new(&self.path).min_depth(1).contents_first(true) {
            let entry = entry.map_err(|e| RepositoryError::walk(&*self.path, e))?;

            if entry.file_type().is_dir() {
                std::fs::remove_dir(entry.path())?;
            } else {
                std::fs::remove_file(entry.path())?;
            }
        }

        Ok(())
    }
}
