//! Working tree access
//!
//! The workspace is the user's directory tree, minus the repository's
//! metadata directory. Traversals are lazy `walkdir` iterators; a walk is not
//! restartable once consumed, call `walk_files` again to start over.

use crate::artifacts::ignore::IgnoreMatcher;
use crate::errors::{RepositoryError, RepositoryResult};
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug)]
pub struct Workspace {
    /// Canonical repository root
    path: Box<Path>,
    /// Metadata directory, relative to the root
    metadata_dir: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>, metadata_dir: Box<Path>) -> Self {
        Workspace { path, metadata_dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a root-relative path lies inside the metadata directory
    pub fn is_metadata_path(&self, relative_path: &Path) -> bool {
        relative_path.starts_with(&self.metadata_dir)
    }

    /// Express a user supplied path relative to the repository root
    ///
    /// Relative paths are taken relative to the root. Returns `None` when the
    /// path resolves outside of the root.
    pub fn relativize(&self, path: &Path) -> Option<PathBuf> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        };
        let absolute = absolute
            .canonicalize()
            .unwrap_or_else(|_| Self::normalize(&absolute));

        absolute
            .strip_prefix(&self.path)
            .ok()
            .map(PathBuf::from)
    }

    /// Lazily walk every visible file under `start` (relative to the root)
    ///
    /// Yields root-relative paths in file name order. The metadata directory
    /// and ignored paths are pruned; a traversal error is yielded as an `Err`
    /// item.
    pub fn walk_files<'a>(
        &'a self,
        start: &Path,
        ignore: &'a IgnoreMatcher,
    ) -> impl Iterator<Item = RepositoryResult<PathBuf>> + 'a {
        WalkDir::new(self.path.join(start))
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| self.is_visible(entry, ignore))
            .filter_map(move |entry| match entry {
                Err(e) => Some(Err(RepositoryError::walk(&*self.path, e))),
                Ok(entry) if !entry.file_type().is_file() => None,
                Ok(entry) => entry
                    .path()
                    .strip_prefix(&self.path)
                    .ok()
                    .map(|relative| Ok(relative.to_path_buf())),
            })
    }

    fn is_visible(&self, entry: &DirEntry, ignore: &IgnoreMatcher) -> bool {
        let Ok(relative) = entry.path().strip_prefix(&self.path) else {
            return false;
        };

        if relative.as_os_str().is_empty() {
            return true;
        }

        if self.is_metadata_path(relative) {
            return false;
        }

        if entry.file_type().is_dir() {
            !ignore.should_ignore_dir(relative)
        } else {
            !ignore.should_ignore(relative)
        }
    }

    /// Lexically resolve `.` and `..` for paths that do not exist on disk
    fn normalize(path: &Path) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                component => normalized.push(component),
            }
        }
        normalized
    }
}
