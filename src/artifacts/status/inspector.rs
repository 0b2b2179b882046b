use crate::artifacts::objects::file_change::FileChange;
use crate::artifacts::status::file_status::FileStatus;
use crate::errors::{RepositoryError, RepositoryResult};
use derive_new::new;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Byte-for-byte comparison of two files
pub fn is_content_changed(left: &Path, right: &Path) -> std::io::Result<bool> {
    let left_len = std::fs::metadata(left)?.len();
    let right_len = std::fs::metadata(right)?.len();
    if left_len != right_len {
        return Ok(true);
    }

    Ok(std::fs::read(left)? != std::fs::read(right)?)
}

/// Classifies the staging mirror against the working tree at commit time
///
/// For each staged file, the path it was staged from is looked up in the
/// working tree:
///
/// | working tree file         | change     |
/// |---------------------------|------------|
/// | missing                   | `Added`    |
/// | content differs           | `Modified` |
/// | content is identical      | `Deleted`  |
///
/// The last row is surprising (an untouched file is recorded as deleted) but
/// it is the established on-disk behavior of this store and is kept as is.
#[derive(new)]
pub struct ChangeDetector<'p> {
    staging_root: &'p Path,
    root: &'p Path,
}

impl ChangeDetector<'_> {
    /// Collect one change per staged file, in path order
    ///
    /// Any I/O failure aborts the whole collection.
    pub fn collect_changes(&self) -> RepositoryResult<Vec<FileChange>> {
        let mut changes = Vec::new();

        for entry in WalkDir::new(self.staging_root).sort_by_file_name() {
            let entry = entry.map_err(|e| RepositoryError::walk(self.staging_root, e))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry
                .path()
                .strip_prefix(self.staging_root)
                .map(PathBuf::from)
                .map_err(|_| {
                    RepositoryError::InvalidOperation(format!(
                        "staged file outside of the staging area: {}",
                        entry.path().display()
                    ))
                })?;

            changes.push(self.classify(relative_path)?);
        }

        Ok(changes)
    }

    /// Classify a single staged file
    pub fn classify(&self, relative_path: PathBuf) -> RepositoryResult<FileChange> {
        let staged_path = self.staging_root.join(&relative_path);
        let original_path = self.root.join(&relative_path);

        let change = if !original_path.exists() {
            FileChange::added(relative_path, Self::read_staged(&staged_path)?)
        } else if is_content_changed(&original_path, &staged_path)? {
            FileChange::modified(relative_path, Self::read_staged(&staged_path)?)
        } else {
            FileChange::deleted(relative_path)
        };
        debug!(path = %change.path().display(), kind = %change.kind(), "classified staged file");

        Ok(change)
    }

    fn read_staged(staged_path: &Path) -> RepositoryResult<String> {
        std::fs::read_to_string(staged_path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => RepositoryError::Io(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("staged file is not valid UTF-8: {}", staged_path.display()),
            )),
            _ => RepositoryError::Io(e),
        })
    }
}

/// Status of a working tree file relative to its staged copy
///
/// Returns `None` when the staged copy is identical.
pub fn check_working_file(
    working_path: &Path,
    staged_path: &Path,
) -> std::io::Result<Option<FileStatus>> {
    if !staged_path.exists() {
        return Ok(Some(FileStatus::Untracked));
    }

    if is_content_changed(working_path, staged_path)? {
        Ok(Some(FileStatus::Modified))
    } else {
        Ok(None)
    }
}
