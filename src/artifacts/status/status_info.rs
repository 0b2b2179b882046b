use crate::artifacts::status::file_status::FileStatus;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub type StatusMap = BTreeMap<PathBuf, FileStatus>;

/// Result of a status scan
///
/// `staged_files` lists everything in the staging mirror; `unstaged_files`
/// lists untracked working tree files and staged files edited since they
/// were staged. A path may appear in both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryStatus {
    staged_files: StatusMap,
    unstaged_files: StatusMap,
}

impl RepositoryStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_staged_file(&mut self, path: PathBuf) {
        self.staged_files.insert(path, FileStatus::Staged);
    }

    pub(crate) fn add_unstaged_file(&mut self, path: PathBuf, status: FileStatus) {
        self.unstaged_files.insert(path, status);
    }

    pub fn staged_files(&self) -> &StatusMap {
        &self.staged_files
    }

    pub fn unstaged_files(&self) -> &StatusMap {
        &self.unstaged_files
    }

    pub fn staged_status(&self, path: &Path) -> Option<FileStatus> {
        self.staged_files.get(path).copied()
    }

    pub fn unstaged_status(&self, path: &Path) -> Option<FileStatus> {
        self.unstaged_files.get(path).copied()
    }

    pub fn is_clean(&self) -> bool {
        self.staged_files.is_empty() && self.unstaged_files.is_empty()
    }

    pub fn into_parts(self) -> (StatusMap, StatusMap) {
        (self.staged_files, self.unstaged_files)
    }
}
