//! Commit store
//!
//! Every commit is persisted exactly once as `<repo>/commits/<id>.json`.
//! Records are never rewritten or deleted.

use crate::artifacts::core::atomic::write_atomically;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::file_change::FileChange;
use crate::errors::{RepositoryError, RepositoryResult};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    /// Build a new, not yet persisted commit
    ///
    /// Returns `None` when `changes` is empty.
    pub fn create_commit(
        &self,
        message: &str,
        parent: Option<CommitId>,
        changes: Vec<FileChange>,
        author: &str,
    ) -> Option<Commit> {
        Commit::new(message.to_string(), parent, changes, author.to_string())
    }

    pub fn persist(&self, commit: &Commit) -> RepositoryResult<()> {
        if commit.changes().is_empty() {
            return Err(RepositoryError::InvalidOperation(format!(
                "commit {} has no changes",
                commit.id()
            )));
        }

        let commit_path = self.commit_path(commit.id());
        if commit_path.exists() {
            return Err(RepositoryError::CommitAlreadyExists(commit.id().to_string()));
        }

        let content = serde_json::to_vec_pretty(commit)?;
        write_atomically(&commit_path, &content)?;

        debug!(commit = %commit.id(), path = %commit_path.display(), "commit persisted");
        Ok(())
    }

    pub fn load(&self, commit_id: &CommitId) -> RepositoryResult<Commit> {
        let content = match std::fs::read(self.commit_path(commit_id)) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::CommitNotFound(commit_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&content)?)
    }

    pub fn contains(&self, commit_id: &CommitId) -> bool {
        self.commit_path(commit_id).is_file()
    }

    fn commit_path(&self, commit_id: &CommitId) -> PathBuf {
        self.path.join(commit_id.file_name())
    }
}
