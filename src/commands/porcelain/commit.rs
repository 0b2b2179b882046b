use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::inspector::ChangeDetector;
use crate::errors::{RepositoryError, RepositoryResult};
use tracing::{error, info, warn};

impl Repository {
    /// Record the staged files as a new commit on the current branch
    ///
    /// Returns `Ok(None)` when nothing is staged. On success the staging
    /// mirror is emptied; any failure before that leaves it untouched.
    pub fn commit(&mut self, message: &str, author: &str) -> RepositoryResult<Option<Commit>> {
        let _guard = self.lock()?;

        if self.staging().is_empty()? {
            warn!("nothing to commit");
            return Ok(None);
        }

        let changes = ChangeDetector::new(self.staging().path(), self.path()).collect_changes()?;

        let parent = self.current_branch().head().cloned();
        if let Some(parent) = &parent
            && !self.database().contains(parent)
        {
            return Err(RepositoryError::CommitNotFound(parent.to_string()));
        }

        let Some(commit) = self.database().create_commit(message, parent, changes, author) else {
            warn!("nothing to commit");
            return Ok(None);
        };

        self.database().persist(&commit)?;
        self.refs_mut().add_commit(&commit)?;

        if let Err(e) = self.staging().clear() {
            error!(commit = %commit.id(), error = %e, "commit recorded but the staging area could not be cleared");
            return Err(e);
        }

        info!(
            commit = %commit.id(),
            branch = %self.refs().current_branch_name(),
            changes = commit.changes().len(),
            "commit created"
        );
        Ok(Some(commit))
    }
}
