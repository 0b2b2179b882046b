use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::RepositoryResult;
use tracing::{debug, warn};

impl Repository {
    /// Commits of the current branch, oldest first
    ///
    /// Commits whose records cannot be loaded are skipped.
    pub fn log(&self) -> RepositoryResult<Vec<Commit>> {
        let _guard = self.lock()?;
        let branch = self.current_branch();

        let commits = branch
            .history()
            .iter()
            .filter_map(|commit_id| match self.database().load(commit_id) {
                Ok(commit) => Some(commit),
                Err(e) => {
                    warn!(commit = %commit_id, error = %e, "skipping unreadable commit");
                    None
                }
            })
            .collect::<Vec<_>>();

        if commits.is_empty() {
            debug!(branch = %branch.name(), "no commits found");
        }

        Ok(commits)
    }
}
