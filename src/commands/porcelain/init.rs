use crate::areas::refs::Refs;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::layout::RepositoryLayout;
use crate::artifacts::core::lock::RepositoryLock;
use crate::errors::{RepositoryError, RepositoryResult};
use std::path::Path;
use tracing::info;

impl Repository {
    /// Create a new repository at `root`
    ///
    /// The root directory is created when missing. Fails with `AlreadyExists`
    /// when the metadata directory is already there; an existing repository
    /// is never touched.
    pub fn init(root: impl AsRef<Path>, layout: RepositoryLayout) -> RepositoryResult<Self> {
        let root = root.as_ref();
        std::fs::create_dir_all(root)?;
        let root = root.canonicalize()?;

        let default_branch = BranchName::try_parse(layout.default_branch.as_str())?;
        let repo_path = layout.repo_path(&root);
        if let Some(parent) = repo_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // claiming the metadata directory is what makes init exclusive
        match std::fs::create_dir(&repo_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(RepositoryError::AlreadyExists(repo_path));
            }
            Err(e) => return Err(e.into()),
        }

        let lock = RepositoryLock::new(layout.lock_path(&root).into_boxed_path());
        let _guard = lock.acquire()?;

        std::fs::create_dir_all(layout.commits_path(&root))?;
        std::fs::create_dir_all(layout.staging_path(&root))?;

        let refs = Refs::init(
            layout.branches_path(&root).into_boxed_path(),
            layout.head_path(&root).into_boxed_path(),
            default_branch,
        )?;

        let ignore_path = layout.ignore_path(&root);
        if !ignore_path.exists() {
            std::fs::write(&ignore_path, layout.default_ignore_content())?;
        }

        info!(path = %repo_path.display(), "initialized empty repository");
        Self::assemble(root, layout, lock, refs)
    }
}
