use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::staging::Staging;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::history::Branch;
use crate::artifacts::core::layout::RepositoryLayout;
use crate::artifacts::core::lock::{LockGuard, RepositoryLock};
use crate::artifacts::ignore::IgnoreMatcher;
use crate::errors::{RepositoryError, RepositoryResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A repository rooted at a working directory
///
/// Owns the ignore matcher, the staging mirror, the commit store and the
/// branch ledger. Every top-level operation holds the repository lock while
/// it runs; operations that change repository state take `&mut self`.
#[derive(Debug)]
pub struct Repository {
    path: Box<Path>,
    layout: RepositoryLayout,
    lock: RepositoryLock,
    ignore: IgnoreMatcher,
    workspace: Workspace,
    staging: Staging,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open an existing repository
    ///
    /// Fails with `RepositoryNotFound` when `root` has no metadata directory.
    pub fn open(root: impl AsRef<Path>, layout: RepositoryLayout) -> RepositoryResult<Self> {
        let root = root.as_ref();
        let root = root
            .canonicalize()
            .map_err(|_| RepositoryError::RepositoryNotFound(root.to_path_buf()))?;

        if !layout.repo_path(&root).is_dir() {
            return Err(RepositoryError::RepositoryNotFound(root));
        }

        let lock = RepositoryLock::new(layout.lock_path(&root).into_boxed_path());
        let _guard = lock.acquire()?;

        for dir in [layout.commits_path(&root), layout.staging_path(&root)] {
            std::fs::create_dir_all(dir)?;
        }

        let refs = Refs::load(
            layout.branches_path(&root).into_boxed_path(),
            layout.head_path(&root).into_boxed_path(),
            BranchName::try_parse(layout.default_branch.as_str())?,
        )?;

        debug!(root = %root.display(), branch = %refs.current_branch_name(), "repository opened");
        Self::assemble(root, layout, lock, refs)
    }

    /// Wire up the repository areas around an already loaded ledger
    pub(crate) fn assemble(
        root: PathBuf,
        layout: RepositoryLayout,
        lock: RepositoryLock,
        refs: Refs,
    ) -> RepositoryResult<Self> {
        let mut ignore = IgnoreMatcher::new();
        ignore.load_from_file(&layout.ignore_path(&root))?;

        Ok(Repository {
            workspace: Workspace::new(
                root.clone().into_boxed_path(),
                PathBuf::from(&layout.metadata_dir).into_boxed_path(),
            ),
            staging: Staging::new(layout.staging_path(&root).into_boxed_path()),
            database: Database::new(layout.commits_path(&root).into_boxed_path()),
            path: root.into_boxed_path(),
            layout,
            lock,
            ignore,
            refs,
        })
    }

    /// Canonical repository root
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The metadata directory, `<root>/.snapvc` by default
    pub fn repo_path(&self) -> PathBuf {
        self.layout.repo_path(&self.path)
    }

    pub fn layout(&self) -> &RepositoryLayout {
        &self.layout
    }

    pub fn ignore_matcher(&self) -> &IgnoreMatcher {
        &self.ignore
    }

    /// Add an ignore pattern for the lifetime of this handle
    ///
    /// The pattern is not written to the ignore file.
    pub fn add_ignore_pattern(&mut self, pattern: &str) -> RepositoryResult<()> {
        self.ignore.add_pattern(pattern)
    }

    pub fn current_branch(&self) -> &Branch {
        self.refs.current_branch()
    }

    /// Sorted branch names
    pub fn branches(&self) -> Vec<BranchName> {
        self.refs.branches()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub(crate) fn refs_mut(&mut self) -> &mut Refs {
        &mut self.refs
    }

    pub(crate) fn lock(&self) -> RepositoryResult<LockGuard> {
        Ok(self.lock.acquire()?)
    }
}
