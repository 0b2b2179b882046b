//! Branch ledger
//!
//! Tracks every branch's commit history and which branch is current.
//!
//! ## File Format
//!
//! - `<repo>/HEAD` holds the current branch name as plain text
//! - `<repo>/branches/<name>.json` holds one branch record:
//!   `{"name": "master", "history": ["<id>", ...], "head": "<id>"}`
//!
//! Records are loaded once when the repository is opened. Updates are written
//! to disk first and only then made visible in memory, so a failed write
//! leaves the ledger unchanged.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::history::Branch;
use crate::artifacts::core::atomic::write_atomically;
use crate::artifacts::objects::commit::Commit;
use crate::errors::{RepositoryError, RepositoryResult};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Refs {
    /// Directory holding the branch records
    branches_path: Box<Path>,
    head_path: Box<Path>,
    branches: BTreeMap<BranchName, Branch>,
    current: BranchName,
}

impl Refs {
    /// Create the ledger of a fresh repository with a single empty branch
    pub fn init(
        branches_path: Box<Path>,
        head_path: Box<Path>,
        default_branch: BranchName,
    ) -> RepositoryResult<Self> {
        std::fs::create_dir_all(&branches_path)?;

        let mut refs = Refs {
            branches_path,
            head_path,
            branches: BTreeMap::new(),
            current: default_branch.clone(),
        };

        let branch = Branch::new(default_branch.clone());
        refs.write_branch(&branch)?;
        refs.write_head(&default_branch)?;
        refs.branches.insert(default_branch, branch);

        Ok(refs)
    }

    /// Load every branch record and the current branch pointer
    ///
    /// A missing `HEAD` falls back to `default_branch`. A current branch
    /// without a record starts out empty.
    pub fn load(
        branches_path: Box<Path>,
        head_path: Box<Path>,
        default_branch: BranchName,
    ) -> RepositoryResult<Self> {
        let branches = Self::read_branches(&branches_path)?;

        let current = match std::fs::read_to_string(&head_path) {
            Ok(content) if !content.trim().is_empty() => BranchName::try_parse(content.trim())?,
            Ok(_) => default_branch,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => default_branch,
            Err(e) => return Err(e.into()),
        };

        let mut refs = Refs {
            branches_path,
            head_path,
            branches,
            current,
        };

        if !refs.branches.contains_key(&refs.current) {
            debug!(branch = %refs.current, "current branch has no record yet");
            refs.branches
                .insert(refs.current.clone(), Branch::new(refs.current.clone()));
        }

        Ok(refs)
    }

    pub fn current_branch(&self) -> &Branch {
        // `current` always has an entry: every constructor and switch_branch insert it
        &self.branches[&self.current]
    }

    pub fn current_branch_name(&self) -> &BranchName {
        &self.current
    }

    pub fn branch(&self, name: &BranchName) -> Option<&Branch> {
        self.branches.get(name)
    }

    /// Sorted snapshot of every branch name
    pub fn branches(&self) -> Vec<BranchName> {
        self.branches.keys().cloned().collect()
    }

    /// Append a commit to the current branch and make it the new head
    pub fn add_commit(&mut self, commit: &Commit) -> RepositoryResult<()> {
        let branch = self.current_branch().with_commit(commit.id().clone());
        self.write_branch(&branch)?;

        debug!(branch = %branch.name(), head = %commit.id(), "branch head moved");
        self.branches.insert(self.current.clone(), branch);

        Ok(())
    }

    pub fn create_branch(&mut self, name: BranchName) -> RepositoryResult<&Branch> {
        if self.branches.contains_key(&name) {
            return Err(RepositoryError::BranchAlreadyExists(name.to_string()));
        }

        let branch = Branch::new(name.clone());
        self.write_branch(&branch)?;

        info!(branch = %name, "branch created");
        Ok(&*self.branches.entry(name).or_insert(branch))
    }

    /// Make `name` the current branch
    ///
    /// Only the current pointer and `HEAD` change; working tree and staging
    /// are left alone.
    pub fn switch_branch(&mut self, name: &BranchName) -> RepositoryResult<()> {
        if !self.branches.contains_key(name) {
            return Err(RepositoryError::BranchNotFound(name.to_string()));
        }

        self.write_head(name)?;
        self.current = name.clone();

        info!(branch = %name, "switched branch");
        Ok(())
    }

    fn read_branches(branches_path: &Path) -> RepositoryResult<BTreeMap<BranchName, Branch>> {
        let mut branches = BTreeMap::new();
        if !branches_path.is_dir() {
            return Ok(branches);
        }

        for entry in WalkDir::new(branches_path).min_depth(1) {
            let entry = entry.map_err(|e| RepositoryError::walk(branches_path, e))?;
            let is_record = entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "json");
            if !is_record {
                continue;
            }

            let branch: Branch = serde_json::from_slice(&std::fs::read(entry.path())?)?;
            let branch = if branch.is_consistent() {
                branch
            } else {
                warn!(branch = %branch.name(), "branch head disagrees with its history, repairing");
                branch.repair_head()
            };

            branches.insert(branch.name().clone(), branch);
        }

        Ok(branches)
    }

    fn write_branch(&self, branch: &Branch) -> RepositoryResult<()> {
        let content = serde_json::to_vec_pretty(branch)?;
        write_atomically(&self.branches_path.join(branch.name().file_name()), &content)?;
        Ok(())
    }

    fn write_head(&self, name: &BranchName) -> RepositoryResult<()> {
        write_atomically(&self.head_path, format!("{name}\n").as_bytes())?;
        Ok(())
    }
}
