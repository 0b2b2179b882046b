//! Repository error types
//!
//! Every fallible operation of the library returns a [`RepositoryResult`].
//! Recoverable conditions (a single file failing to stage, a single commit
//! failing to load while walking the log) never surface here; they are
//! logged and skipped by the caller.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// a repository already exists at this root
    #[error("repository already exists in {0}")]
    AlreadyExists(PathBuf),

    /// no repository metadata directory was found at this root
    #[error("no repository exists in {0}")]
    RepositoryNotFound(PathBuf),

    /// the commit record is missing from the commit store
    #[error("commit not found: {0}")]
    CommitNotFound(String),

    /// a commit record with this id was already persisted
    #[error("commit already exists: {0}")]
    CommitAlreadyExists(String),

    #[error("branch not found: {0}")]
    BranchNotFound(String),

    #[error("branch already exists: {0}")]
    BranchAlreadyExists(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    /// the operation is not valid in the current repository state
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// an ignore pattern could not be compiled
    #[error("invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// a directory traversal failed part way through
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    /// check if this error indicates the requested resource doesn't exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::RepositoryNotFound(_)
                | RepositoryError::CommitNotFound(_)
                | RepositoryError::BranchNotFound(_)
        )
    }

    /// check if this error indicates the resource is already there
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            RepositoryError::AlreadyExists(_)
                | RepositoryError::CommitAlreadyExists(_)
                | RepositoryError::BranchAlreadyExists(_)
        )
    }

    pub(crate) fn walk(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        RepositoryError::Walk {
            path: path.into(),
            source,
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
