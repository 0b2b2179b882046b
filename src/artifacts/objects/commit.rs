//! Commit records
//!
//! Commits are immutable snapshots of the staging area. They contain:
//! - A unique id
//! - The id of the parent commit (absent for the first commit of a branch)
//! - The author and the creation timestamp
//! - The commit message
//! - The ordered list of file changes collected from the staging area
//!
//! ## Format
//!
//! On disk, one pretty-printed JSON document per commit:
//! ```text
//! {
//!   "id": "0b6f5f0e-3c8e-4f5b-9a53-3b1d0c6c2a7e",
//!   "message": "Add notes",
//!   "timestamp": "2024-01-01T12:00:00+01:00",
//!   "parent": null,
//!   "changes": [{ "path": "notes.txt", "kind": "ADDED", "content": "..." }],
//!   "author": "alice"
//! }
//! ```

use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::file_change::FileChange;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    id: CommitId,
    message: String,
    timestamp: DateTime<FixedOffset>,
    parent: Option<CommitId>,
    changes: Vec<FileChange>,
    author: String,
}

impl Commit {
    /// Build a commit stamped with a fresh id and the current local time
    ///
    /// Returns `None` when there are no changes: an empty commit is never
    /// created.
    pub(crate) fn new(
        message: String,
        parent: Option<CommitId>,
        changes: Vec<FileChange>,
        author: String,
    ) -> Option<Self> {
        if changes.is_empty() {
            return None;
        }

        Some(Commit {
            id: CommitId::generate(),
            message,
            timestamp: chrono::Local::now().fixed_offset(),
            parent,
            changes,
            author,
        })
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    /// Abbreviated id for display
    pub fn short_id(&self) -> &str {
        self.id.to_short_id()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Timestamp formatted as `YYYY-MM-DD HH:MM:SS`
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn parent(&self) -> Option<&CommitId> {
        self.parent.as_ref()
    }

    pub fn changes(&self) -> &[FileChange] {
        &self.changes
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}
