use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use serde::{Deserialize, Serialize};

/// A named, linear sequence of commits
///
/// `head` always equals the last element of `history`, and is `None` exactly
/// when the history is empty. Branches only grow by appending; `with_commit`
/// returns the appended branch and leaves `self` untouched, so callers can
/// persist the new state before making it visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    name: BranchName,
    history: Vec<CommitId>,
    head: Option<CommitId>,
}

impl Branch {
    pub fn new(name: BranchName) -> Self {
        Branch {
            name,
            history: Vec::new(),
            head: None,
        }
    }

    pub fn name(&self) -> &BranchName {
        &self.name
    }

    /// Commit ids, oldest first
    pub fn history(&self) -> &[CommitId] {
        &self.history
    }

    pub fn head(&self) -> Option<&CommitId> {
        self.head.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// The branch with `commit_id` appended as its new head
    pub fn with_commit(&self, commit_id: CommitId) -> Self {
        let mut history = self.history.clone();
        history.push(commit_id.clone());

        Branch {
            name: self.name.clone(),
            history,
            head: Some(commit_id),
        }
    }

    /// Check that the head pointer agrees with the history
    ///
    /// Records read from disk may have been edited by hand.
    pub fn is_consistent(&self) -> bool {
        self.head.as_ref() == self.history.last()
    }

    /// Rebuild the head pointer from the history
    pub(crate) fn repair_head(mut self) -> Self {
        self.head = self.history.last().cloned();
        self
    }
}
