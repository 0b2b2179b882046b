//! Commit identifiers
//!
//! Ids are random version 4 UUIDs in their hyphenated lowercase form, e.g.
//! `0b6f5f0e-3c8e-4f5b-9a53-3b1d0c6c2a7e`. They carry no meaning beyond
//! uniqueness within a repository's commit space; they also name the commit
//! record on disk, so parsing rejects anything that is not a plain file name.

use crate::artifacts::objects::SHORT_ID_LENGTH;
use crate::errors::{RepositoryError, RepositoryResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitId(String);

impl CommitId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        CommitId(uuid::Uuid::new_v4().to_string())
    }

    /// Parse an id read from disk or user input
    pub fn try_parse(id: impl Into<String>) -> RepositoryResult<Self> {
        let id = id.into();
        let id = id.trim();

        if id.is_empty()
            || id == "."
            || id == ".."
            || id.contains(['/', '\\'])
            || id.chars().any(char::is_control)
        {
            return Err(RepositoryError::InvalidOperation(format!(
                "invalid commit id: {:?}",
                id
            )));
        }

        Ok(CommitId(id.to_string()))
    }

    /// Abbreviated form used for display
    pub fn to_short_id(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LENGTH) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }

    /// File name of the commit record
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl TryFrom<String> for CommitId {
    type Error = RepositoryError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::try_parse(id)
    }
}

impl From<CommitId> for String {
    fn from(id: CommitId) -> Self {
        id.0
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
