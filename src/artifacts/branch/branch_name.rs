use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::{RepositoryError, RepositoryResult};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static INVALID_BRANCH_NAME: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(INVALID_BRANCH_NAME_REGEX).expect("branch name regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> RepositoryResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(RepositoryError::InvalidBranchName(
                "branch name cannot be empty".to_string(),
            ));
        }

        if INVALID_BRANCH_NAME.is_match(&name) {
            return Err(RepositoryError::InvalidBranchName(name));
        }

        Ok(Self(name))
    }

    /// File name of the branch record, relative to the branches directory
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl TryFrom<String> for BranchName {
    type Error = RepositoryError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::try_parse(name)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
