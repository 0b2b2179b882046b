use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Status of a single path as reported by `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileStatus {
    /// present in the working tree, absent from the staging mirror
    Untracked,
    /// staged, but the working tree copy has changed since
    Modified,
    /// present in the staging mirror
    Staged,
}

impl From<&FileStatus> for &str {
    fn from(status: &FileStatus) -> Self {
        match status {
            FileStatus::Untracked => "UNTRACKED",
            FileStatus::Modified => "MODIFIED",
            FileStatus::Staged => "STAGED",
        }
    }
}

impl FileStatus {
    /// Bracketed label, colored for terminal output
    pub fn colored_label(&self) -> String {
        let label: &str = self.into();
        let label = format!("[{}]", label);
        match self {
            FileStatus::Untracked => label.red().to_string(),
            FileStatus::Modified => label.yellow().to_string(),
            FileStatus::Staged => label.green().to_string(),
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{}", label)
    }
}
