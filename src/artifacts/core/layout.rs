//! On-disk layout of a repository
//!
//! All directory and file names live in [`RepositoryLayout`] instead of
//! constants so that callers (and tests) can place a repository in an
//! isolated layout. The default layout is:
//!
//! ```text
//! <root>/
//!   .snapvcignore
//!   .snapvc/
//!     HEAD
//!     LOCK
//!     commits/<id>.json
//!     staging/<relative path>
//!     branches/<name>.json
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryLayout {
    /// Metadata directory, relative to the repository root
    pub metadata_dir: String,
    pub commits_dir: String,
    pub staging_dir: String,
    pub branches_dir: String,
    /// File recording the name of the current branch
    pub head_file: String,
    pub lock_file: String,
    /// Ignore file, relative to the repository root
    pub ignore_file: String,
    pub default_branch: String,
    /// Patterns written to a freshly created ignore file
    pub default_ignore_patterns: Vec<String>,
}

impl Default for RepositoryLayout {
    fn default() -> Self {
        RepositoryLayout {
            metadata_dir: ".snapvc".to_string(),
            commits_dir: "commits".to_string(),
            staging_dir: "staging".to_string(),
            branches_dir: "branches".to_string(),
            head_file: "HEAD".to_string(),
            lock_file: "LOCK".to_string(),
            ignore_file: ".snapvcignore".to_string(),
            default_branch: "master".to_string(),
            default_ignore_patterns: vec![
                ".snapvc/".to_string(),
                "*.log".to_string(),
                ".DS_Store".to_string(),
            ],
        }
    }
}

impl RepositoryLayout {
    pub fn repo_path(&self, root: &Path) -> PathBuf {
        root.join(&self.metadata_dir)
    }

    pub fn commits_path(&self, root: &Path) -> PathBuf {
        self.repo_path(root).join(&self.commits_dir)
    }

    pub fn staging_path(&self, root: &Path) -> PathBuf {
        self.repo_path(root).join(&self.staging_dir)
    }

    pub fn branches_path(&self, root: &Path) -> PathBuf {
        self.repo_path(root).join(&self.branches_dir)
    }

    pub fn head_path(&self, root: &Path) -> PathBuf {
        self.repo_path(root).join(&self.head_file)
    }

    pub fn lock_path(&self, root: &Path) -> PathBuf {
        self.repo_path(root).join(&self.lock_file)
    }

    pub fn ignore_path(&self, root: &Path) -> PathBuf {
        root.join(&self.ignore_file)
    }

    /// Content of the ignore file created by `init`
    pub fn default_ignore_content(&self) -> String {
        let mut content = String::from("# Ignore specific files or directories\n");
        for pattern in &self.default_ignore_patterns {
            content.push_str(pattern);
            content.push('\n');
        }
        content
    }
}
