use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Classification of a staged file at commit time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

impl From<&ChangeKind> for &str {
    fn from(kind: &ChangeKind) -> Self {
        match kind {
            ChangeKind::Added => "ADDED",
            ChangeKind::Modified => "MODIFIED",
            ChangeKind::Deleted => "DELETED",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind: &str = self.into();
        write!(f, "{}", kind)
    }
}

/// One path affected by a commit
///
/// `content` holds the staged file content for `Added` and `Modified`
/// changes and is absent for `Deleted` ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    #[serde(with = "slash_path")]
    path: PathBuf,
    kind: ChangeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl FileChange {
    pub fn added(path: PathBuf, content: String) -> Self {
        FileChange {
            path,
            kind: ChangeKind::Added,
            content: Some(content),
        }
    }

    pub fn modified(path: PathBuf, content: String) -> Self {
        FileChange {
            path,
            kind: ChangeKind::Modified,
            content: Some(content),
        }
    }

    pub fn deleted(path: PathBuf) -> Self {
        FileChange {
            path,
            kind: ChangeKind::Deleted,
            content: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// Relative paths stored as `/`-separated strings on every platform
mod slash_path {
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::path::{Component, Path, PathBuf};

    pub fn serialize<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
        let components = path
            .components()
            .map(|component| match component {
                Component::Normal(name) => name.to_str(),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                S::Error::custom(format!("not a relative UTF-8 path: {}", path.display()))
            })?;

        serializer.serialize_str(&components.join("/"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PathBuf, D::Error> {
        let path = String::deserialize(deserializer)?;
        if path.is_empty() {
            return Err(D::Error::custom("empty path"));
        }

        Ok(path.split('/').filter(|part| !part.is_empty()).collect())
    }
}
