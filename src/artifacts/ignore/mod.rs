//! Ignore patterns
//!
//! Patterns are simple globs read from the repository's ignore file, one per
//! line. Each glob is translated to an anchored regular expression: `*`
//! becomes `.*`, `?` becomes `.`, every other character is matched literally.
//!
//! ## Matching
//!
//! Paths are matched relative to the repository root. A pattern matches a
//! path when it matches the whole path, any leading directory prefix of it,
//! or any single component. A pattern ending in `/` only matches directories,
//! so `target/` ignores `target/debug/app` but not a file named `target`.

use crate::errors::{RepositoryError, RepositoryResult};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Component, Path};
use tracing::debug;

#[derive(Debug, Clone)]
struct IgnorePattern {
    regex: Regex,
    directory_only: bool,
}

#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    patterns: BTreeMap<String, IgnorePattern>,
}

impl IgnoreMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single glob pattern, ignoring duplicates
    pub fn add_pattern(&mut self, pattern: &str) -> RepositoryResult<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || self.patterns.contains_key(pattern) {
            return Ok(());
        }

        let (glob, directory_only) = match pattern.strip_suffix('/') {
            Some(glob) if !glob.is_empty() => (glob, true),
            _ => (pattern, false),
        };
        let regex = Regex::new(&Self::glob_to_regex(glob)).map_err(|source| {
            RepositoryError::Pattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        self.patterns.insert(
            pattern.to_string(),
            IgnorePattern {
                regex,
                directory_only,
            },
        );

        Ok(())
    }

    /// Merge the patterns of an ignore file into this matcher
    ///
    /// Blank lines and lines starting with `#` are skipped. A missing file
    /// contributes no patterns.
    pub fn load_from_file(&mut self, path: &Path) -> RepositoryResult<()> {
        if !path.exists() {
            debug!(path = %path.display(), "no ignore file found");
            return Ok(());
        }

        let content = std::fs::read_to_string(path)?;
        self.load_from_str(&content)
    }

    pub fn load_from_str(&mut self, content: &str) -> RepositoryResult<()> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .try_for_each(|line| self.add_pattern(line))
    }

    /// Check a file path, relative to the repository root
    pub fn should_ignore(&self, path: &Path) -> bool {
        self.is_ignored(path, false)
    }

    /// Check a directory path, relative to the repository root
    pub fn should_ignore_dir(&self, path: &Path) -> bool {
        self.is_ignored(path, true)
    }

    /// All patterns, in sorted order
    pub fn patterns(&self) -> Vec<String> {
        self.patterns.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        let components = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>();

        if components.is_empty() {
            return false;
        }

        // (candidate, names a directory)
        let mut candidates = Vec::with_capacity(components.len() * 2);
        for (i, name) in components.iter().enumerate() {
            let names_directory = i + 1 < components.len() || is_dir;
            candidates.push((name.clone(), names_directory));
            if i > 0 {
                candidates.push((components[..=i].join("/"), names_directory));
            }
        }

        self.patterns.values().any(|pattern| {
            candidates.iter().any(|(candidate, names_directory)| {
                (!pattern.directory_only || *names_directory) && pattern.regex.is_match(candidate)
            })
        })
    }

    fn glob_to_regex(glob: &str) -> String {
        let mut regex = String::with_capacity(glob.len() + 2);
        regex.push('^');
        for c in glob.chars() {
            match c {
                '*' => regex.push_str(".*"),
                '?' => regex.push('.'),
                c => regex.push_str(&regex::escape(&c.to_string())),
            }
        }
        regex.push('$');
        regex
    }
}
