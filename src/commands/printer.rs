//! Human readable rendering of command results
//!
//! Used by the `snap` binary; writes to any `Write` so the output can be
//! captured in tests.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::status_info::{RepositoryStatus, StatusMap};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

pub struct Printer<W: Write> {
    writer: W,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W) -> Self {
        Printer { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn initialized(&mut self, repo_path: &Path) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "Initialized empty snapvc repository in {}",
            repo_path.display()
        )
    }

    pub fn staged(&mut self) -> std::io::Result<()> {
        writeln!(self.writer, "Files staged successfully.")
    }

    pub fn commit(&mut self, commit: Option<&Commit>) -> std::io::Result<()> {
        match commit {
            Some(commit) => {
                writeln!(self.writer, "Commit created: {}", commit.id().to_string().yellow())?;
                writeln!(self.writer, "Message: {}", commit.message())
            }
            None => writeln!(self.writer, "No changes to commit."),
        }
    }

    pub fn status(&mut self, branch: &BranchName, status: &RepositoryStatus) -> std::io::Result<()> {
        writeln!(self.writer, "Repository Status:")?;
        writeln!(self.writer, "Branch: {branch}")?;
        writeln!(self.writer)?;

        if status.is_clean() {
            return writeln!(self.writer, "Working directory clean. No changes to commit.");
        }

        self.status_section("Staged Changes:", status.staged_files())?;
        self.status_section("Unstaged Changes:", status.unstaged_files())
    }

    fn status_section(&mut self, title: &str, files: &StatusMap) -> std::io::Result<()> {
        if files.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "{title}")?;
        for (path, status) in files {
            writeln!(self.writer, "\t{} {}", path.display(), status.colored_label())?;
        }
        writeln!(self.writer)
    }

    pub fn log(&mut self, commits: &[Commit]) -> std::io::Result<()> {
        writeln!(self.writer, "Commit History:")?;
        writeln!(self.writer, "===============")?;

        if commits.is_empty() {
            return writeln!(self.writer, "No commits yet.");
        }

        for commit in commits {
            writeln!(self.writer, "Commit: {}", commit.id().to_string().yellow())?;
            writeln!(self.writer, "Author: {}", commit.author())?;
            writeln!(self.writer, "Date:   {}", commit.readable_timestamp())?;
            writeln!(self.writer, "Message: {}", commit.message())?;
            writeln!(self.writer, "Changes:")?;
            for change in commit.changes() {
                writeln!(self.writer, "\t{}: {}", change.kind(), change.path().display())?;
            }
            writeln!(self.writer)?;
        }

        Ok(())
    }

    pub fn branches(&mut self, branches: &[BranchName], current: &BranchName) -> std::io::Result<()> {
        for branch in branches {
            if branch == current {
                writeln!(self.writer, "* {}", branch.to_string().green())?;
            } else {
                writeln!(self.writer, "  {branch}")?;
            }
        }

        Ok(())
    }

    pub fn branch_created(&mut self, branch: &BranchName) -> std::io::Result<()> {
        writeln!(self.writer, "Created branch {branch}")
    }

    pub fn switched(&mut self, branch: &BranchName) -> std::io::Result<()> {
        writeln!(self.writer, "Switched to branch '{branch}'")
    }
}
