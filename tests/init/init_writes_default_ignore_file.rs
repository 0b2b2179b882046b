use crate::common::command::repository;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use snapvc::{Repository, RepositoryLayout};
use std::path::Path;

#[rstest]
fn init_writes_default_ignore_file(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (dir, repository) = repository;

    let content = std::fs::read_to_string(dir.path().join(".snapvcignore"))?;

    assert_eq!(
        content,
        "# Ignore specific files or directories\n.snapvc/\n*.log\n.DS_Store\n"
    );
    assert!(repository.ignore_matcher().should_ignore(Path::new("debug.log")));
    assert!(repository.ignore_matcher().should_ignore(Path::new("sub/.DS_Store")));
    Ok(())
}

#[rstest]
fn init_keeps_an_existing_ignore_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join(".snapvcignore"), "build/\n")?;

    let repository = Repository::init(dir.path(), RepositoryLayout::default())?;

    assert_eq!(std::fs::read_to_string(dir.path().join(".snapvcignore"))?, "build/\n");
    assert_eq!(repository.ignore_matcher().patterns(), vec!["build/".to_string()]);
    Ok(())
}
