use crate::common::command::{init_repository_dir, open_repository, run_snap_command};
use crate::common::file::{read_staged, staged_path};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
fn staging_a_missing_file_is_skipped(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut repository = open_repository(init_repository_dir.path());

    let staged = repository.stage(&["missing.txt", "1.txt"])?;

    assert_eq!(staged, vec![PathBuf::from("1.txt")]);
    assert_eq!(read_staged(init_repository_dir.path(), "1.txt"), "one");
    assert!(!staged_path(init_repository_dir.path(), "missing.txt").exists());
    Ok(())
}

#[rstest]
fn staging_a_missing_file_still_succeeds_on_the_command_line(init_repository_dir: TempDir) {
    run_snap_command(init_repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .success();
}

#[rstest]
fn paths_outside_the_repository_are_skipped(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let outside = TempDir::new()?;
    std::fs::write(outside.path().join("secret.txt"), "secret")?;
    let mut repository = open_repository(init_repository_dir.path());

    let staged = repository.stage(&[outside.path().join("secret.txt")])?;

    assert!(staged.is_empty());
    assert!(repository.staging().is_empty()?);
    Ok(())
}

#[rstest]
fn metadata_files_are_never_staged(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut repository = open_repository(init_repository_dir.path());

    let staged = repository.stage(&[".snapvc/HEAD"])?;

    assert!(staged.is_empty());
    Ok(())
}
