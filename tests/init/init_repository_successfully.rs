use crate::common::command::{repository_dir, run_snap_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repo_path = repository_dir.path().canonicalize()?.join(".snapvc");

    run_snap_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty snapvc repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(repo_path.display().to_string()));

    for dir in ["commits", "staging", "branches"] {
        assert!(repo_path.join(dir).is_dir(), "missing {dir}");
    }
    assert_eq!(std::fs::read_to_string(repo_path.join("HEAD"))?.trim(), "master");
    assert!(repo_path.join("branches").join("master.json").is_file());

    Ok(())
}

#[rstest]
fn init_creates_the_target_directory(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("nested").join("project");

    run_snap_command(repository_dir.path(), &["init", target.to_str().unwrap()])
        .assert()
        .success();

    assert!(target.join(".snapvc").is_dir());
    Ok(())
}
