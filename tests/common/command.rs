use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use snapvc::{Repository, RepositoryLayout};
use std::path::Path;

pub const AUTHOR: &str = "Jane Tester";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// An initialized repository holding `1.txt`, `a/2.txt` and `a/b/3.txt`, nothing staged
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_snap_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    repository_dir
}

/// Library handle on a fresh repository
#[fixture]
pub fn repository(repository_dir: TempDir) -> (TempDir, Repository) {
    let repository = Repository::init(repository_dir.path(), RepositoryLayout::default())
        .expect("Failed to init repository");

    (repository_dir, repository)
}

pub fn open_repository(dir: &Path) -> Repository {
    Repository::open(dir, RepositoryLayout::default()).expect("Failed to open repository")
}

pub fn run_snap_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("snap").expect("Failed to find snap binary");
    cmd.env("SNAP_AUTHOR_NAME", AUTHOR);
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn snap_commit(dir: &Path, message: &str) -> Command {
    run_snap_command(dir, &["commit", "-m", message])
}

pub fn stdout_of(mut command: Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = command.assert().success();
    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}
