use crate::common::command::{init_repository_dir, open_repository, run_snap_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;
use snapvc::RepositoryError;

#[rstest]
fn creating_a_duplicate_branch_fails(init_repository_dir: TempDir) {
    let mut repository = open_repository(init_repository_dir.path());

    let result = repository.create_branch("master");

    assert!(matches!(result, Err(RepositoryError::BranchAlreadyExists(_))));
}

#[rstest]
#[case("")]
#[case(".hidden")]
#[case("a..b")]
#[case("name.lock")]
#[case("with space")]
#[case("trailing/")]
fn creating_a_branch_with_an_invalid_name_fails(init_repository_dir: TempDir, #[case] name: &str) {
    let mut repository = open_repository(init_repository_dir.path());

    let result = repository.create_branch(name);

    assert!(matches!(result, Err(RepositoryError::InvalidBranchName(_))));
    assert_eq!(repository.branches().len(), 1);
}

#[rstest]
fn invalid_branch_names_fail_on_the_command_line(init_repository_dir: TempDir) {
    run_snap_command(init_repository_dir.path(), &["branch", "bad..name"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Branch failed: invalid branch name"));
}
