use crate::common::command::{init_repository_dir, open_repository, run_snap_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use snapvc::BranchName;

#[rstest]
fn create_and_list_branches(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut repository = open_repository(init_repository_dir.path());

    let branch = repository.create_branch("feature/login")?;

    assert!(branch.is_empty());
    assert_eq!(
        repository.branches(),
        vec![
            BranchName::try_parse("feature/login")?,
            BranchName::try_parse("master")?,
        ]
    );
    assert_eq!(repository.current_branch().name().to_string(), "master");
    Ok(())
}

#[rstest]
fn create_and_list_branches_on_the_command_line(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();

    let created = stdout_of(run_snap_command(root, &["branch", "develop"]))?;
    let listed = stdout_of(run_snap_command(root, &["branch"]))?;

    assert_eq!(created, "Created branch develop\n");
    assert_eq!(listed, "  develop\n* master\n");
    Ok(())
}
