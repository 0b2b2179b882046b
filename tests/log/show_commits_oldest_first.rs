use crate::common::command::{AUTHOR, init_repository_dir, open_repository, run_snap_command, snap_commit, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_commits_oldest_first(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let mut repository = open_repository(root);
    let mut created = Vec::new();
    for (index, message) in ["First", "Second", "Third"].into_iter().enumerate() {
        write_file(FileSpec::new(root.join("1.txt"), format!("version {index}")));
        repository.stage(&["1.txt"])?;
        created.push(repository.commit(message, AUTHOR)?.expect("a commit"));
    }

    let log = repository.log()?;

    assert_eq!(log, created);
    assert_eq!(
        log.iter().map(|commit| commit.message()).collect::<Vec<_>>(),
        vec!["First", "Second", "Third"]
    );
    Ok(())
}

#[rstest]
fn show_log_on_the_command_line(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    run_snap_command(root, &["add", "a"]).assert().success();
    snap_commit(root, "Add a").assert().success();

    let output = stdout_of(run_snap_command(root, &["log"]))?;

    let commit = open_repository(root).log()?.pop().expect("a commit");
    assert_eq!(
        output,
        format!(
            "Commit History:\n\
             ===============\n\
             Commit: {}\n\
             Author: {}\n\
             Date:   {}\n\
             Message: Add a\n\
             Changes:\n\
             \tDELETED: a/2.txt\n\
             \tDELETED: a/b/3.txt\n\
             \n",
            commit.id(),
            AUTHOR,
            commit.readable_timestamp()
        )
    );
    Ok(())
}
