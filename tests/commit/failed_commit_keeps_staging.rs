use crate::common::command::{AUTHOR, init_repository_dir, open_repository};
use crate::common::file::{FileSpec, staged_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use snapvc::RepositoryError;
use std::path::PathBuf;

#[rstest]
fn non_utf8_staged_content_fails_the_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    std::fs::write(root.join("image.bin"), b"\xff\xfe\x00\x81")?;
    let mut repository = open_repository(root);
    repository.stage(&["image.bin", "1.txt"])?;
    // differs from the staged copy, so the staged bytes must be read
    std::fs::write(root.join("image.bin"), b"\x00")?;

    let result = repository.commit("Binary", AUTHOR);

    assert!(matches!(result, Err(RepositoryError::Io(_))));
    assert!(!repository.staging().is_empty()?);
    assert_eq!(std::fs::read(staged_path(root, "image.bin"))?, b"\xff\xfe\x00\x81".to_vec());
    assert!(repository.current_branch().is_empty());
    assert_eq!(
        std::fs::read_dir(root.join(".snapvc").join("commits"))?.count(),
        0
    );
    Ok(())
}

#[rstest]
fn missing_parent_record_fails_the_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let mut repository = open_repository(root);
    repository.stage(&["1.txt"])?;
    let first = repository.commit("First", AUTHOR)?.expect("a commit");
    std::fs::remove_file(
        root.join(".snapvc").join("commits").join(format!("{}.json", first.id())),
    )?;
    write_file(FileSpec::new(root.join("1.txt"), "uno".to_string()));
    repository.stage(&["1.txt"])?;

    let result = repository.commit("Second", AUTHOR);

    assert!(matches!(result, Err(RepositoryError::CommitNotFound(id)) if id == first.id().to_string()));
    assert_eq!(
        repository.staging().walk_files().collect::<Result<Vec<_>, _>>()?,
        vec![PathBuf::from("1.txt")]
    );
    assert_eq!(repository.current_branch().len(), 1);
    assert_eq!(repository.current_branch().head(), Some(first.id()));
    Ok(())
}
