use crate::common::command::{init_repository_dir, open_repository};
use crate::common::file::{FileSpec, read_staged, staged_path, write_file, write_generated_files};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn restaging_an_unchanged_file_is_idempotent(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut repository = open_repository(init_repository_dir.path());

    repository.stage(&["1.txt"])?;
    let first = std::fs::read(staged_path(init_repository_dir.path(), "1.txt"))?;
    repository.stage(&["1.txt"])?;
    let second = std::fs::read(staged_path(init_repository_dir.path(), "1.txt"))?;

    assert_eq!(first, second);
    Ok(())
}

#[rstest]
fn restaging_a_changed_file_overwrites_the_copy(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let mut repository = open_repository(root);

    repository.stage(&["1.txt"])?;
    write_file(FileSpec::new(root.join("1.txt"), "uno".to_string()));
    repository.stage(&["1.txt"])?;

    assert_eq!(read_staged(root, "1.txt"), "uno");
    Ok(())
}

#[rstest]
fn staging_many_generated_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let files = write_generated_files(&root.join("generated"), 20);
    let mut repository = open_repository(root);

    let staged = repository.stage(&["generated"])?;

    assert_eq!(staged.len(), files.len());
    for file in files {
        let relative = file.path.strip_prefix(root)?.to_str().unwrap().to_string();
        assert_eq!(read_staged(root, &relative), file.content);
    }
    Ok(())
}
