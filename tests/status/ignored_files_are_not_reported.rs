use crate::common::command::{init_repository_dir, open_repository};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn ignored_files_are_not_reported(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("debug.log"), "noise".to_string()));
    write_file(FileSpec::new(root.join("a").join("b").join("trace.log"), "noise".to_string()));
    write_file(FileSpec::new(root.join("target").join("out.bin"), "bin".to_string()));
    let mut repository = open_repository(root);
    repository.add_ignore_pattern("target/")?;

    let status = repository.status()?;

    for ignored in ["debug.log", "a/b/trace.log", "target/out.bin"] {
        assert_eq!(status.unstaged_status(Path::new(ignored)), None, "{ignored} reported");
    }
    assert!(status.unstaged_status(Path::new("a/b/3.txt")).is_some());
    assert!(
        status
            .unstaged_files()
            .keys()
            .all(|path| !path.starts_with(".snapvc"))
    );
    Ok(())
}
