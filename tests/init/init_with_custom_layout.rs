use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use snapvc::{Repository, RepositoryLayout};

#[test]
fn init_with_custom_layout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let layout = RepositoryLayout {
        metadata_dir: ".vault".to_string(),
        default_branch: "main".to_string(),
        ignore_file: ".vaultignore".to_string(),
        default_ignore_patterns: vec![".vault/".to_string(), "*.tmp".to_string()],
        ..RepositoryLayout::default()
    };

    let mut repository = Repository::init(dir.path(), layout.clone())?;
    std::fs::write(dir.path().join("notes.txt"), "notes")?;
    std::fs::write(dir.path().join("scratch.tmp"), "scratch")?;
    let staged = repository.stage(&["notes.txt", "scratch.tmp"])?;

    assert_eq!(staged, vec![std::path::PathBuf::from("notes.txt")]);
    assert!(dir.path().join(".vault").join("staging").join("notes.txt").is_file());
    assert_eq!(repository.current_branch().name().to_string(), "main");

    let reopened = Repository::open(dir.path(), layout)?;
    assert_eq!(reopened.current_branch().name().to_string(), "main");
    Ok(())
}
