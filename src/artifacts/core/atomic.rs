use std::io::Write;
use std::path::Path;

/// Write `content` to `path` through a sibling temp file and a rename
///
/// Readers observe either the old file or the complete new one. The parent
/// directory is created when missing.
pub fn write_atomically(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = path.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid target path {}", path.display()),
        )
    })?;
    std::fs::create_dir_all(parent)?;

    let temp_path = parent.join(format!("tmp-{}", uuid::Uuid::new_v4()));
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;

    let written = file.write_all(content).and_then(|_| file.sync_all());
    drop(file);

    if let Err(e) = written.and_then(|_| std::fs::rename(&temp_path, path)) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
