use crate::areas::repository::Repository;
use crate::errors::RepositoryResult;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

impl Repository {
    /// Copy files into the staging mirror
    ///
    /// Paths may be absolute or relative to the repository root; directories
    /// expand to every non-ignored file beneath them. Paths that are ignored,
    /// missing, unreadable or outside the root are skipped and logged, and a
    /// failed copy only skips that file. Returns the root-relative paths that
    /// were staged.
    pub fn stage<P: AsRef<Path>>(&mut self, paths: &[P]) -> RepositoryResult<Vec<PathBuf>> {
        let _guard = self.lock()?;
        let mut staged = Vec::new();

        for path in paths {
            let path = path.as_ref();

            let Some(relative) = self.workspace().relativize(path) else {
                warn!(path = %path.display(), "path is outside the repository, skipping");
                continue;
            };

            if self.workspace().is_metadata_path(&relative)
                || self.ignore_matcher().should_ignore(&relative)
            {
                info!(path = %relative.display(), "path is ignored, skipping");
                continue;
            }

            let metadata = match std::fs::metadata(self.path().join(&relative)) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "path does not exist or is not readable, skipping");
                    continue;
                }
            };

            if !metadata.is_dir() {
                self.stage_one(relative, &mut staged);
                continue;
            }

            if self.ignore_matcher().should_ignore_dir(&relative) {
                info!(path = %relative.display(), "directory is ignored, skipping");
                continue;
            }

            for file in self.workspace().walk_files(&relative, self.ignore_matcher()) {
                match file {
                    Ok(file) => self.stage_one(file, &mut staged),
                    Err(e) => warn!(path = %relative.display(), error = %e, "failed to list directory entry"),
                }
            }
        }

        Ok(staged)
    }

    fn stage_one(&self, relative: PathBuf, staged: &mut Vec<PathBuf>) {
        match self.staging().stage_file(self.path(), &relative) {
            Ok(()) => {
                info!(path = %relative.display(), "staged file");
                staged.push(relative);
            }
            Err(e) => warn!(path = %relative.display(), error = %e, "failed to stage file"),
        }
    }
}
