use crate::areas::repository::Repository;
use crate::artifacts::status::inspector::check_working_file;
use crate::artifacts::status::status_info::RepositoryStatus;
use crate::errors::RepositoryResult;
use std::path::Path;

impl Repository {
    /// Compare the working tree with the staging mirror
    ///
    /// Working files without a staged copy are `Untracked`, working files
    /// whose staged copy differs are `Modified`. Every staged file is listed
    /// as `Staged`, so the two maps may share paths.
    pub fn status(&self) -> RepositoryResult<RepositoryStatus> {
        let _guard = self.lock()?;
        let mut status = RepositoryStatus::new();

        for file in self.workspace().walk_files(Path::new(""), self.ignore_matcher()) {
            let file = file?;
            let working = self.path().join(&file);
            let staged = self.staging().staged_path(&file);

            if let Some(file_status) = check_working_file(&working, &staged)? {
                status.add_unstaged_file(file, file_status);
            }
        }

        for file in self.staging().walk_files() {
            status.add_staged_file(file?);
        }

        Ok(status)
    }
}
