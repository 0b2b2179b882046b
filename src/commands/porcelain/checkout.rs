use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::RepositoryResult;

impl Repository {
    /// Make another branch current
    ///
    /// Neither the working tree nor the staging mirror is touched: staged
    /// files carry over to the next commit on the new branch.
    pub fn switch_branch(&mut self, name: &str) -> RepositoryResult<()> {
        let name = BranchName::try_parse(name)?;
        let _guard = self.lock()?;

        self.refs_mut().switch_branch(&name)
    }
}
