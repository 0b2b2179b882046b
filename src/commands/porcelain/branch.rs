use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::history::Branch;
use crate::errors::RepositoryResult;

impl Repository {
    /// Create an empty branch; the current branch does not change
    pub fn create_branch(&mut self, name: &str) -> RepositoryResult<Branch> {
        let name = BranchName::try_parse(name)?;
        let _guard = self.lock()?;

        Ok(self.refs_mut().create_branch(name)?.clone())
    }
}
