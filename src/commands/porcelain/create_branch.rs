use crate::areas::repository::Repository;
use crate::artifacts::access::role::Command;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::RepositoryError;
use std::io::Write;

impl Repository {
    /// Create `name` pointing at the head of the current branch
    pub fn create_branch(&self, user: &str, name: &str) -> anyhow::Result<()> {
        self.access().authorize_command(user, Command::CreateBranch)?;
        self.access().authorize_branch_creation(user)?;

        let new_branch = BranchName::try_parse(name.to_string())?;
        let current_branch = self.refs().read_head()?;

        let source_oid = self.refs().read_branch(&current_branch)?.ok_or_else(|| {
            RepositoryError::UserError(format!(
                "branch {} has no commits yet, nothing to branch from",
                current_branch
            ))
        })?;

        self.refs().create_branch(&new_branch, &source_oid)?;

        writeln!(self.writer(), "Branch created: {}", new_branch)?;

        Ok(())
    }
}
