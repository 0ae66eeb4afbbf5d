use crate::areas::repository::Repository;
use crate::artifacts::access::policy::AccessMode;
use crate::artifacts::access::role::Command;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::RepositoryError;
use std::io::Write;

impl Repository {
    /// Point HEAD at an existing branch
    ///
    /// Only HEAD changes; the working tree is left as it is.
    pub fn checkout(&self, user: &str, name: &str) -> anyhow::Result<()> {
        self.access().authorize_command(user, Command::Checkout)?;

        let target = BranchName::try_parse(name.to_string())?;
        self.access()
            .authorize_branch(user, &target, AccessMode::View)?;

        if !self.refs().branch_exists(&target) {
            anyhow::bail!(RepositoryError::not_found("branch", target.as_ref()));
        }

        if self.refs().is_current_branch(&target)? {
            writeln!(self.writer(), "Already on '{}'", target)?;
            return Ok(());
        }

        self.refs().set_head(&target)?;

        writeln!(self.writer(), "Switched to branch '{}'", target)?;

        Ok(())
    }
}
