use crate::areas::repository::Repository;
use crate::artifacts::access::role::Command;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

const RECORD_DELIMITER: &str = "====================================";

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Show the history of the branch HEAD points at
    pub fn log(&self, user: &str, opts: &LogOptions) -> anyhow::Result<()> {
        self.access().authorize_command(user, Command::Log)?;

        let branch = self.refs().read_head()?;
        self.walk_branch(&branch, opts)
    }

    /// Show the history of `branch`, whichever branch is checked out
    pub fn log_branch(
        &self,
        user: &str,
        branch: &BranchName,
        opts: &LogOptions,
    ) -> anyhow::Result<()> {
        self.access().authorize_command(user, Command::Log)?;

        self.walk_branch(branch, opts)
    }

    // Records already written stay on the output when a later object fails to load.
    fn walk_branch(&self, branch: &BranchName, opts: &LogOptions) -> anyhow::Result<()> {
        let mut curr_commit_oid = self.refs().read_branch(branch)?;

        if curr_commit_oid.is_none() {
            writeln!(self.writer(), "No commits found.")?;
            return Ok(());
        }

        while let Some(commit_oid) = curr_commit_oid {
            let commit = self.database().parse_object_as_commit(&commit_oid)?;

            self.display_commit(&commit_oid, &commit, opts)?;

            // Move to the parent commit for the next iteration
            curr_commit_oid = commit.parent().cloned();
        }

        Ok(())
    }

    fn display_commit(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        opts: &LogOptions,
    ) -> anyhow::Result<()> {
        if opts.oneline {
            writeln!(
                self.writer(),
                "{} {}",
                commit_oid.to_short_oid().yellow(),
                commit.short_message()
            )?;
            return Ok(());
        }

        let mut writer = self.writer();
        writeln!(writer, "{}", RECORD_DELIMITER)?;
        writeln!(writer, "Commit: {}", commit_oid.as_ref().yellow())?;
        writeln!(writer, "Author: {}", commit.author())?;
        writeln!(writer, "Date:   {}", commit.timestamp())?;
        writeln!(writer, "Message: {}", commit.message())?;
        writeln!(writer, "{}", RECORD_DELIMITER)?;
        writeln!(writer)?;

        Ok(())
    }
}
