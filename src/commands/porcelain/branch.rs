use crate::areas::repository::Repository;
use crate::artifacts::access::role::Command;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// List branches, marking the one HEAD points at
    pub fn branch(&self, user: &str) -> anyhow::Result<()> {
        self.access().authorize_command(user, Command::Branch)?;

        let branches = self.refs().list_branches()?;
        let current = self.refs().read_head()?;

        writeln!(self.writer(), "Available branches:")?;
        for branch in branches {
            if branch == current {
                writeln!(self.writer(), "* {}", branch.as_ref().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(())
    }
}
