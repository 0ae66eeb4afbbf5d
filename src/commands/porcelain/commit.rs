use crate::areas::repository::Repository;
use crate::artifacts::access::policy::AccessMode;
use crate::artifacts::access::role::Command;
use crate::artifacts::objects::commit::Commit;
use std::io::Write;

impl Repository {
    /// Record the staged files as a new commit on the current branch
    ///
    /// The commit object is stored before the branch head advances, and the
    /// index is cleared only once the head points at the new commit.
    pub fn commit(&self, user: &str, author: &str, message: &str) -> anyhow::Result<()> {
        self.access().authorize_command(user, Command::Commit)?;

        if !self.index().exists() {
            writeln!(self.writer(), "Nothing to commit. Staging area is empty.")?;
            return Ok(());
        }

        let tree = self.index().read_staged()?;
        if tree.is_empty() {
            writeln!(self.writer(), "Nothing to commit. Staging area is empty.")?;
            return Ok(());
        }

        let branch = self.refs().read_head()?;
        self.access()
            .authorize_branch(user, &branch, AccessMode::Edit)?;

        let parent = self.refs().read_branch(&branch)?;
        let commit = Commit::new(message.to_string(), author.to_string(), tree, parent);
        let commit_id = self.database().store(&commit)?;

        self.refs().write_branch(&branch, &commit_id)?;
        self.index().clear()?;

        writeln!(
            self.writer(),
            "Committed to '{}' with hash {}",
            branch,
            commit_id
        )?;

        Ok(())
    }
}
