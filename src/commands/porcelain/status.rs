use crate::areas::repository::Repository;
use crate::artifacts::access::role::Command;
use crate::artifacts::objects::commit::CommitTree;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::file_status::FileStatus;
use crate::artifacts::status::inspector::Inspector;
use std::io::Write;
use tracing::warn;

// Terminology:
// - staged: the hash recorded for a file by the latest `add`
// - committed: the hash of a file in the tree of the current branch tip
// - untracked: neither staged nor committed
impl Repository {
    pub fn status(&self, user: &str) -> anyhow::Result<()> {
        self.access().authorize_command(user, Command::Status)?;

        let staged = self.index().read_staged()?;
        let committed = self.committed_tree()?;
        let inspector = Inspector::new(&staged, &committed);

        let mut changes = Vec::new();
        for name in self.workspace().list_files()? {
            let current = match self.workspace().parse_blob(&name) {
                Ok(blob) => blob.object_id()?,
                Err(error) => {
                    warn!(
                        file = %name,
                        error = %format!("{error:#}"),
                        "skipping unreadable file"
                    );
                    continue;
                }
            };

            if let Some(status) = inspector.inspect_file(&name, &current) {
                changes.push((status, name));
            }
        }

        let deleted = inspector
            .deleted_staged(|name| self.workspace().file_exists(name))
            .into_iter()
            .map(|name| (FileStatus::DeletedStaged, name));
        changes.extend(deleted);

        writeln!(self.writer(), "=== MyGit Status ===")?;
        for (status, name) in changes {
            writeln!(self.writer(), "{}: {}", status, name)?;
        }

        Ok(())
    }

    /// Tree of the commit the current branch points at, empty before the first commit
    fn committed_tree(&self) -> anyhow::Result<CommitTree> {
        let branch = self.refs().read_head()?;

        match self.refs().read_branch(&branch)? {
            Some(commit_id) => Ok(self
                .database()
                .parse_object_as_commit(&commit_id)?
                .tree()
                .clone()),
            None => Ok(CommitTree::new()),
        }
    }
}
