use crate::areas::repository::Repository;
use crate::artifacts::access::role::Command;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use std::fs;
use std::io::Write;

pub const DEFAULT_BRANCH: &str = "main";

impl Repository {
    /// Create the repository layout, leaving existing files untouched
    ///
    /// The default branch file is not created here; it appears with the first
    /// commit.
    pub fn init(&self, user: &str) -> anyhow::Result<()> {
        self.access().authorize_command(user, Command::Init)?;

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .mygit/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .mygit/refs/heads directory")?;

        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs()
            .init_head(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        writeln!(
            self.writer(),
            "Initialized empty MyGit repository in {}",
            self.repository_path().display()
        )?;

        Ok(())
    }
}
