//! References (branch heads and HEAD)
//!
//! References are human-readable names pointing to commits:
//! - Branches: `refs/heads/<name>`, containing a 40-character commit hash
//! - HEAD: symbolic only, containing `ref: refs/heads/<name>`
//!
//! A branch file is first written by the first commit on that branch, so a
//! missing branch file means "no commits yet". Readers trim surrounding
//! whitespace; writers overwrite the whole file.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// References manager rooted at the repository directory
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.mygit`)
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

impl Refs {
    /// Read the branch HEAD points at
    ///
    /// Fails with `NotFound` when HEAD is missing and `Corrupt` when it is not a
    /// symbolic reference to a branch.
    pub fn read_head(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        if !head_path.exists() {
            anyhow::bail!(RepositoryError::not_found(
                "reference",
                HEAD_REF_NAME.to_string()
            ));
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?
            .captures(content)
            .ok_or_else(|| {
                RepositoryError::corrupt("HEAD", format!("invalid HEAD format '{}'", content))
            })?;

        BranchName::try_parse_sym_ref_name(symref_match[1].trim())
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(&self.read_head()? == branch_name)
    }

    /// Point HEAD at `branch_name`
    pub fn set_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        let sym_ref_name = SymRefName::for_branch(branch_name);
        self.update_ref_file(self.head_path(), format!("ref: {}", sym_ref_name))?;

        info!(branch = %branch_name, "HEAD updated");
        Ok(())
    }

    /// Write the initial HEAD unless one already exists
    ///
    /// # Returns
    ///
    /// true if HEAD was created
    pub fn init_head(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        if self.head_path().exists() {
            return Ok(false);
        }

        let sym_ref_name = SymRefName::for_branch(branch_name);
        self.update_ref_file(self.head_path(), format!("ref: {}\n", sym_ref_name))?;

        Ok(true)
    }

    /// Read the commit a branch points at
    ///
    /// # Returns
    ///
    /// None if the branch has no commits yet (no file, or an empty one)
    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let ref_path = self.branch_path(branch_name);
        if !ref_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&ref_path)
            .with_context(|| format!("failed to read ref file at {:?}", ref_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content.to_string())
            .map(Some)
            .with_context(|| format!("invalid commit hash in branch {}", branch_name))
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    /// Overwrite the head of a branch
    pub fn write_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(self.branch_path(branch_name), oid.to_string())?;

        debug!(branch = %branch_name, %oid, "branch head advanced");
        Ok(())
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        // check whether another branch with the same name already exists
        if self.branch_exists(name) {
            anyhow::bail!(RepositoryError::UserError(format!(
                "branch {} already exists",
                name
            )));
        }

        self.update_ref_file(self.branch_path(name), source_oid.to_string())?;

        info!(branch = %name, oid = %source_oid, "branch created");
        Ok(())
    }

    /// List all branches, sorted by name
    ///
    /// Files under `refs/heads/` whose names are not valid branch names are
    /// skipped with a warning.
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();
        if !heads_path.exists() {
            return Ok(Vec::new());
        }

        let branches = WalkDir::new(&heads_path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                Some(relative_path.to_string_lossy().replace('\\', "/"))
            })
            .filter_map(|name| match BranchName::try_parse(name.clone()) {
                Ok(branch_name) => Some(branch_name),
                Err(error) => {
                    warn!(ref_name = %name, %error, "skipping unreadable branch name");
                    None
                }
            })
            .collect();

        Ok(branches)
    }

    fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        std::fs::write(&path, raw_ref.as_bytes())
            .with_context(|| format!("failed to write ref file at {:?}", path))
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.heads_path().join(branch_name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
