//! Repository configuration
//!
//! The configuration is resolved once per invocation: the work tree either comes
//! from an explicit path or is discovered by walking up from the current directory
//! until a `.mygit/` directory is found.

use crate::artifacts::core::REPOSITORY_DIR;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Answer given by branch-scoped checks when the branch policy document is
/// missing or unparseable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PolicyFallback {
    #[default]
    Allow,
    Deny,
}

impl PolicyFallback {
    pub fn allows(&self) -> bool {
        matches!(self, PolicyFallback::Allow)
    }
}

#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Directory holding the tracked files and the `.mygit/` directory
    pub work_tree: PathBuf,
    pub branch_policy_fallback: PolicyFallback,
}

impl RepositoryConfig {
    pub fn new(work_tree: PathBuf, branch_policy_fallback: PolicyFallback) -> Self {
        RepositoryConfig {
            work_tree,
            branch_policy_fallback,
        }
    }

    /// Resolve the work tree for this invocation
    ///
    /// An explicit work tree is taken as is. Otherwise the closest ancestor of
    /// `start` containing a repository directory is used, falling back to `start`
    /// itself so that `init` can create a fresh repository there.
    pub fn discover(
        explicit_work_tree: Option<PathBuf>,
        start: &Path,
        branch_policy_fallback: PolicyFallback,
    ) -> Self {
        let work_tree = explicit_work_tree
            .or_else(|| Self::find_work_tree(start))
            .unwrap_or_else(|| start.to_path_buf());

        Self::new(work_tree, branch_policy_fallback)
    }

    /// Create the work tree directory if it is missing; only `init` does this
    pub fn create_work_tree(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.work_tree).with_context(|| {
            format!("Unable to create work tree {}", self.work_tree.display())
        })
    }

    pub fn find_work_tree(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(REPOSITORY_DIR).is_dir())
            .map(Path::to_path_buf)
    }
}
