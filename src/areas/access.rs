//! Access mediator
//!
//! Role-based checks backed by two JSON documents in the repository directory:
//! - `roles.json`: user name to role name, consulted for every command
//! - `branch_permissions.json`: per-user branch policies, consulted for
//!   branch-scoped operations
//!
//! Both documents are read on every check so that edits take effect on the next
//! invocation. A missing or unparseable role map denies every command. A missing
//! or unparseable branch policy document answers with the configured fallback.

use crate::artifacts::access::policy::{AccessMode, BranchPolicies, BranchPolicy, RoleMap};
use crate::artifacts::access::role::{Command, Role};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::config::PolicyFallback;
use crate::artifacts::core::error::RepositoryError;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, warn};

pub const ROLES_FILE: &str = "roles.json";
pub const BRANCH_PERMISSIONS_FILE: &str = "branch_permissions.json";

#[derive(Debug)]
pub struct Access {
    /// Path to the repository directory (typically `.mygit`)
    path: Box<Path>,
    fallback: PolicyFallback,
}

impl Access {
    pub fn new(path: Box<Path>, fallback: PolicyFallback) -> Self {
        Access { path, fallback }
    }

    pub fn roles_path(&self) -> Box<Path> {
        self.path.join(ROLES_FILE).into_boxed_path()
    }

    pub fn branch_permissions_path(&self) -> Box<Path> {
        self.path.join(BRANCH_PERMISSIONS_FILE).into_boxed_path()
    }

    /// Whether the role of `user` lists `command`
    pub fn has_permission(&self, user: &str, command: Command) -> bool {
        let roles = match Self::load_document::<RoleMap>(&self.roles_path()) {
            Ok(roles) => roles,
            Err(error) => {
                warn!(error = %format!("{error:#}"), "role map unavailable, denying");
                return false;
            }
        };

        let allowed = roles
            .get(user)
            .and_then(|role| role.parse::<Role>().ok())
            .is_some_and(|role| role.allows(command));

        debug!(user, %command, allowed, "command permission checked");
        allowed
    }

    pub fn can_create_branch(&self, user: &str) -> bool {
        let allowed = self
            .with_policy(user, |policy| policy.global.can_create_branch)
            .unwrap_or_else(|| self.fallback.allows());

        debug!(user, allowed, "branch creation permission checked");
        allowed
    }

    pub fn can_access_branch(&self, user: &str, branch: &BranchName, mode: AccessMode) -> bool {
        let allowed = self
            .with_policy(user, |policy| policy.grants(branch.as_ref(), mode))
            .unwrap_or_else(|| self.fallback.allows());

        debug!(user, %branch, %mode, allowed, "branch permission checked");
        allowed
    }

    pub fn authorize_command(&self, user: &str, command: Command) -> anyhow::Result<()> {
        if !self.has_permission(user, command) {
            anyhow::bail!(RepositoryError::Denied(format!(
                "user '{}' is not allowed to run '{}'",
                user, command
            )));
        }

        Ok(())
    }

    pub fn authorize_branch_creation(&self, user: &str) -> anyhow::Result<()> {
        if !self.can_create_branch(user) {
            anyhow::bail!(RepositoryError::Denied(format!(
                "user '{}' is not allowed to create branches",
                user
            )));
        }

        Ok(())
    }

    pub fn authorize_branch(
        &self,
        user: &str,
        branch: &BranchName,
        mode: AccessMode,
    ) -> anyhow::Result<()> {
        if !self.can_access_branch(user, branch, mode) {
            anyhow::bail!(RepositoryError::Denied(format!(
                "user '{}' is not allowed to {} branch '{}'",
                user, mode, branch
            )));
        }

        Ok(())
    }

    /// Apply `check` to the policy of `user`
    ///
    /// # Returns
    ///
    /// None when the policy document is missing or unparseable. A user absent
    /// from a readable document gets an empty policy.
    fn with_policy(&self, user: &str, check: impl FnOnce(&BranchPolicy) -> bool) -> Option<bool> {
        match Self::load_document::<BranchPolicies>(&self.branch_permissions_path()) {
            Ok(policies) => Some(check(&policies.get(user).cloned().unwrap_or_default())),
            Err(error) => {
                warn!(
                    error = %format!("{error:#}"),
                    fallback = ?self.fallback,
                    "branch policy unavailable, using fallback"
                );
                None
            }
        }
    }

    fn load_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;

        serde_json::from_str(&content)
            .map_err(|error| RepositoryError::corrupt(path.display().to_string(), error).into())
    }
}
