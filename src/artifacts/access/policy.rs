use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Contents of `branch_permissions.json`, keyed by user name
pub type BranchPolicies = HashMap<String, BranchPolicy>;

/// Contents of `roles.json`: user name to role name
///
/// Role names stay strings so that a single unknown role only locks out its
/// own user instead of invalidating the whole document.
pub type RoleMap = HashMap<String, String>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPolicy {
    #[serde(default)]
    pub global: GlobalPolicy,
    #[serde(default)]
    pub branch_access: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalPolicy {
    #[serde(default)]
    pub can_create_branch: bool,
}

impl BranchPolicy {
    /// Access level granted on `branch`, if any
    pub fn level(&self, branch: &str) -> Option<AccessMode> {
        self.branch_access
            .get(branch)
            .and_then(|level| level.parse().ok())
    }

    pub fn grants(&self, branch: &str, mode: AccessMode) -> bool {
        self.level(branch).is_some_and(|level| level.covers(mode))
    }
}

/// Access requested on, or granted for, a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    View,
    Edit,
}

impl AccessMode {
    /// Whether holding this level is enough for the `requested` mode
    pub fn covers(&self, requested: AccessMode) -> bool {
        match self {
            AccessMode::Edit => true,
            AccessMode::View => requested == AccessMode::View,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessMode::View => "view",
            AccessMode::Edit => "edit",
        }
    }
}

impl FromStr for AccessMode {
    type Err = anyhow::Error;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "view" => Ok(AccessMode::View),
            "edit" => Ok(AccessMode::Edit),
            _ => anyhow::bail!("unknown access level '{}'", mode),
        }
    }
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
