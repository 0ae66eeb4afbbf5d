use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::artifacts::core::error::RepositoryError;
use anyhow::Context;

pub const REF_PREFIX: &str = "refs/heads/";

/// Target of the symbolic HEAD, e.g. `refs/heads/main`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn for_branch(branch_name: &BranchName) -> Self {
        Self(format!("{REF_PREFIX}{branch_name}"))
    }

    pub fn as_ref_path(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymRefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!(RepositoryError::UserError(
                "branch name cannot be empty".to_string()
            ));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            anyhow::bail!(RepositoryError::UserError(format!(
                "invalid branch name: {}",
                name
            )));
        } else {
            Ok(Self(name))
        }
    }

    /// Extract the branch name from a HEAD target such as `refs/heads/main`
    pub fn try_parse_sym_ref_name(sym_ref_name: &str) -> anyhow::Result<Self> {
        let name = sym_ref_name.strip_prefix(REF_PREFIX).ok_or_else(|| {
            RepositoryError::corrupt(
                "HEAD",
                format!(
                    "symbolic ref name must start with '{}', got '{}'",
                    REF_PREFIX, sym_ref_name
                ),
            )
        })?;

        Self::try_parse(name.to_string())
            .map_err(|error| RepositoryError::corrupt("HEAD", error).into())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
