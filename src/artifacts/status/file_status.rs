use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileStatus {
    /// Staged, but the working tree content differs from the staged blob
    ModifiedStaged,
    /// Not staged, and the working tree content differs from the last commit
    ModifiedNotStaged,
    Untracked,
    /// Staged, but missing from the working tree
    DeletedStaged,
}

impl From<&FileStatus> for &str {
    fn from(status: &FileStatus) -> Self {
        match status {
            FileStatus::ModifiedStaged => "Modified (staged)",
            FileStatus::ModifiedNotStaged => "Modified (not staged)",
            FileStatus::Untracked => "Untracked",
            FileStatus::DeletedStaged => "Deleted (staged)",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_label = match self {
            FileStatus::ModifiedStaged | FileStatus::DeletedStaged => label.green(),
            FileStatus::ModifiedNotStaged | FileStatus::Untracked => label.red(),
        };
        write!(f, "{}", colored_label)
    }
}
