use crate::artifacts::objects::commit::CommitTree;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_status::FileStatus;
use derive_new::new;

/// Classifies working tree files against the staged entries and the last commit
///
/// | staged          | committed        | result                |
/// |-----------------|------------------|-----------------------|
/// | differs         | -                | Modified (staged)     |
/// | absent          | differs          | Modified (not staged) |
/// | absent          | absent           | Untracked             |
/// | matches         | -                | unchanged             |
/// | absent          | matches          | unchanged             |
#[derive(Debug, new)]
pub struct Inspector<'a> {
    staged: &'a CommitTree,
    committed: &'a CommitTree,
}

impl<'a> Inspector<'a> {
    pub fn inspect_file(&self, name: &str, current: &ObjectId) -> Option<FileStatus> {
        match (self.staged.get(name), self.committed.get(name)) {
            (Some(staged), _) if staged != current => Some(FileStatus::ModifiedStaged),
            (Some(_), _) => None,
            (None, Some(committed)) if committed != current => {
                Some(FileStatus::ModifiedNotStaged)
            }
            (None, Some(_)) => None,
            (None, None) => Some(FileStatus::Untracked),
        }
    }

    /// Staged names for which `exists` reports no working tree file
    pub fn deleted_staged(&self, exists: impl Fn(&str) -> bool) -> Vec<String> {
        self.staged
            .keys()
            .filter(|name| !exists(name))
            .cloned()
            .collect()
    }
}
